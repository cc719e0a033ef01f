//! Board layout. The default is the classic A → B board; a host page can override it with
//! a `<script id="board-config" type="application/json">` block.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::{in_bounds, Node, Obstacle, Point};
use crate::util::cwarn;

pub const BOARD_WIDTH: f64 = 600.0;
pub const BOARD_HEIGHT: f64 = 400.0;
pub const CONFIG_ELEMENT_ID: &str = "board-config";
/// Finer grids are pointless and make the grid pass unbounded.
pub const MIN_GRID_SPACING: f64 = 1.0;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("board config is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("board size must be positive, got {width}x{height}")]
    InvalidSize { width: f64, height: f64 },
    #[error("{which} node radius must be positive, got {r}")]
    InvalidRadius { which: &'static str, r: f64 },
    #[error("{which} node center ({x}, {y}) lies outside the board")]
    NodeOutOfBounds { which: &'static str, x: f64, y: f64 },
    #[error("obstacle #{index} has a non-positive size")]
    InvalidObstacle { index: usize },
    #[error("minimum segment length must be finite and >= 0, got {0}")]
    InvalidSegment(f64),
    #[error("grid spacing must be finite and >= 1, got {0}")]
    InvalidGrid(f64),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub width: f64,
    pub height: f64,
    /// Spacing of the background grid lines.
    pub grid_spacing: f64,
    pub start: Node,
    pub end: Node,
    pub obstacles: Vec<Obstacle>,
    /// Path decimation: a point is kept only if it is at least this far from the last kept one.
    pub min_segment: f64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            grid_spacing: 20.0,
            start: Node { x: 70.0, y: BOARD_HEIGHT / 2.0, r: 30.0 },
            end: Node { x: BOARD_WIDTH - 70.0, y: BOARD_HEIGHT / 2.0, r: 30.0 },
            obstacles: vec![
                Obstacle { x: 150.0, y: 80.0, width: 80.0, height: 180.0 },
                Obstacle { x: 300.0, y: 0.0, width: 60.0, height: 160.0 },
                Obstacle { x: 380.0, y: 200.0, width: 120.0, height: 60.0 },
                Obstacle { x: 480.0, y: 40.0, width: 70.0, height: 140.0 },
            ],
            min_segment: 3.0,
        }
    }
}

impl BoardConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let cfg: BoardConfig = serde_json::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(ConfigError::InvalidSize { width: self.width, height: self.height });
        }
        for (which, node) in [("start", &self.start), ("end", &self.end)] {
            if !(node.r > 0.0) {
                return Err(ConfigError::InvalidRadius { which, r: node.r });
            }
            if !in_bounds(Point::new(node.x, node.y), self.width, self.height) {
                return Err(ConfigError::NodeOutOfBounds { which, x: node.x, y: node.y });
            }
        }
        if let Some(index) = self
            .obstacles
            .iter()
            .position(|o| !(o.width > 0.0 && o.height > 0.0))
        {
            return Err(ConfigError::InvalidObstacle { index });
        }
        if !(self.min_segment.is_finite() && self.min_segment >= 0.0) {
            return Err(ConfigError::InvalidSegment(self.min_segment));
        }
        if !(self.grid_spacing.is_finite() && self.grid_spacing >= MIN_GRID_SPACING) {
            return Err(ConfigError::InvalidGrid(self.grid_spacing));
        }
        Ok(())
    }

    /// Reads the override block from the page, falling back to the default layout when it
    /// is absent or broken.
    pub fn from_document() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        match raw {
            Some(raw) if !raw.trim().is_empty() => match Self::from_json(&raw) {
                Ok(cfg) => cfg,
                Err(e) => {
                    cwarn(&format!("ignoring #{CONFIG_ELEMENT_ID}: {e}"));
                    Self::default()
                }
            },
            _ => Self::default(),
        }
    }
}
