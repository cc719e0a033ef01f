//! Board-space primitives and the hit tests the game runs on every pointer event.

use serde::{Deserialize, Serialize};

/// A location in board units, relative to the board's top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned blocker. Touching any edge counts as a hit.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Endpoint circle (start "A" or end "B").
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub x: f64,
    pub y: f64,
    pub r: f64,
}

impl Node {
    pub fn center(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Inclusive: a point exactly on the rim is inside.
    pub fn contains(&self, p: Point) -> bool {
        distance(p, self.center()) <= self.r
    }
}

pub fn distance(a: Point, b: Point) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

pub fn point_in_rect(p: Point, r: &Obstacle) -> bool {
    p.x >= r.x && p.x <= r.x + r.width && p.y >= r.y && p.y <= r.y + r.height
}

/// True when `p` lies on the board `[0, width] x [0, height]`, edges included.
pub fn in_bounds(p: Point, width: f64, height: f64) -> bool {
    p.x >= 0.0 && p.x <= width && p.y >= 0.0 && p.y <= height
}
