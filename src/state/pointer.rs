// Pointer translation: raw mouse/touch client coordinates -> board units.
use web_sys::{Element, MouseEvent, TouchEvent};

use crate::geometry::Point;

/// Anything that can place a client-space point on the board.
pub trait BoardSurface {
    fn to_board(&self, client_x: f64, client_y: f64) -> Point;
}

/// Client-space placement of the board element, as read from `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl SurfaceRect {
    /// Maps into a `board_w x board_h` space. A collapsed rect (zero size) maps 1:1.
    pub fn map(&self, client_x: f64, client_y: f64, board_w: f64, board_h: f64) -> Point {
        let sx = if self.width > 0.0 { board_w / self.width } else { 1.0 };
        let sy = if self.height > 0.0 { board_h / self.height } else { 1.0 };
        Point::new((client_x - self.left) * sx, (client_y - self.top) * sy)
    }
}

/// The live canvas. The rect is re-read on every event so scrolling and resizes are picked up.
#[derive(Clone)]
pub struct CanvasSurface {
    element: Element,
    board_w: f64,
    board_h: f64,
}

impl CanvasSurface {
    pub fn new(element: Element, board_w: f64, board_h: f64) -> Self {
        Self { element, board_w, board_h }
    }

    pub fn rect(&self) -> SurfaceRect {
        let r = self.element.get_bounding_client_rect();
        SurfaceRect { left: r.left(), top: r.top(), width: r.width(), height: r.height() }
    }
}

impl BoardSurface for CanvasSurface {
    fn to_board(&self, client_x: f64, client_y: f64) -> Point {
        self.rect().map(client_x, client_y, self.board_w, self.board_h)
    }
}

pub fn mouse_client_point(e: &MouseEvent) -> (f64, f64) {
    (e.client_x() as f64, e.client_y() as f64)
}

/// First active contact, or `None` (e.g. `touchend` after the last finger lifted).
pub fn touch_client_point(e: &TouchEvent) -> Option<(f64, f64)> {
    let t0 = e.touches().item(0)?;
    Some((t0.client_x() as f64, t0.client_y() as f64))
}

pub fn board_point<S: BoardSurface + ?Sized>(
    surface: &S,
    client: Option<(f64, f64)>,
) -> Option<Point> {
    client.map(|(x, y)| surface.to_board(x, y))
}
