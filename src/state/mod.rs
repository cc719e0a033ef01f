pub mod pointer;

pub use pointer::{board_point, mouse_client_point, touch_client_point, CanvasSurface};
