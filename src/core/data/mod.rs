pub mod cell;
pub mod grid;
pub mod plane_rect;
pub mod viewport;
