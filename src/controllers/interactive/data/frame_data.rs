use crate::core::data::grid::Grid;
use crate::core::data::viewport::Bounds;
use std::time::Duration;

#[derive(Debug)]
pub struct FrameData {
    pub generation: u64,
    /// The viewport the grid was rendered from.
    pub bounds: Bounds,
    pub grid: Grid,
    pub render_duration: Duration,
}
