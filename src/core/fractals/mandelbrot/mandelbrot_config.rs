//! Starting parameters for a Mandelbrot plot.
//!
//! Bounds and zoom factors are decimal strings so they can be parsed into exact
//! rationals without passing through binary floating point.

pub const DEFAULT_GRID_SIZE: usize = 40;
pub const DEFAULT_MAX_ITERATIONS: u32 = 80;

pub const DEFAULT_FROM_X: &str = "-2.5";
pub const DEFAULT_TO_X: &str = "1.5";
pub const DEFAULT_FROM_Y: &str = "-2.0";
pub const DEFAULT_TO_Y: &str = "2.0";

pub const DEFAULT_ZOOM_FINE: &str = "1.2";
pub const DEFAULT_ZOOM_COARSE: &str = "2.0";

pub const DEFAULT_ITERATIONS_FINE: i64 = 10;
pub const DEFAULT_ITERATIONS_COARSE: i64 = 100;
