pub mod decimal;
pub mod sample_axis;
