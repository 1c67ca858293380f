use crate::core::data::cell::CellPos;
use crate::core::data::plane_rect::Axis;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MandelbrotError {
    #[error("maximum iterations must be greater than zero")]
    ZeroMaxIterations,
    #[error("{axis} axis produced {actual} samples for a grid of {expected}")]
    SampleCountMismatch {
        axis: Axis,
        expected: usize,
        actual: usize,
    },
    #[error("{axis} axis sample {index} has no finite f64 representation")]
    NonFiniteCoordinate { axis: Axis, index: usize },
    #[error("cell {cell} outside of {size}x{size} grid")]
    CellOutsideGrid { cell: CellPos, size: usize },
}
