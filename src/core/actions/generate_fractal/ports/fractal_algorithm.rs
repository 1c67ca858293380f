use crate::core::data::cell::CellPos;
use std::error::Error;

pub trait FractalAlgorithm {
    type Success;
    type Failure: Error;

    fn compute(&self, cell: CellPos) -> Result<Self::Success, Self::Failure>;

    fn grid_size(&self) -> usize;
}
