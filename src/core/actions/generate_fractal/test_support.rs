use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::cell::CellPos;
use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Error)]
#[error("StubError")]
pub struct StubError {}

/// Yields `row * 10 + col` for every cell.
#[derive(Debug)]
pub struct StubSuccessAlgorithm {
    pub size: usize,
}

impl FractalAlgorithm for StubSuccessAlgorithm {
    type Success = u64;
    type Failure = StubError;

    fn compute(&self, cell: CellPos) -> Result<Self::Success, Self::Failure> {
        Ok((cell.row * 10 + cell.col) as u64)
    }

    fn grid_size(&self) -> usize {
        self.size
    }
}

#[derive(Debug)]
pub struct StubFailureAlgorithm {
    pub size: usize,
}

impl FractalAlgorithm for StubFailureAlgorithm {
    type Success = u64;
    type Failure = StubError;

    fn compute(&self, _: CellPos) -> Result<Self::Success, Self::Failure> {
        Err(StubError {})
    }

    fn grid_size(&self) -> usize {
        self.size
    }
}
