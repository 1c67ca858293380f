use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
use crate::core::actions::generate_fractal::errors::GenerateFractalError;
use crate::core::actions::generate_fractal::generate_fractal::generate_fractal_cancelable;
use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon_cancelable;
use crate::core::data::grid::{Grid, GridData, GridError};
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RepaintStrategy {
    Serial,
    #[default]
    Parallel,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepaintError {
    #[error("cannot evaluate viewport: {0}")]
    Algorithm(#[from] MandelbrotError),
    #[error("cannot store repaint: {0}")]
    Grid(#[from] GridError),
    #[error(transparent)]
    Cancelled(#[from] Cancelled),
}

impl From<GenerateFractalError<MandelbrotError>> for RepaintError {
    fn from(err: GenerateFractalError<MandelbrotError>) -> Self {
        match err {
            GenerateFractalError::Cancelled(cancelled) => Self::Cancelled(cancelled),
            GenerateFractalError::Algorithm(err) => Self::Algorithm(err),
        }
    }
}

/// Recomputes every grid cell from a single viewport snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RepaintEngine {
    strategy: RepaintStrategy,
}

impl RepaintEngine {
    #[must_use]
    pub fn new(strategy: RepaintStrategy) -> Self {
        Self { strategy }
    }

    /// Checks that `viewport` can be sampled without rendering it.
    pub fn validate(&self, viewport: &Viewport) -> Result<(), RepaintError> {
        MandelbrotAlgorithm::new(viewport)?;
        Ok(())
    }

    /// Row-major escape counts for `viewport`, `grid_size²` long.
    pub fn render(&self, viewport: &Viewport) -> Result<GridData, RepaintError> {
        self.render_cancelable(viewport, &NeverCancel)
    }

    pub fn render_cancelable<C: CancelToken>(
        &self,
        viewport: &Viewport,
        cancel: &C,
    ) -> Result<GridData, RepaintError> {
        let algorithm = MandelbrotAlgorithm::new(viewport)?;

        let start = Instant::now();
        let cells = match self.strategy {
            RepaintStrategy::Serial => generate_fractal_cancelable(&algorithm, cancel)?,
            RepaintStrategy::Parallel => generate_fractal_parallel_rayon_cancelable(&algorithm, cancel)?,
        };

        debug!(
            strategy = ?self.strategy,
            grid_size = viewport.grid_size(),
            max_iterations = viewport.max_iterations(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "rendered viewport"
        );

        Ok(cells)
    }

    /// Renders `viewport` and swaps the result into `grid`.
    ///
    /// `grid` is only touched once the whole buffer is ready, so a failure leaves it as it was.
    pub fn recompute(&self, viewport: &Viewport, grid: &mut Grid) -> Result<usize, RepaintError> {
        let start = Instant::now();
        let cells = self.render(viewport)?;
        let count = cells.len();

        grid.set_cells(cells)?;

        info!(
            cells = count,
            bounds = %viewport.bounds(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "grid repainted"
        );

        Ok(count)
    }
}
