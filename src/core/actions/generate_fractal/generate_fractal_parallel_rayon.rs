use rayon::prelude::*;

use crate::core::actions::cancellation::{CANCEL_CHECK_INTERVAL_CELLS, CancelToken, Cancelled};
use crate::core::actions::generate_fractal::errors::GenerateFractalError;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::cell::CellPos;

/// Evaluates the grid in parallel, one rayon task per row, polling `cancel` at the
/// start of each row and every [`CANCEL_CHECK_INTERVAL_CELLS`] cells within it.
///
/// Output is row-major, identical to
/// [`generate_fractal_cancelable`](super::generate_fractal::generate_fractal_cancelable).
pub fn generate_fractal_parallel_rayon_cancelable<Alg, C>(
    algorithm: &Alg,
    cancel: &C,
) -> Result<Vec<Alg::Success>, GenerateFractalError<Alg::Failure>>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send,
    C: CancelToken,
{
    let size = algorithm.grid_size();

    let rows: Result<Vec<Vec<Alg::Success>>, GenerateFractalError<Alg::Failure>> = (0..size)
        .into_par_iter()
        .map(|row| {
            let mut values = Vec::with_capacity(size);

            for col in 0..size {
                if col % CANCEL_CHECK_INTERVAL_CELLS == 0 && cancel.is_cancelled() {
                    return Err(GenerateFractalError::Cancelled(Cancelled));
                }

                let value = algorithm
                    .compute(CellPos { col, row })
                    .map_err(GenerateFractalError::Algorithm)?;
                values.push(value);
            }

            Ok(values)
        })
        .collect();

    rows.map(|r| r.into_iter().flatten().collect())
}
