use crate::core::actions::cancellation::{CANCEL_CHECK_INTERVAL_CELLS, CancelToken, Cancelled};
use crate::core::actions::generate_fractal::errors::GenerateFractalError;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::cell::CellPos;

/// Evaluates every cell of the algorithm's grid on the calling thread, row-major,
/// polling `cancel` every [`CANCEL_CHECK_INTERVAL_CELLS`] cells of a row.
pub fn generate_fractal_cancelable<Alg, C>(
    algorithm: &Alg,
    cancel: &C,
) -> Result<Vec<Alg::Success>, GenerateFractalError<Alg::Failure>>
where
    Alg: FractalAlgorithm,
    C: CancelToken,
{
    let size = algorithm.grid_size();
    let mut results = Vec::with_capacity(size * size);

    for row in 0..size {
        for col in 0..size {
            if col % CANCEL_CHECK_INTERVAL_CELLS == 0 && cancel.is_cancelled() {
                return Err(GenerateFractalError::Cancelled(Cancelled));
            }

            let value = algorithm
                .compute(CellPos { col, row })
                .map_err(GenerateFractalError::Algorithm)?;
            results.push(value);
        }
    }

    Ok(results)
}
