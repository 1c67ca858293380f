use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::cell::CellPos;
use crate::core::data::plane_rect::Axis;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::util::sample_axis::sample_axis;
use num::complex::Complex64;
use num::ToPrimitive;

const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Escape time of `c` under `z -> z^2 + c` starting from `z = 0`.
///
/// Returns the first step `n` at which `|z_n| > 2`, or `0` when the budget runs out.
/// `z_0` is always the origin, so a genuine escape is never reported at step 0 and
/// the two meanings of `0` cannot actually collide.
#[must_use]
pub fn escape(c: Complex64, max_iterations: u32) -> u32 {
    let mut z = Complex64::new(0.0, 0.0);

    for iteration in 0..max_iterations {
        if z.norm_sqr() > ESCAPE_RADIUS_SQUARED {
            return iteration;
        }
        z = z * z + c;
    }

    0
}

/// Evaluates grid cells against one immutable viewport snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct MandelbrotAlgorithm {
    real_axis: Vec<f64>,
    imag_axis: Vec<f64>,
    max_iterations: u32,
}

fn sample_to_f64(viewport: &Viewport, axis: Axis) -> Result<Vec<f64>, MandelbrotError> {
    let (from, to) = viewport.rect().interval(axis);
    let samples = sample_axis(from, to, viewport.grid_size());

    if samples.len() != viewport.grid_size() {
        return Err(MandelbrotError::SampleCountMismatch {
            axis,
            expected: viewport.grid_size(),
            actual: samples.len(),
        });
    }

    samples
        .iter()
        .enumerate()
        .map(|(index, sample)| {
            sample
                .to_f64()
                .filter(|value| value.is_finite())
                .ok_or(MandelbrotError::NonFiniteCoordinate { axis, index })
        })
        .collect()
}

impl MandelbrotAlgorithm {
    pub fn new(viewport: &Viewport) -> Result<Self, MandelbrotError> {
        if viewport.max_iterations() == 0 {
            return Err(MandelbrotError::ZeroMaxIterations);
        }

        Ok(Self {
            real_axis: sample_to_f64(viewport, Axis::X)?,
            imag_axis: sample_to_f64(viewport, Axis::Y)?,
            max_iterations: viewport.max_iterations(),
        })
    }

    pub fn point(&self, cell: CellPos) -> Result<Complex64, MandelbrotError> {
        match (self.real_axis.get(cell.col), self.imag_axis.get(cell.row)) {
            (Some(&re), Some(&im)) => Ok(Complex64::new(re, im)),
            _ => Err(MandelbrotError::CellOutsideGrid {
                cell,
                size: self.grid_size(),
            }),
        }
    }
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = u32;
    type Failure = MandelbrotError;

    fn compute(&self, cell: CellPos) -> Result<Self::Success, Self::Failure> {
        let c = self.point(cell)?;
        Ok(escape(c, self.max_iterations))
    }

    fn grid_size(&self) -> usize {
        self.real_axis.len()
    }
}
