use crate::core::data::plane_rect::{Axis, PlaneRect, PlaneRectError};
use crate::core::util::decimal::format_fixed;
use num::bigint::BigInt;
use num::{BigRational, Signed};
use std::fmt;
use thiserror::Error;

/// Iteration depths at or below this value are refused.
pub const ITERATION_FLOOR: u32 = 10;

pub const DEFAULT_PAN_STEPS: u32 = 40;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewportError {
    #[error(transparent)]
    Interval(#[from] PlaneRectError),
    #[error("max iterations must be above {floor}, got {proposed}")]
    IterationFloorViolation { proposed: i64, floor: u32 },
    #[error("max iterations {proposed} is out of range")]
    IterationOverflow { proposed: i64 },
    #[error("grid size must be greater than zero")]
    ZeroGridSize,
    #[error("pan granularity must be greater than zero")]
    ZeroPanSteps,
}

/// The visible region of the plane together with the sampling density and iteration depth.
///
/// Every mutation is validated on a candidate value before it replaces `self`, so an
/// invalid viewport is never observable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
    rect: PlaneRect,
    grid_size: usize,
    max_iterations: u32,
    pan_steps: u32,
}

fn check_max_iterations(proposed: i64) -> Result<u32, ViewportError> {
    if proposed <= i64::from(ITERATION_FLOOR) {
        return Err(ViewportError::IterationFloorViolation {
            proposed,
            floor: ITERATION_FLOOR,
        });
    }

    u32::try_from(proposed).map_err(|_| ViewportError::IterationOverflow { proposed })
}

impl Viewport {
    pub fn new(rect: PlaneRect, grid_size: usize, max_iterations: u32) -> Result<Self, ViewportError> {
        if grid_size == 0 {
            return Err(ViewportError::ZeroGridSize);
        }

        let max_iterations = check_max_iterations(i64::from(max_iterations))?;

        Ok(Self {
            rect,
            grid_size,
            max_iterations,
            pan_steps: DEFAULT_PAN_STEPS,
        })
    }

    pub fn with_pan_steps(mut self, pan_steps: u32) -> Result<Self, ViewportError> {
        if pan_steps == 0 {
            return Err(ViewportError::ZeroPanSteps);
        }

        self.pan_steps = pan_steps;
        Ok(self)
    }

    #[must_use]
    pub fn rect(&self) -> &PlaneRect {
        &self.rect
    }

    #[must_use]
    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn pan_steps(&self) -> u32 {
        self.pan_steps
    }

    #[must_use]
    pub fn bounds(&self) -> Bounds {
        Bounds {
            from_x: self.rect.from_x().clone(),
            to_x: self.rect.to_x().clone(),
            from_y: self.rect.from_y().clone(),
            to_y: self.rect.to_y().clone(),
            max_iterations: self.max_iterations,
        }
    }

    fn pan_offset(&self, axis: Axis, direction: i32) -> BigRational {
        let step = self.rect.span(axis) / BigRational::from_integer(BigInt::from(self.pan_steps));
        step * BigRational::from_integer(BigInt::from(direction))
    }

    /// The viewport moved by `dx` and `dy` pan steps; spans are unchanged.
    #[must_use]
    pub fn panned(&self, dx: i32, dy: i32) -> Self {
        let rect = self
            .rect
            .translated(&self.pan_offset(Axis::X, dx), &self.pan_offset(Axis::Y, dy));

        Self {
            rect,
            ..self.clone()
        }
    }

    /// The viewport rescaled about its centre: a negative factor divides each span by
    /// `|factor|` (zoom in), a non-negative one multiplies it (zoom out).
    pub fn zoomed(&self, factor: &BigRational) -> Result<Self, ViewportError> {
        let scale = factor.abs();

        let (span_x, span_y) = if factor.is_negative() {
            (self.rect.span(Axis::X) / &scale, self.rect.span(Axis::Y) / &scale)
        } else {
            (self.rect.span(Axis::X) * &scale, self.rect.span(Axis::Y) * &scale)
        };

        let rect = self.rect.rescaled(&span_x, &span_y)?;

        Ok(Self {
            rect,
            ..self.clone()
        })
    }

    pub fn with_iteration_delta(&self, delta: i64) -> Result<Self, ViewportError> {
        let proposed = i64::from(self.max_iterations).saturating_add(delta);
        let max_iterations = check_max_iterations(proposed)?;

        Ok(Self {
            max_iterations,
            ..self.clone()
        })
    }

    pub fn pan(&mut self, dx: i32, dy: i32) {
        *self = self.panned(dx, dy);
    }

    pub fn zoom(&mut self, factor: &BigRational) -> Result<(), ViewportError> {
        *self = self.zoomed(factor)?;
        Ok(())
    }

    pub fn set_max_iterations(&mut self, delta: i64) -> Result<(), ViewportError> {
        *self = self.with_iteration_delta(delta)?;
        Ok(())
    }
}

/// Read-only copy of the viewport bounds handed to renderers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bounds {
    pub from_x: BigRational,
    pub to_x: BigRational,
    pub from_y: BigRational,
    pub to_y: BigRational,
    pub max_iterations: u32,
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {} -> {}, {}) x{}",
            format_fixed(&self.from_x, 2),
            format_fixed(&self.from_y, 2),
            format_fixed(&self.to_x, 2),
            format_fixed(&self.to_y, 2),
            self.max_iterations
        )
    }
}
