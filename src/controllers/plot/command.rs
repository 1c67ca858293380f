use crate::core::actions::repaint::repaint_engine::RepaintError;
use crate::core::data::plane_rect::{Axis, PlaneRectError};
use crate::core::data::viewport::{Viewport, ViewportError};
use num::BigRational;
use thiserror::Error;

/// A discrete request from the input layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Move by whole pan steps; positive `dx` moves right, positive `dy` moves towards larger y.
    Pan { dx: i32, dy: i32 },
    /// Negative factors zoom in by `|factor|`, non-negative ones zoom out.
    Zoom(BigRational),
    AdjustIterations(i64),
    ToggleDisplay,
    Quit,
}

impl Command {
    #[must_use]
    pub fn zoom_in(factor: &BigRational) -> Self {
        Self::Zoom(-factor.clone())
    }

    #[must_use]
    pub fn zoom_out(factor: &BigRational) -> Self {
        Self::Zoom(factor.clone())
    }

    /// The viewport this command would commit, or `None` for commands that leave it alone.
    pub fn next_viewport(&self, viewport: &Viewport) -> Option<Result<Viewport, ViewportError>> {
        match self {
            Self::Pan { dx, dy } => Some(Ok(viewport.panned(*dx, *dy))),
            Self::Zoom(factor) => Some(viewport.zoomed(factor)),
            Self::AdjustIterations(delta) => Some(viewport.with_iteration_delta(*delta)),
            Self::ToggleDisplay | Self::Quit => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    /// Every cell was recomputed from the newly committed viewport.
    Repainted { generation: u64, cells: usize },
    /// The viewport was committed and its repaint handed to the background worker.
    Queued { generation: u64 },
    DisplayToggled,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RejectReason {
    #[error("max iterations {proposed} is not above the floor of {floor}")]
    IterationFloor { proposed: i64, floor: u32 },
    #[error("max iterations {proposed} is out of range")]
    IterationOverflow { proposed: i64 },
    #[error("command would leave an empty {0} interval")]
    InvalidInterval(Axis),
    #[error("repaint failed: {0}")]
    Repaint(String),
}

impl From<ViewportError> for RejectReason {
    fn from(err: ViewportError) -> Self {
        match err {
            ViewportError::Interval(PlaneRectError::InvalidInterval { axis, .. }) => Self::InvalidInterval(axis),
            ViewportError::IterationFloorViolation { proposed, floor } => Self::IterationFloor { proposed, floor },
            ViewportError::IterationOverflow { proposed } => Self::IterationOverflow { proposed },
            other => Self::Repaint(other.to_string()),
        }
    }
}

impl From<RepaintError> for RejectReason {
    fn from(err: RepaintError) -> Self {
        Self::Repaint(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Applied(Change),
    Rejected(RejectReason),
}

impl Outcome {
    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }
}
