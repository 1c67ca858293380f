use crate::controllers::plot::command::RejectReason;
use crate::core::data::viewport::Bounds;

/// Notifications emitted after a command has been fully committed or refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlotEvent {
    Repainted { generation: u64, bounds: Bounds },
    /// A background repaint of `bounds` was started; its grid arrives separately.
    Queued { generation: u64, bounds: Bounds },
    DisplayToggled,
    Denied(RejectReason),
    Quit,
}

pub trait PlotPresenterPort: Send + Sync {
    fn present(&self, event: &PlotEvent);
}
