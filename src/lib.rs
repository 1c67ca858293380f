pub mod cli;
pub mod config;
pub mod controllers;
pub mod core;
pub mod input;
pub mod presenters;

pub use crate::config::{ConfigError, PlotConfig, PlotSettings};
pub use crate::controllers::interactive::{InteractiveController, InteractivePlot, RepaintEvent, RepaintPresenterPort};
pub use crate::controllers::plot::{Change, Command, MandelbrotPlot, Outcome, PlotEvent, PlotPresenterPort, RejectReason};
pub use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
pub use crate::core::actions::repaint::repaint_engine::{RepaintEngine, RepaintError, RepaintStrategy};
pub use crate::core::data::grid::{Grid, GridError};
pub use crate::core::data::plane_rect::{Axis, PlaneRect, PlaneRectError};
pub use crate::core::data::viewport::{Bounds, ITERATION_FLOOR, Viewport, ViewportError};
pub use crate::core::fractals::mandelbrot::algorithm::escape;
pub use crate::core::util::decimal::{DecimalParseError, format_fixed, parse_decimal};
pub use crate::core::util::sample_axis::sample_axis;
pub use crate::input::keys::{KeySteps, command_for_key, parse_key_script};
pub use crate::presenters::cell_class::{CellClass, DisplayMode, classify};
pub use crate::presenters::text::text_presenter::TextPresenter;

#[cfg(feature = "tui")]
pub use crate::input::tui::{TuiError, run_tui};
