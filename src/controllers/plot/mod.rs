//! Synchronous command dispatch over one exclusively owned viewport and grid.

pub mod command;
mod dispatcher;
pub mod ports;

pub use command::{Change, Command, Outcome, RejectReason};
pub use dispatcher::MandelbrotPlot;
pub use ports::presenter::{PlotEvent, PlotPresenterPort};
