//! Background repaint worker.
//!
//! Viewport snapshots are submitted from the input side; a single worker renders
//! the newest one and hands finished grids to a [`RepaintPresenterPort`]. Work for
//! a superseded snapshot is cancelled cooperatively and never presented.
//! [`InteractivePlot`] drives it from plot commands.

mod controller;
pub mod data;
pub mod errors;
pub mod events;
pub mod ports;
mod session;

pub use controller::InteractiveController;
pub use events::repaint_event::RepaintEvent;
pub use ports::presenter::RepaintPresenterPort;
pub use session::InteractivePlot;
