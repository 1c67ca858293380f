//! Input adapters: key bindings and the terminal front end.

pub mod keys;
#[cfg(feature = "tui")]
pub mod tui;
