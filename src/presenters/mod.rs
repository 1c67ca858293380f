pub mod cell_class;
pub mod text;
#[cfg(feature = "tui")]
pub mod tui;
