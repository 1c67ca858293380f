pub mod interactive;
pub mod plot;
