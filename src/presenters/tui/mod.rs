pub mod adapter;
pub mod frame_adapter;
pub mod palette;
pub mod presenter;
