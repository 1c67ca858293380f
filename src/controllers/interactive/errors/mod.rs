pub mod repaint_failure;
