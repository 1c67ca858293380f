pub mod repaint_event;
