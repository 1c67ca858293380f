pub mod repaint_engine;
