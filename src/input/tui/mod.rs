//! Interactive terminal front end.

pub mod app;
pub mod keymap;
pub mod terminal_guard;

use crate::config::PlotSettings;
use crate::core::actions::repaint::repaint_engine::RepaintError;
use crate::input::tui::app::TuiApp;
use crate::input::tui::terminal_guard::TerminalGuard;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::io;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum TuiError {
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),
    #[error("cannot paint initial viewport: {0}")]
    Repaint(#[from] RepaintError),
}

pub fn run_tui(settings: PlotSettings) -> Result<(), TuiError> {
    let engine = settings.repaint_engine();
    let mut app = TuiApp::new(settings.viewport, engine, settings.key_steps)?;

    let _guard = TerminalGuard::new()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    info!("terminal session started");
    app.run(&mut terminal)?;
    info!(generation = app.plot().generation(), "terminal session ended");

    Ok(())
}
