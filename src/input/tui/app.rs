use crate::controllers::interactive::InteractivePlot;
use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::events::repaint_event::RepaintEvent;
use crate::controllers::interactive::ports::presenter::RepaintPresenterPort;
use crate::controllers::plot::PlotPresenterPort;
use crate::core::actions::repaint::repaint_engine::{RepaintEngine, RepaintError};
use crate::core::data::grid::Grid;
use crate::core::data::viewport::Viewport;
use crate::input::keys::KeySteps;
use crate::input::tui::keymap::command_for_key_event;
use crate::presenters::text::text_presenter::title_line;
use crate::presenters::tui::adapter::TuiAdapter;
use crate::presenters::tui::frame_adapter::FrameAdapter;
use crate::presenters::tui::palette::Palette;
use crate::presenters::tui::presenter::{PlotView, draw};
use crossterm::event::{self, Event, KeyEvent};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::io::{self, Stdout, Write};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

const BEL: &[u8] = b"\x07";

/// How long to wait for a key before checking for a finished repaint.
const INPUT_POLL: Duration = Duration::from_millis(30);

pub type TuiTerminal = Terminal<CrosstermBackend<Stdout>>;

pub struct TuiApp {
    plot: InteractivePlot,
    adapter: Arc<TuiAdapter>,
    frames: Arc<FrameAdapter>,
    frame: Option<FrameData>,
    repaint_error: Option<String>,
    key_steps: KeySteps,
    palette: Palette,
}

impl TuiApp {
    pub fn new(viewport: Viewport, engine: RepaintEngine, key_steps: KeySteps) -> Result<Self, RepaintError> {
        let frames = Arc::new(FrameAdapter::new());
        let mut plot = InteractivePlot::new(
            viewport,
            engine,
            Arc::clone(&frames) as Arc<dyn RepaintPresenterPort>,
        )?;

        let adapter = Arc::new(TuiAdapter::new());
        plot.subscribe(Arc::clone(&adapter) as Arc<dyn PlotPresenterPort>);

        Ok(Self {
            plot,
            adapter,
            frames,
            frame: None,
            repaint_error: None,
            key_steps,
            palette: Palette::default(),
        })
    }

    #[must_use]
    pub fn plot(&self) -> &InteractivePlot {
        &self.plot
    }

    /// Applies the command bound to `key`, if any. Returns `false` once quit was requested.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        if let Some(command) = command_for_key_event(key, &self.key_steps) {
            let outcome = self.plot.apply_command(command);
            debug!(?outcome, "key handled");
        }

        !self.adapter.quit_requested()
    }

    /// Picks up the newest finished repaint, if one arrived since the last call.
    pub fn poll_repaint(&mut self) -> bool {
        match self.frames.take_event() {
            Some(RepaintEvent::Frame(frame)) => {
                debug!(
                    generation = frame.generation,
                    render_ms = frame.render_duration.as_millis() as u64,
                    "frame received"
                );
                self.frame = Some(frame);
                self.repaint_error = None;
                true
            }
            Some(RepaintEvent::Error(failure)) => {
                self.repaint_error = Some(failure.message);
                true
            }
            None => false,
        }
    }

    fn draw(&self, terminal: &mut TuiTerminal) -> io::Result<()> {
        let empty = Grid::new(0);
        let (title, grid, max_iterations) = match &self.frame {
            Some(frame) => (title_line(&frame.bounds), &frame.grid, frame.bounds.max_iterations),
            None => {
                let bounds = self.plot.bounds();
                (title_line(&bounds), &empty, bounds.max_iterations)
            }
        };

        let view = PlotView {
            title,
            grid,
            mode: self.adapter.mode(),
            max_iterations,
            status: self.adapter.last_denial().or_else(|| self.repaint_error.clone()),
            pending: self.plot.is_repainting(),
        };

        terminal.draw(|frame| draw(frame, &view, &self.palette))?;
        Ok(())
    }

    pub fn run(&mut self, terminal: &mut TuiTerminal) -> io::Result<()> {
        loop {
            self.poll_repaint();
            self.draw(terminal)?;

            if event::poll(INPUT_POLL)? {
                if let Event::Key(key) = event::read()? {
                    if !self.handle_key(&key) {
                        return Ok(());
                    }
                }
            }

            if self.adapter.take_bell() {
                let mut stdout = io::stdout();
                stdout.write_all(BEL)?;
                stdout.flush()?;
            }
        }
    }
}
