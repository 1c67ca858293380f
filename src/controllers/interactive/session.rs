use crate::controllers::interactive::controller::InteractiveController;
use crate::controllers::interactive::ports::presenter::RepaintPresenterPort;
use crate::controllers::plot::command::{Change, Command, Outcome, RejectReason};
use crate::controllers::plot::ports::presenter::{PlotEvent, PlotPresenterPort};
use crate::core::actions::repaint::repaint_engine::{RepaintEngine, RepaintError};
use crate::core::data::viewport::{Bounds, Viewport};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Command dispatch that commits the viewport immediately and leaves the repaint to
/// an [`InteractiveController`].
///
/// Each committed command supersedes the repaint still in flight. Candidates are
/// checked for samplability before they commit, so the worker only receives
/// viewports it can render.
pub struct InteractivePlot {
    viewport: Viewport,
    engine: RepaintEngine,
    controller: InteractiveController,
    generation: u64,
    subscribers: Vec<Arc<dyn PlotPresenterPort>>,
}

impl InteractivePlot {
    /// Starts the worker and queues the first repaint of `viewport`.
    pub fn new(
        viewport: Viewport,
        engine: RepaintEngine,
        repaint_port: Arc<dyn RepaintPresenterPort>,
    ) -> Result<Self, RepaintError> {
        engine.validate(&viewport)?;

        let controller = InteractiveController::with_engine(repaint_port, engine);
        let generation = controller.submit(viewport.clone());

        Ok(Self {
            viewport,
            engine,
            controller,
            generation,
            subscribers: Vec::new(),
        })
    }

    pub fn subscribe(&mut self, presenter: Arc<dyn PlotPresenterPort>) {
        self.subscribers.push(presenter);
    }

    #[must_use]
    pub fn bounds(&self) -> Bounds {
        self.viewport.bounds()
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Generation of the most recently committed viewport.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn is_repainting(&self) -> bool {
        self.controller.last_completed_generation() < self.generation
    }

    pub fn apply_command(&mut self, command: Command) -> Outcome {
        debug!(?command, generation = self.generation, "applying command");

        match command.next_viewport(&self.viewport) {
            Some(Ok(viewport)) => self.commit(viewport),
            Some(Err(err)) => self.reject(err.into()),
            None if command == Command::Quit => {
                self.notify(&PlotEvent::Quit);
                Outcome::Applied(Change::Quit)
            }
            None => {
                self.notify(&PlotEvent::DisplayToggled);
                Outcome::Applied(Change::DisplayToggled)
            }
        }
    }

    fn commit(&mut self, candidate: Viewport) -> Outcome {
        if let Err(err) = self.engine.validate(&candidate) {
            return self.reject(err.into());
        }

        self.generation = self.controller.submit(candidate.clone());
        self.viewport = candidate;

        let bounds = self.viewport.bounds();
        info!(generation = self.generation, %bounds, "viewport committed, repaint queued");

        self.notify(&PlotEvent::Queued {
            generation: self.generation,
            bounds,
        });

        Outcome::Applied(Change::Queued {
            generation: self.generation,
        })
    }

    fn reject(&self, reason: RejectReason) -> Outcome {
        warn!(%reason, "command denied");
        self.notify(&PlotEvent::Denied(reason.clone()));
        Outcome::Rejected(reason)
    }

    fn notify(&self, event: &PlotEvent) {
        for subscriber in &self.subscribers {
            subscriber.present(event);
        }
    }
}
