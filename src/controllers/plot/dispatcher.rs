use crate::controllers::plot::command::{Change, Command, Outcome, RejectReason};
use crate::controllers::plot::ports::presenter::{PlotEvent, PlotPresenterPort};
use crate::core::actions::repaint::repaint_engine::{RepaintEngine, RepaintError};
use crate::core::data::grid::Grid;
use crate::core::data::viewport::{Bounds, Viewport};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Owns one viewport and its grid, and applies commands to them one at a time.
///
/// Every command is evaluated against a candidate viewport rendered into a fresh
/// buffer; viewport and grid are replaced together only when that succeeds.
pub struct MandelbrotPlot {
    viewport: Viewport,
    grid: Grid,
    engine: RepaintEngine,
    generation: u64,
    subscribers: Vec<Arc<dyn PlotPresenterPort>>,
}

impl MandelbrotPlot {
    /// Paints the initial grid for `viewport` as generation 0.
    pub fn new(viewport: Viewport, engine: RepaintEngine) -> Result<Self, RepaintError> {
        let mut grid = Grid::new(viewport.grid_size());
        engine.recompute(&viewport, &mut grid)?;

        Ok(Self {
            viewport,
            grid,
            engine,
            generation: 0,
            subscribers: Vec::new(),
        })
    }

    pub fn subscribe(&mut self, presenter: Arc<dyn PlotPresenterPort>) {
        self.subscribers.push(presenter);
    }

    #[must_use]
    pub fn get_cell(&self, col: usize, row: usize) -> Option<u32> {
        self.grid.get(col, row)
    }

    #[must_use]
    pub fn bounds(&self) -> Bounds {
        self.viewport.bounds()
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
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
        let grid = match self
            .engine
            .render(&candidate)
            .and_then(|cells| Grid::from_data(candidate.grid_size(), cells).map_err(RepaintError::from))
        {
            Ok(grid) => grid,
            Err(err) => return self.reject(err.into()),
        };

        self.viewport = candidate;
        self.grid = grid;
        self.generation += 1;

        let bounds = self.viewport.bounds();
        info!(generation = self.generation, %bounds, "viewport committed");

        self.notify(&PlotEvent::Repainted {
            generation: self.generation,
            bounds,
        });

        Outcome::Applied(Change::Repainted {
            generation: self.generation,
            cells: self.grid.cell_count(),
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::repaint::repaint_engine::RepaintStrategy;
    use crate::core::data::plane_rect::{Axis, PlaneRect};
    use crate::core::data::viewport::ITERATION_FLOOR;
    use num::BigRational;
    use num::bigint::BigInt;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockPresenterPort {
        events: Mutex<Vec<PlotEvent>>,
    }

    impl MockPresenterPort {
        fn take_events(&self) -> Vec<PlotEvent> {
            std::mem::take(&mut *self.events.lock().unwrap())
        }
    }

    impl PlotPresenterPort for MockPresenterPort {
        fn present(&self, event: &PlotEvent) {
            self.events.lock().unwrap().push(event.clone());
        }
    }

    fn ratio(numer: i64, denom: i64) -> BigRational {
        BigRational::new(BigInt::from(numer), BigInt::from(denom))
    }

    fn default_viewport(size: usize) -> Viewport {
        let rect = PlaneRect::new(ratio(-5, 2), ratio(3, 2), ratio(-2, 1), ratio(2, 1)).unwrap();
        Viewport::new(rect, size, 80).unwrap()
    }

    fn plot_with_port(size: usize) -> (MandelbrotPlot, Arc<MockPresenterPort>) {
        let mut plot = MandelbrotPlot::new(default_viewport(size), RepaintEngine::default()).unwrap();
        let port = Arc::new(MockPresenterPort::default());
        plot.subscribe(Arc::clone(&port) as Arc<dyn PlotPresenterPort>);
        (plot, port)
    }

    fn assert_grid_matches_viewport(plot: &MandelbrotPlot) {
        let expected = RepaintEngine::new(RepaintStrategy::Serial)
            .render(plot.viewport())
            .unwrap();
        assert_eq!(plot.grid().cells(), expected.as_slice());
    }

    #[test]
    fn test_new_paints_generation_zero() {
        let plot = MandelbrotPlot::new(default_viewport(12), RepaintEngine::default()).unwrap();

        assert_eq!(plot.generation(), 0);
        assert_eq!(plot.grid().cell_count(), 144);
        assert_grid_matches_viewport(&plot);
    }

    #[test]
    fn test_get_cell_reads_grid() {
        let plot = MandelbrotPlot::new(default_viewport(12), RepaintEngine::default()).unwrap();

        assert_eq!(plot.get_cell(3, 4), plot.grid().get(3, 4));
        assert_eq!(plot.get_cell(12, 0), None);
    }

    #[test]
    fn test_pan_commits_and_repaints() {
        let (mut plot, port) = plot_with_port(10);

        let outcome = plot.apply_command(Command::Pan { dx: 1, dy: 0 });

        assert_eq!(
            outcome,
            Outcome::Applied(Change::Repainted {
                generation: 1,
                cells: 100
            })
        );
        assert_eq!(plot.bounds().from_x, ratio(-24, 10));
        assert_grid_matches_viewport(&plot);
        assert_eq!(
            port.take_events(),
            vec![PlotEvent::Repainted {
                generation: 1,
                bounds: plot.bounds()
            }]
        );
    }

    #[test]
    fn test_pan_and_reverse_restores_bounds() {
        let (mut plot, _) = plot_with_port(6);
        let original = plot.bounds();

        plot.apply_command(Command::Pan { dx: 2, dy: -3 });
        plot.apply_command(Command::Pan { dx: -2, dy: 3 });

        assert_eq!(plot.bounds(), original);
        assert_eq!(plot.generation(), 2);
    }

    #[test]
    fn test_zoom_and_inverse_restores_bounds() {
        let (mut plot, _) = plot_with_port(6);
        let original = plot.bounds();
        let factor = ratio(6, 5);

        plot.apply_command(Command::zoom_in(&factor));
        assert_ne!(plot.bounds(), original);

        plot.apply_command(Command::zoom_out(&factor));
        assert_eq!(plot.bounds(), original);
    }

    #[test]
    fn test_zoom_by_zero_is_rejected() {
        let (mut plot, port) = plot_with_port(6);
        let original = plot.bounds();
        let cells = plot.grid().clone();

        let outcome = plot.apply_command(Command::Zoom(ratio(0, 1)));

        assert_eq!(outcome, Outcome::Rejected(RejectReason::InvalidInterval(Axis::X)));
        assert_eq!(plot.bounds(), original);
        assert_eq!(plot.grid(), &cells);
        assert_eq!(plot.generation(), 0);
        assert_eq!(
            port.take_events(),
            vec![PlotEvent::Denied(RejectReason::InvalidInterval(Axis::X))]
        );
    }

    #[test]
    fn test_iteration_floor_is_rejected_without_change() {
        let (mut plot, port) = plot_with_port(6);

        let outcome = plot.apply_command(Command::AdjustIterations(-70));

        let reason = RejectReason::IterationFloor {
            proposed: 10,
            floor: ITERATION_FLOOR,
        };
        assert_eq!(outcome, Outcome::Rejected(reason.clone()));
        assert_eq!(plot.bounds().max_iterations, 80);
        assert_eq!(plot.generation(), 0);
        assert_eq!(port.take_events(), vec![PlotEvent::Denied(reason)]);
    }

    #[test]
    fn test_iteration_change_repaints_with_new_depth() {
        let (mut plot, _) = plot_with_port(8);

        let outcome = plot.apply_command(Command::AdjustIterations(100));

        assert!(outcome.is_applied());
        assert_eq!(plot.bounds().max_iterations, 180);
        assert_grid_matches_viewport(&plot);
    }

    #[test]
    fn test_toggle_and_quit_leave_grid_alone() {
        let (mut plot, port) = plot_with_port(6);
        let grid = plot.grid().clone();

        assert_eq!(
            plot.apply_command(Command::ToggleDisplay),
            Outcome::Applied(Change::DisplayToggled)
        );
        assert_eq!(plot.apply_command(Command::Quit), Outcome::Applied(Change::Quit));

        assert_eq!(plot.grid(), &grid);
        assert_eq!(plot.generation(), 0);
        assert_eq!(port.take_events(), vec![PlotEvent::DisplayToggled, PlotEvent::Quit]);
    }

    #[test]
    fn test_grid_tracks_viewport_across_mixed_commands() {
        let (mut plot, _) = plot_with_port(9);
        let commands = [
            Command::Pan { dx: 0, dy: 1 },
            Command::zoom_in(&ratio(2, 1)),
            Command::AdjustIterations(-69),
            Command::AdjustIterations(-1),
            Command::Pan { dx: -1, dy: 0 },
            Command::zoom_out(&ratio(6, 5)),
            Command::AdjustIterations(10),
        ];

        for command in commands {
            plot.apply_command(command);
            assert_grid_matches_viewport(&plot);
        }

        assert_eq!(plot.bounds().max_iterations, 21);
        assert_eq!(plot.generation(), 6);
    }

    #[test]
    fn test_every_subscriber_is_notified() {
        let (mut plot, first) = plot_with_port(4);
        let second = Arc::new(MockPresenterPort::default());
        plot.subscribe(Arc::clone(&second) as Arc<dyn PlotPresenterPort>);

        plot.apply_command(Command::ToggleDisplay);

        assert_eq!(first.take_events(), vec![PlotEvent::DisplayToggled]);
        assert_eq!(second.take_events(), vec![PlotEvent::DisplayToggled]);
    }
}
