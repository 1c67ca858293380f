use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::errors::repaint_failure::RepaintFailure;
use crate::controllers::interactive::events::repaint_event::RepaintEvent;
use crate::controllers::interactive::ports::presenter::RepaintPresenterPort;
use crate::core::actions::repaint::repaint_engine::{RepaintEngine, RepaintError};
use crate::core::data::grid::Grid;
use crate::core::data::viewport::Viewport;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Instant;
use tracing::{debug, trace, warn};

struct SharedState {
    generation: AtomicU64,
    last_completed_generation: AtomicU64,
    latest_request: Mutex<Option<(u64, Viewport)>>,
    wake: Condvar,
    shutdown: AtomicBool,
    engine: RepaintEngine,
    presenter_port: Arc<dyn RepaintPresenterPort>,
}

pub struct InteractiveController {
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<()>>,
}

impl InteractiveController {
    pub fn new(presenter_port: Arc<dyn RepaintPresenterPort>) -> Self {
        Self::with_engine(presenter_port, RepaintEngine::default())
    }

    pub fn with_engine(presenter_port: Arc<dyn RepaintPresenterPort>, engine: RepaintEngine) -> Self {
        let shared = Arc::new(SharedState {
            generation: AtomicU64::new(0),
            last_completed_generation: AtomicU64::new(0),
            latest_request: Mutex::new(None),
            wake: Condvar::new(),
            shutdown: AtomicBool::new(false),
            engine,
            presenter_port,
        });

        let worker_shared = Arc::clone(&shared);

        let worker = thread::spawn(move || {
            Self::worker_loop(&worker_shared);
        });

        Self {
            shared,
            worker: Some(worker),
        }
    }

    /// Queues `viewport` for repainting, replacing any snapshot still waiting.
    pub fn submit(&self, viewport: Viewport) -> u64 {
        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut guard = self
                .shared
                .latest_request
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            *guard = Some((generation, viewport));
        }

        self.shared.wake.notify_one();

        generation
    }

    pub fn shutdown(&mut self) {
        self.shared.shutdown.store(true, Ordering::Release);
        self.shared.wake.notify_one();

        if let Some(handle) = self.worker.take() {
            if handle.join().is_err() {
                warn!("repaint worker panicked");
            }
        }
    }

    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.shared.last_completed_generation.load(Ordering::Acquire)
    }

    fn worker_loop(shared: &Arc<SharedState>) {
        loop {
            let (job_generation, viewport) = {
                let mut guard = shared
                    .latest_request
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner);
                loop {
                    if shared.shutdown.load(Ordering::Acquire) {
                        return;
                    }

                    if let Some(request) = guard.take() {
                        break request;
                    }

                    guard = shared.wake.wait(guard).unwrap_or_else(PoisonError::into_inner);
                }
            };

            let cancel_token = || {
                shared.shutdown.load(Ordering::Relaxed)
                    || job_generation != shared.generation.load(Ordering::Relaxed)
            };

            let start = Instant::now();
            let result = shared.engine.render_cancelable(&viewport, &cancel_token);
            let render_duration = start.elapsed();

            let event = match result {
                Err(RepaintError::Cancelled(_)) => {
                    trace!(generation = job_generation, "repaint superseded");
                    continue;
                }
                Ok(cells) => match Grid::from_data(viewport.grid_size(), cells) {
                    Ok(grid) => RepaintEvent::Frame(FrameData {
                        generation: job_generation,
                        bounds: viewport.bounds(),
                        grid,
                        render_duration,
                    }),
                    Err(err) => Self::failure(job_generation, err.to_string()),
                },
                Err(err) => Self::failure(job_generation, err.to_string()),
            };

            if job_generation != shared.generation.load(Ordering::Acquire) {
                trace!(generation = job_generation, "dropping stale repaint");
                continue;
            }

            debug!(
                generation = job_generation,
                elapsed_ms = render_duration.as_millis() as u64,
                "repaint finished"
            );

            shared.presenter_port.present(event);

            shared
                .last_completed_generation
                .fetch_max(job_generation, Ordering::AcqRel);
        }
    }

    fn failure(generation: u64, message: String) -> RepaintEvent {
        warn!(generation, %message, "repaint failed");
        RepaintEvent::Error(RepaintFailure { generation, message })
    }
}

impl Drop for InteractiveController {
    fn drop(&mut self) {
        self.shutdown();
    }
}
