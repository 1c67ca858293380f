use crate::controllers::plot::ports::presenter::{PlotEvent, PlotPresenterPort};
use crate::presenters::cell_class::DisplayMode;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

/// Collects plot events for the terminal loop to pick up before the next draw.
#[derive(Debug, Default)]
pub struct TuiAdapter {
    mode: Mutex<DisplayMode>,
    bell: AtomicBool,
    last_denial: Mutex<Option<String>>,
    quit: AtomicBool,
}

impl PlotPresenterPort for TuiAdapter {
    fn present(&self, event: &PlotEvent) {
        match event {
            PlotEvent::Repainted { .. } | PlotEvent::Queued { .. } => {
                *self.last_denial.lock().unwrap_or_else(PoisonError::into_inner) = None;
            }
            PlotEvent::DisplayToggled => {
                let mut mode = self.mode.lock().unwrap_or_else(PoisonError::into_inner);
                *mode = mode.toggled();
            }
            PlotEvent::Denied(reason) => {
                self.bell.store(true, Ordering::Release);
                *self.last_denial.lock().unwrap_or_else(PoisonError::into_inner) = Some(reason.to_string());
            }
            PlotEvent::Quit => self.quit.store(true, Ordering::Release),
        }
    }
}

impl TuiAdapter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn mode(&self) -> DisplayMode {
        *self.mode.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns whether a bell is owed, clearing the flag.
    pub fn take_bell(&self) -> bool {
        self.bell.swap(false, Ordering::AcqRel)
    }

    #[must_use]
    pub fn last_denial(&self) -> Option<String> {
        self.last_denial
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn quit_requested(&self) -> bool {
        self.quit.load(Ordering::Acquire)
    }
}
