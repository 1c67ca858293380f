use crate::controllers::interactive::events::repaint_event::RepaintEvent;
use crate::controllers::interactive::ports::presenter::RepaintPresenterPort;
use std::sync::{Mutex, PoisonError};

/// Holds the newest background repaint result until the terminal loop takes it.
#[derive(Debug, Default)]
pub struct FrameAdapter {
    repaint_event: Mutex<Option<RepaintEvent>>,
}

impl RepaintPresenterPort for FrameAdapter {
    fn present(&self, event: RepaintEvent) {
        *self.repaint_event.lock().unwrap_or_else(PoisonError::into_inner) = Some(event);
    }
}

impl FrameAdapter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take_event(&self) -> Option<RepaintEvent> {
        self.repaint_event
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}
