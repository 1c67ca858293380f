use crate::controllers::interactive::events::repaint_event::RepaintEvent;

pub trait RepaintPresenterPort: Send + Sync {
    fn present(&self, event: RepaintEvent);
}
