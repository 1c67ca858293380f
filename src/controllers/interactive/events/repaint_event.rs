use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::errors::repaint_failure::RepaintFailure;

#[derive(Debug)]
pub enum RepaintEvent {
    Frame(FrameData),
    Error(RepaintFailure),
}
