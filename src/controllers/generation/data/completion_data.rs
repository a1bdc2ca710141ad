use crate::core::data::image_buffer::ImageBuffer;
use crate::core::data::view_area::ViewArea;
use std::time::Duration;

/// Payload of a successful run: the requested area, the finished image and
/// the wall-clock time the run took.
#[derive(Debug)]
pub struct CompletionData {
    pub generation: u64,
    pub area: ViewArea,
    pub image: ImageBuffer,
    pub elapsed: Duration,
}
