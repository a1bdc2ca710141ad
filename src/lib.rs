mod controllers;
mod core;

pub use crate::controllers::generation::{
    CompletionData, GenerationCompletionPort, GenerationController,
    GenerationControllerConstructorError, GenerationEvent, GenerationFailure, GenerationSettings,
};
pub use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
pub use crate::core::actions::generate_image::generate_image::{
    GenerateImageError, build_worker_pool, generate_image, generate_image_cancelable,
};
pub use crate::core::actions::generate_image::ports::escape_kernel::EscapeKernel;
pub use crate::core::actions::split_tiles::split_tiles;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::image_buffer::ImageBuffer;
pub use crate::core::data::tile::Tile;
pub use crate::core::data::view_area::{ViewArea, ViewAreaError};
pub use crate::core::fractals::mandelbrot::kernel::{
    MandelbrotKernel, MandelbrotKernelConstructorError,
};
