use rayon::prelude::*;

use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
use crate::core::actions::generate_image::ports::escape_kernel::EscapeKernel;
use crate::core::actions::split_tiles::split_tiles;
use crate::core::data::image_buffer::{ImageBuffer, SharedCanvas};
use crate::core::data::tile::Tile;
use crate::core::data::view_area::ViewArea;
use std::num::{NonZeroU32, NonZeroUsize};

/// Error type for cancelable image generation.
///
/// Distinguishes a superseded run from a worker fault so callers can discard
/// the former silently and surface only the latter.
#[derive(Debug)]
pub enum GenerateImageError<E> {
    /// The run was superseded or stopped before completion.
    Cancelled(Cancelled),
    /// A worker's kernel invocation failed; the whole run is abandoned and
    /// no partial image is published.
    Worker(E),
}

impl<E: std::fmt::Display> std::fmt::Display for GenerateImageError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerateImageError::Cancelled(c) => write!(f, "{}", c),
            GenerateImageError::Worker(e) => write!(f, "worker fault: {}", e),
        }
    }
}

impl<E: std::error::Error + 'static> std::error::Error for GenerateImageError<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenerateImageError::Cancelled(c) => Some(c),
            GenerateImageError::Worker(e) => Some(e),
        }
    }
}

/// Builds the bounded worker pool tiles are dispatched on.
///
/// `None` sizes the pool to one thread per available core.
pub fn build_worker_pool(
    workers: Option<NonZeroUsize>,
) -> Result<rayon::ThreadPool, rayon::ThreadPoolBuildError> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(workers.map_or(0, NonZeroUsize::get))
        .build()
}

/// Generates the full image for `area`, never cancelled.
///
/// For cancel-aware generation, use [`generate_image_cancelable`].
pub fn generate_image<K>(
    area: &ViewArea,
    kernel: &K,
    grid_scale: NonZeroU32,
    pool: &rayon::ThreadPool,
) -> Result<ImageBuffer, K::Failure>
where
    K: EscapeKernel + Sync,
    K::Failure: Send,
{
    generate_image_cancelable(area, kernel, grid_scale, pool, &NeverCancel).map_err(|e| match e {
        GenerateImageError::Worker(fault) => fault,
        GenerateImageError::Cancelled(_) => {
            unreachable!("NeverCancel token should never signal cancellation")
        }
    })
}

/// Generates the image for `area` by dispatching disjoint tiles onto `pool`.
///
/// Each tile executes exactly once; tiles beyond the pool's capacity
/// serialize inside the pool, so correctness does not depend on its size.
/// The calling thread blocks on the parallel join until every tile reports
/// done, which is also the barrier that makes the workers' relaxed canvas
/// writes visible before the buffer is assembled.
///
/// Workers poll `cancel` between pixel rows; a cancelled run returns
/// [`GenerateImageError::Cancelled`] and its partial canvas is dropped
/// unobserved. A kernel fault aborts the whole run: a returned buffer is
/// always complete and consistent.
pub fn generate_image_cancelable<K, C>(
    area: &ViewArea,
    kernel: &K,
    grid_scale: NonZeroU32,
    pool: &rayon::ThreadPool,
    cancel: &C,
) -> Result<ImageBuffer, GenerateImageError<K::Failure>>
where
    K: EscapeKernel + Sync,
    K::Failure: Send,
    C: CancelToken,
{
    let tiles = split_tiles(area, grid_scale);
    let canvas = SharedCanvas::new(area.pixel_width(), area.pixel_height());

    pool.install(|| {
        tiles
            .into_par_iter()
            .try_for_each(|tile| render_tile(area, tile, kernel, &canvas, cancel))
    })?;

    if cancel.is_cancelled() {
        return Err(GenerateImageError::Cancelled(Cancelled));
    }

    Ok(canvas.into_buffer())
}

fn render_tile<K, C>(
    area: &ViewArea,
    tile: Tile,
    kernel: &K,
    canvas: &SharedCanvas,
    cancel: &C,
) -> Result<(), GenerateImageError<K::Failure>>
where
    K: EscapeKernel,
    C: CancelToken,
{
    for y in tile.y_range() {
        // Row granularity: never mid-pixel, cheap enough to stay responsive.
        if cancel.is_cancelled() {
            return Err(GenerateImageError::Cancelled(Cancelled));
        }

        for x in tile.x_range() {
            let count = kernel
                .escape_time(area.point_at(x, y))
                .map_err(GenerateImageError::Worker)?;
            canvas.set(x, y, count);
        }
    }

    Ok(())
}
