use std::sync::atomic::{AtomicU32, Ordering};

/// A finished `pixel_width × pixel_height` grid of per-pixel iteration
/// counts, row-major.
///
/// Only a completed run's buffer is ever delivered downstream; colour
/// mapping from iteration counts to displayable values is an external
/// collaborator's concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl ImageBuffer {
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> u32 {
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    #[must_use]
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }
}

/// The in-flight write surface shared by the workers of one run.
///
/// Tiles are disjoint in pixel-index space, so no two workers ever write the
/// same cell and the pixel path carries no lock. Stores are relaxed: the
/// scheduler's join barrier orders every worker's last write before
/// [`into_buffer`](SharedCanvas::into_buffer) reads the cells.
#[derive(Debug)]
pub struct SharedCanvas {
    width: u32,
    height: u32,
    cells: Vec<AtomicU32>,
}

impl SharedCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        let mut cells = Vec::with_capacity(width as usize * height as usize);
        cells.resize_with(width as usize * height as usize, AtomicU32::default);

        Self {
            width,
            height,
            cells,
        }
    }

    pub fn set(&self, x: u32, y: u32, value: u32) {
        self.cells[y as usize * self.width as usize + x as usize].store(value, Ordering::Relaxed);
    }

    /// Transfers ownership of the pixels back to the single remaining owner.
    ///
    /// Must only be called after all workers have been joined.
    #[must_use]
    pub fn into_buffer(self) -> ImageBuffer {
        ImageBuffer {
            width: self.width,
            height: self.height,
            pixels: self.cells.into_iter().map(AtomicU32::into_inner).collect(),
        }
    }
}
