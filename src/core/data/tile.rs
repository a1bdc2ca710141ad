use std::ops::Range;

/// A rectangular sub-range of the pixel grid, used as one unit of parallel
/// work.
///
/// Tiles from one partition are pairwise disjoint and their union exactly
/// covers the full grid; see [`split_tiles`](crate::split_tiles). A tile is
/// read-only once produced and is discarded after its worker finishes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Tile {
    origin_x: u32,
    origin_y: u32,
    width: u32,
    height: u32,
}

impl Tile {
    pub fn new(origin_x: u32, origin_y: u32, width: u32, height: u32) -> Self {
        Self {
            origin_x,
            origin_y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn origin_x(&self) -> u32 {
        self.origin_x
    }

    #[must_use]
    pub fn origin_y(&self) -> u32 {
        self.origin_y
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Half-open range of pixel columns covered by this tile.
    #[must_use]
    pub fn x_range(&self) -> Range<u32> {
        self.origin_x..self.origin_x + self.width
    }

    /// Half-open range of pixel rows covered by this tile.
    #[must_use]
    pub fn y_range(&self) -> Range<u32> {
        self.origin_y..self.origin_y + self.height
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}
