use crate::core::data::tile::Tile;
use crate::core::data::view_area::ViewArea;
use std::num::NonZeroU32;

/// Partitions an area's pixel grid into an `S × S` grid of disjoint tiles
/// whose union exactly covers `[0, pixel_width) × [0, pixel_height)`.
///
/// `grid_scale` is clamped to `min(pixel_width, pixel_height)` so no tile is
/// ever empty. The last column and last row absorb the integer-division
/// remainders, keeping the union exact when the dimensions are not evenly
/// divisible. Tiles are uniform: load imbalance between cheap and expensive
/// regions is a known limitation of this policy, since per-tile cost is
/// data-dependent and unknown in advance.
pub fn split_tiles(area: &ViewArea, grid_scale: NonZeroU32) -> Vec<Tile> {
    let scale = grid_scale
        .get()
        .min(area.pixel_width())
        .min(area.pixel_height());

    let width_step = area.pixel_width() / scale;
    let height_step = area.pixel_height() / scale;
    let width_remainder = area.pixel_width() - width_step * scale;
    let height_remainder = area.pixel_height() - height_step * scale;

    let mut tiles = Vec::with_capacity(scale as usize * scale as usize);

    for row in 0..scale {
        let origin_y = row * height_step;
        let height = if row == scale - 1 {
            height_step + height_remainder
        } else {
            height_step
        };

        for col in 0..scale {
            let origin_x = col * width_step;
            let width = if col == scale - 1 {
                width_step + width_remainder
            } else {
                width_step
            };

            tiles.push(Tile::new(origin_x, origin_y, width, height));
        }
    }

    tiles
}
