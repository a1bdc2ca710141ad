pub mod cancellation;
pub mod generate_image;
pub mod split_tiles;
