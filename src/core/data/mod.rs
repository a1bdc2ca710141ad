pub mod complex;
pub mod image_buffer;
pub mod tile;
pub mod view_area;
