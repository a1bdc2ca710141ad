pub mod generate_image;
pub mod ports;
