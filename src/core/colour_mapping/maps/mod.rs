pub mod grayscale;
pub mod hue;
