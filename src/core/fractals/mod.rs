pub mod algorithm;
pub mod fractal_kinds;
