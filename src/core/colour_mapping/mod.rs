//! Escape results to pixel colours.
//!
//! Both ramps share the smooth iteration count; they differ only in how the
//! normalised count becomes a colour.

pub mod factory;
pub mod flat;
pub mod hsv;
pub mod kinds;
pub mod maps;
pub mod smooth;
