//! Colourising through a flat, primitive-typed function.
//!
//! An accelerated or out-of-process colouriser only needs to expose
//! `(iteration_count, final_magnitude, max_iterations, colour_mode_flag) -> (r, g, b)`.
//! [`FlatColourMap`] adapts such a function to the [`ColourMap`] port so the
//! renderer cannot tell it apart from the in-process mapper.

use crate::core::actions::render_row::ports::colour_map::ColourMap;
use crate::core::colour_mapping::kinds::ColourMode;
use crate::core::colour_mapping::maps::grayscale::GrayscaleRamp;
use crate::core::colour_mapping::maps::hue::HueSweep;
use crate::core::colour_mapping::smooth::smooth_count_from_modulus;
use crate::core::data::colour::Colour;
use crate::core::data::escape_result::EscapeResult;
use crate::core::data::view_state::ViewState;

/// Reference flat colouriser. `final_magnitude` is the unsquared modulus.
#[must_use]
pub fn colourise_flat(
    iteration_count: u32,
    final_magnitude: f64,
    max_iterations: u32,
    colour_mode_flag: u8,
) -> (u8, u8, u8) {
    let max_iterations = max_iterations.max(1);
    let n = smooth_count_from_modulus(iteration_count, final_magnitude, max_iterations);

    let Colour { r, g, b } = match ColourMode::from_flag(colour_mode_flag) {
        ColourMode::Grayscale => GrayscaleRamp::shade(n, max_iterations),
        ColourMode::Hue => HueSweep::shade(n, max_iterations),
    };

    (r, g, b)
}

pub struct FlatColourMap<F> {
    colourise: F,
}

impl<F> FlatColourMap<F>
where
    F: Fn(u32, f64, u32, u8) -> (u8, u8, u8),
{
    #[must_use]
    pub fn new(colourise: F) -> Self {
        Self { colourise }
    }
}

impl<F> ColourMap for FlatColourMap<F>
where
    F: Fn(u32, f64, u32, u8) -> (u8, u8, u8),
{
    fn map(&self, result: EscapeResult, state: &ViewState) -> Colour {
        let (r, g, b) = (self.colourise)(
            result.iteration_count,
            result.final_magnitude(),
            state.max_iterations(),
            state.colour_mode().flag(),
        );

        Colour { r, g, b }
    }

    fn display_name(&self) -> &str {
        "Flat colouriser"
    }
}
