use crate::core::actions::render_row::ports::colour_map::ColourMap;
use crate::core::colour_mapping::hsv::hsv_to_rgb;
use crate::core::colour_mapping::kinds::ColourMode;
use crate::core::colour_mapping::smooth::smooth_iteration_count;
use crate::core::data::colour::Colour;
use crate::core::data::escape_result::EscapeResult;
use crate::core::data::view_state::ViewState;

/// Sweeps the hue wheel with the smooth count while dimming towards black.
#[derive(Debug, Default)]
pub struct HueSweep;

impl HueSweep {
    #[must_use]
    pub fn shade(n: f64, max_iterations: u32) -> Colour {
        let t = n / f64::from(max_iterations);

        hsv_to_rgb(t.abs(), 1.0, 1.0 - t)
    }
}

impl ColourMap for HueSweep {
    fn map(&self, result: EscapeResult, state: &ViewState) -> Colour {
        let max_iterations = state.max_iterations();

        Self::shade(smooth_iteration_count(result, max_iterations), max_iterations)
    }

    fn display_name(&self) -> &str {
        ColourMode::Hue.display_name()
    }
}
