use crate::core::actions::render_row::ports::colour_map::ColourMap;
use crate::core::colour_mapping::kinds::ColourMode;
use crate::core::colour_mapping::smooth::smooth_iteration_count;
use crate::core::data::colour::Colour;
use crate::core::data::escape_result::EscapeResult;
use crate::core::data::view_state::ViewState;

/// Linear ramp from white (escaped immediately) to black (never escaped).
#[derive(Debug, Default)]
pub struct GrayscaleRamp;

impl GrayscaleRamp {
    #[must_use]
    pub fn shade(n: f64, max_iterations: u32) -> Colour {
        Colour::grey(255.0 * (1.0 - n / f64::from(max_iterations)))
    }
}

impl ColourMap for GrayscaleRamp {
    fn map(&self, result: EscapeResult, state: &ViewState) -> Colour {
        let max_iterations = state.max_iterations();

        Self::shade(smooth_iteration_count(result, max_iterations), max_iterations)
    }

    fn display_name(&self) -> &str {
        ColourMode::Grayscale.display_name()
    }
}
