use crate::core::actions::render_row::ports::colour_map::ColourMap;
use crate::core::colour_mapping::kinds::ColourMode;
use crate::core::colour_mapping::maps::grayscale::GrayscaleRamp;
use crate::core::colour_mapping::maps::hue::HueSweep;
use crate::core::data::colour::Colour;
use crate::core::data::escape_result::EscapeResult;
use crate::core::data::view_state::ViewState;

/// The in-process colour mapper: picks the ramp named by the view's colour mode.
#[derive(Debug, Default)]
pub struct ViewColourMap;

impl ColourMap for ViewColourMap {
    fn map(&self, result: EscapeResult, state: &ViewState) -> Colour {
        colourise(result, state)
    }

    fn display_name(&self) -> &str {
        "View colour mode"
    }
}

#[must_use]
pub fn colourise(result: EscapeResult, state: &ViewState) -> Colour {
    match state.colour_mode() {
        ColourMode::Grayscale => GrayscaleRamp.map(result, state),
        ColourMode::Hue => HueSweep.map(result, state),
    }
}
