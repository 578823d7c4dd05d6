use crate::core::data::colour::Colour;
use crate::core::data::escape_result::EscapeResult;
use crate::core::data::view_state::ViewState;

pub trait ColourMap {
    fn map(&self, result: EscapeResult, state: &ViewState) -> Colour;

    fn display_name(&self) -> &str;
}

impl ColourMap for Box<dyn ColourMap> {
    fn map(&self, result: EscapeResult, state: &ViewState) -> Colour {
        (**self).map(result, state)
    }

    fn display_name(&self) -> &str {
        (**self).display_name()
    }
}
