use crate::core::colour_mapping::kinds::ColourMode;
use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::view_state::ViewState;
use crate::core::fractals::fractal_kinds::FractalKind;

/// Discrete view changes bound to keys in the window.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ViewCommand {
    ToggleColourMode,
    ToggleFractalKind,
    MoreIterations,
    FewerIterations,
    ResetView,
}

impl ViewCommand {
    pub const ALL: &'static [ViewCommand] = &[
        Self::ToggleColourMode,
        Self::ToggleFractalKind,
        Self::MoreIterations,
        Self::FewerIterations,
        Self::ResetView,
    ];

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "h" | "H" => Some(Self::ToggleColourMode),
            "j" | "J" => Some(Self::ToggleFractalKind),
            "+" | "=" => Some(Self::MoreIterations),
            "-" | "_" => Some(Self::FewerIterations),
            "r" | "R" => Some(Self::ResetView),
            _ => None,
        }
    }

    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::ToggleColourMode => "Toggle grayscale / hue",
            Self::ToggleFractalKind => "Toggle Mandelbrot / Julia",
            Self::MoreIterations => "Double max iterations",
            Self::FewerIterations => "Halve max iterations",
            Self::ResetView => "Reset view",
        }
    }

    #[must_use]
    pub fn apply(&self, state: ViewState, canvas: CanvasSize) -> ViewState {
        match self {
            Self::ToggleColourMode => state.with_colour_mode(match state.colour_mode() {
                ColourMode::Grayscale => ColourMode::Hue,
                ColourMode::Hue => ColourMode::Grayscale,
            }),
            Self::ToggleFractalKind => state.with_mode(match state.mode() {
                FractalKind::Mandelbrot => FractalKind::Julia,
                FractalKind::Julia => FractalKind::Mandelbrot,
            }),
            Self::MoreIterations => state
                .with_max_iterations(state.max_iterations().saturating_mul(2))
                .unwrap_or(state),
            // halving 1 gives 0, which is rejected and leaves the state alone
            Self::FewerIterations => state
                .with_max_iterations(state.max_iterations() / 2)
                .unwrap_or(state),
            Self::ResetView => state.refitted_to(canvas),
        }
    }
}
