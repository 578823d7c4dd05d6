use crate::core::colour_mapping::kinds::ColourMode;
use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::complex::Complex;
use crate::core::fractals::fractal_kinds::FractalKind;
use std::error::Error;
use std::fmt;

pub const DEFAULT_CENTER: Complex = Complex::ZERO;
/// Four plane units spread over an 800 pixel tall canvas.
pub const DEFAULT_SCALE: f64 = 4.0 / 800.0;
pub const DEFAULT_MAX_ITERATIONS: u32 = 80;
pub const DEFAULT_ESCAPE_RADIUS: f64 = 10.0;
pub const DEFAULT_JULIA_CONSTANT: Complex = Complex::new(-0.7, 0.27);
/// Vertical extent of the plane shown by [`ViewState::fitted_to`].
pub const DEFAULT_VERTICAL_SPAN: f64 = 4.0;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewStateError {
    InvalidScale { scale: f64 },
    ZeroMaxIterations,
    InvalidEscapeRadius { escape_radius: f64 },
    NonFiniteCoordinate { value: Complex },
}

impl fmt::Display for ViewStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidScale { scale } => {
                write!(f, "scale must be positive and finite: {}", scale)
            }
            Self::ZeroMaxIterations => {
                write!(f, "Maximum iterations must be greater than zero")
            }
            Self::InvalidEscapeRadius { escape_radius } => {
                write!(
                    f,
                    "escape radius must be positive and finite: {}",
                    escape_radius
                )
            }
            Self::NonFiniteCoordinate { value } => {
                write!(f, "coordinate must be finite: ({}, {})", value.real, value.imag)
            }
        }
    }
}

impl Error for ViewStateError {}

/// Everything needed to render one frame.
///
/// A `ViewState` is an immutable value: each render generation works from its
/// own copy, and changes produce a new value through the `with_*` methods.
/// Construction validates `scale > 0`, `max_iterations >= 1` and
/// `escape_radius > 0`, so every value in circulation is renderable.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewState {
    center: Complex,
    scale: f64,
    max_iterations: u32,
    escape_radius: f64,
    mode: FractalKind,
    julia_constant: Complex,
    colour_mode: ColourMode,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            scale: DEFAULT_SCALE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            escape_radius: DEFAULT_ESCAPE_RADIUS,
            mode: FractalKind::default(),
            julia_constant: DEFAULT_JULIA_CONSTANT,
            colour_mode: ColourMode::default(),
        }
    }
}

impl ViewState {
    pub fn new(
        center: Complex,
        scale: f64,
        max_iterations: u32,
        escape_radius: f64,
        mode: FractalKind,
        julia_constant: Complex,
        colour_mode: ColourMode,
    ) -> Result<Self, ViewStateError> {
        Self::default()
            .with_center(center)?
            .with_scale(scale)?
            .with_max_iterations(max_iterations)?
            .with_escape_radius(escape_radius)?
            .with_julia_constant(julia_constant)
            .map(|state| state.with_mode(mode).with_colour_mode(colour_mode))
    }

    /// Default parameters with the scale chosen so the plane's `[-2, 2]`
    /// vertical band fills the canvas height.
    #[must_use]
    pub fn fitted_to(canvas: CanvasSize) -> Self {
        Self {
            scale: DEFAULT_VERTICAL_SPAN / f64::from(canvas.height()),
            ..Self::default()
        }
    }

    /// Recentres on the origin and refits the scale, keeping every other field.
    #[must_use]
    pub fn refitted_to(self, canvas: CanvasSize) -> Self {
        let fitted = Self::fitted_to(canvas);

        Self {
            center: fitted.center,
            scale: fitted.scale,
            ..self
        }
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        self.center
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn escape_radius(&self) -> f64 {
        self.escape_radius
    }

    #[must_use]
    pub fn mode(&self) -> FractalKind {
        self.mode
    }

    #[must_use]
    pub fn julia_constant(&self) -> Complex {
        self.julia_constant
    }

    #[must_use]
    pub fn colour_mode(&self) -> ColourMode {
        self.colour_mode
    }

    pub fn with_center(self, center: Complex) -> Result<Self, ViewStateError> {
        if !center.is_finite() {
            return Err(ViewStateError::NonFiniteCoordinate { value: center });
        }

        Ok(Self { center, ..self })
    }

    pub fn with_scale(self, scale: f64) -> Result<Self, ViewStateError> {
        if !(scale.is_finite() && scale > 0.0) {
            return Err(ViewStateError::InvalidScale { scale });
        }

        Ok(Self { scale, ..self })
    }

    pub fn with_max_iterations(self, max_iterations: u32) -> Result<Self, ViewStateError> {
        if max_iterations == 0 {
            return Err(ViewStateError::ZeroMaxIterations);
        }

        Ok(Self {
            max_iterations,
            ..self
        })
    }

    pub fn with_escape_radius(self, escape_radius: f64) -> Result<Self, ViewStateError> {
        if !(escape_radius.is_finite() && escape_radius > 0.0) {
            return Err(ViewStateError::InvalidEscapeRadius { escape_radius });
        }

        Ok(Self {
            escape_radius,
            ..self
        })
    }

    pub fn with_julia_constant(self, julia_constant: Complex) -> Result<Self, ViewStateError> {
        if !julia_constant.is_finite() {
            return Err(ViewStateError::NonFiniteCoordinate {
                value: julia_constant,
            });
        }

        Ok(Self {
            julia_constant,
            ..self
        })
    }

    #[must_use]
    pub fn with_mode(self, mode: FractalKind) -> Self {
        Self { mode, ..self }
    }

    #[must_use]
    pub fn with_colour_mode(self, colour_mode: ColourMode) -> Self {
        Self {
            colour_mode,
            ..self
        }
    }
}
