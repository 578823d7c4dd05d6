use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::complex::Complex;
use crate::core::data::view_state::ViewState;

/// Maps a canvas pixel position to the complex plane.
///
/// The canvas centre lands on `state.center()`; one pixel spans `state.scale()`
/// plane units on both axes. The imaginary axis is flipped because raster rows
/// grow downwards.
#[must_use]
pub fn pixel_to_plane(px: f64, py: f64, state: &ViewState, canvas: CanvasSize) -> Complex {
    Complex {
        real: column_to_real(px, state, canvas),
        imag: row_to_imag(py, state, canvas),
    }
}

#[must_use]
pub fn column_to_real(px: f64, state: &ViewState, canvas: CanvasSize) -> f64 {
    state.center().real + (px - f64::from(canvas.width()) / 2.0) * state.scale()
}

#[must_use]
pub fn row_to_imag(py: f64, state: &ViewState, canvas: CanvasSize) -> f64 {
    state.center().imag - (py - f64::from(canvas.height()) / 2.0) * state.scale()
}
