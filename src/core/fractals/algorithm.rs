use crate::core::data::complex::Complex;
use crate::core::data::escape_result::EscapeResult;
use crate::core::data::view_state::ViewState;
use crate::core::fractals::fractal_kinds::FractalKind;

/// Escape-time iteration of `z ← z² + c` for one plane point.
///
/// In Mandelbrot mode the point is `c` and `z` starts at the origin; in Julia
/// mode the point is the starting `z` and `c` is the view's Julia constant.
/// Escape is tested on the squared magnitude against `escape_radius`, which is
/// itself compared as a squared quantity, so no square root is taken here.
///
/// The returned count is the number of completed iterations before the orbit
/// escaped, or `max_iterations` if it never did.
#[must_use]
pub fn iterate(real: f64, imag: f64, state: &ViewState) -> EscapeResult {
    let point = Complex::new(real, imag);
    let (mut z, c) = match state.mode() {
        FractalKind::Mandelbrot => (Complex::ZERO, point),
        FractalKind::Julia => (point, state.julia_constant()),
    };

    let escape_radius = state.escape_radius();
    let max_iterations = state.max_iterations();

    for iteration in 0..max_iterations {
        z = z * z + c;

        let magnitude_squared = z.magnitude_squared();
        if magnitude_squared > escape_radius {
            return EscapeResult {
                iteration_count: iteration,
                final_magnitude_squared: magnitude_squared,
            };
        }
    }

    EscapeResult {
        iteration_count: max_iterations,
        final_magnitude_squared: z.magnitude_squared(),
    }
}
