use crate::core::data::escape_result::EscapeResult;

/// Continuous iteration count `n = count - log2(log2(|z|))`, clamped to
/// `0.0..=max_iterations`.
///
/// Points that never escaped map to exactly `max_iterations`. When the final
/// modulus is not above 1 the double logarithm is undefined, so the raw count
/// is used unchanged.
#[must_use]
pub fn smooth_iteration_count(result: EscapeResult, max_iterations: u32) -> f64 {
    smooth_count_from_modulus(
        result.iteration_count,
        result.final_magnitude(),
        max_iterations,
    )
}

/// Same as [`smooth_iteration_count`], taking the unsquared modulus directly.
#[must_use]
pub fn smooth_count_from_modulus(iteration_count: u32, modulus: f64, max_iterations: u32) -> f64 {
    let count = f64::from(iteration_count);
    let max = f64::from(max_iterations);

    if iteration_count >= max_iterations {
        return max;
    }

    if !(modulus > 1.0) {
        return count.clamp(0.0, max);
    }

    let n = count - modulus.log2().log2();

    if n.is_finite() { n.clamp(0.0, max) } else { count.clamp(0.0, max) }
}
