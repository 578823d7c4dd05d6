/// Outcome of iterating a single point.
///
/// `iteration_count` lies in `0..=max_iterations`; it equals `max_iterations`
/// only when the orbit never left the escape radius.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EscapeResult {
    pub iteration_count: u32,
    pub final_magnitude_squared: f64,
}

impl EscapeResult {
    #[must_use]
    pub fn escaped(&self, max_iterations: u32) -> bool {
        self.iteration_count < max_iterations
    }

    /// Unsquared modulus of the last orbit value.
    #[must_use]
    pub fn final_magnitude(&self) -> f64 {
        self.final_magnitude_squared.sqrt()
    }
}
