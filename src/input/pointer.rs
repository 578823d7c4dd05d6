/// A pointer position in canvas pixels. Mouse and touch both arrive as this.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerSample {
    pub x: f64,
    pub y: f64,
}

impl PointerSample {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PointerEvent {
    Down(PointerSample),
    Move(PointerSample),
    Up(PointerSample),
}

impl PointerEvent {
    #[must_use]
    pub fn sample(&self) -> PointerSample {
        match *self {
            Self::Down(sample) | Self::Move(sample) | Self::Up(sample) => sample,
        }
    }
}
