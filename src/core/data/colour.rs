#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };

    /// Builds a colour from floating point channels in `0.0..=255.0`.
    ///
    /// Channels are rounded to the nearest integer and clamped, so values that
    /// drift outside the byte range (or are NaN) never wrap.
    #[must_use]
    pub fn from_channels(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: channel_to_byte(r),
            g: channel_to_byte(g),
            b: channel_to_byte(b),
        }
    }

    #[must_use]
    pub fn grey(value: f64) -> Self {
        Self::from_channels(value, value, value)
    }
}

fn channel_to_byte(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }

    value.round().clamp(0.0, 255.0) as u8
}
