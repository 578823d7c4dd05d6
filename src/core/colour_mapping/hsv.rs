use crate::core::data::colour::Colour;

/// Standard HSV to RGB conversion with every component in `0.0..=1.0`.
///
/// Hue wraps, so `1.0` lands on the same sector as `0.0`.
#[must_use]
pub fn hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> Colour {
    let sector = (hue * 6.0).floor();
    let fraction = hue * 6.0 - sector;
    let p = value * (1.0 - saturation);
    let q = value * (1.0 - fraction * saturation);
    let t = value * (1.0 - (1.0 - fraction) * saturation);

    let (r, g, b) = match sector.rem_euclid(6.0) as u8 {
        0 => (value, t, p),
        1 => (q, value, p),
        2 => (p, value, t),
        3 => (p, q, value),
        4 => (t, p, value),
        _ => (value, p, q),
    };

    Colour::from_channels(r * 255.0, g * 255.0, b * 255.0)
}
