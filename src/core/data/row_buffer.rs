use crate::core::data::colour::Colour;

pub const BYTES_PER_PIXEL: usize = 4;
const OPAQUE: u8 = 255;

/// One scanline of RGBA pixels, reused across rows of a render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowBuffer {
    width: u32,
    buffer: Vec<u8>,
}

impl RowBuffer {
    #[must_use]
    pub fn new(width: u32) -> Self {
        Self {
            width,
            buffer: vec![0; width as usize * BYTES_PER_PIXEL],
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Overwrites every pixel, left to right, with `colour_at(column)`.
    pub fn fill_with(&mut self, mut colour_at: impl FnMut(u32) -> Colour) {
        for (column, pixel) in (0..self.width).zip(self.buffer.chunks_exact_mut(BYTES_PER_PIXEL)) {
            let Colour { r, g, b } = colour_at(column);

            pixel[0] = r;
            pixel[1] = g;
            pixel[2] = b;
            pixel[3] = OPAQUE;
        }
    }
}
