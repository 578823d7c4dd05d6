use crate::core::actions::render_scanlines::ports::raster_surface::RasterSurface;
use crate::core::data::row_buffer::BYTES_PER_PIXEL;

/// An in-memory RGBA raster that rows are presented into.
///
/// Like an on-screen canvas, a new frame of the same size keeps the previous
/// pixels until its rows overwrite them. A frame of a different size starts
/// out transparent black.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameSurface {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    rows_presented: u32,
}

impl FrameSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Rows presented since the current frame began.
    #[must_use]
    pub fn rows_presented(&self) -> u32 {
        self.rows_presented
    }

    #[must_use]
    pub fn as_rgba(&self) -> &[u8] {
        &self.pixels
    }

    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let start = self.offset(y) + x as usize * BYTES_PER_PIXEL;
        let mut rgba = [0; 4];
        rgba.copy_from_slice(&self.pixels[start..start + BYTES_PER_PIXEL]);
        Some(rgba)
    }

    /// The frame as packed RGB, alpha dropped.
    #[must_use]
    pub fn to_rgb(&self) -> Vec<u8> {
        self.pixels
            .chunks_exact(BYTES_PER_PIXEL)
            .flat_map(|pixel| [pixel[0], pixel[1], pixel[2]])
            .collect()
    }

    fn row_len(&self) -> usize {
        self.width as usize * BYTES_PER_PIXEL
    }

    fn offset(&self, row_index: u32) -> usize {
        row_index as usize * self.row_len()
    }
}

impl RasterSurface for FrameSurface {
    fn present_row(&mut self, row_index: u32, pixels: &[u8], width: u32) {
        // rows from a frame of another shape have nowhere to go
        if width != self.width || row_index >= self.height || pixels.len() != self.row_len() {
            return;
        }

        let start = self.offset(row_index);
        self.pixels[start..start + pixels.len()].copy_from_slice(pixels);
        self.rows_presented += 1;
    }

    fn begin_frame(&mut self, width: u32, height: u32) {
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.pixels = vec![0; width as usize * height as usize * BYTES_PER_PIXEL];
        }

        self.rows_presented = 0;
    }
}
