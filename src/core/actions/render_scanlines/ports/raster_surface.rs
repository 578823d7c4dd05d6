/// Destination for finished scanlines.
///
/// `pixels` holds `width` RGBA pixels. Within one render generation rows
/// arrive in increasing `row_index` order.
pub trait RasterSurface {
    fn present_row(&mut self, row_index: u32, pixels: &[u8], width: u32);

    /// Called when a generation starts, before its first row.
    fn begin_frame(&mut self, _width: u32, _height: u32) {}
}
