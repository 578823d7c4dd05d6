use crate::core::actions::render_row::ports::colour_map::ColourMap;
use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::row_buffer::RowBuffer;
use crate::core::data::view_state::ViewState;
use crate::core::fractals::algorithm::iterate;
use crate::core::util::pixel_to_plane::{column_to_real, row_to_imag};

/// Fills `row` with the colours of scanline `row_index`.
///
/// The row's imaginary coordinate is computed once; each column then runs the
/// escape-time iteration and the colour map.
pub fn render_row<CMap: ColourMap + ?Sized>(
    row_index: u32,
    state: &ViewState,
    canvas: CanvasSize,
    colour_map: &CMap,
    row: &mut RowBuffer,
) {
    let imag = row_to_imag(f64::from(row_index), state, canvas);

    row.fill_with(|column| {
        let real = column_to_real(f64::from(column), state, canvas);
        let result = iterate(real, imag, state);

        colour_map.map(result, state)
    });
}
