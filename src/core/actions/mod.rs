pub mod cancellation;
pub mod render_row;
pub mod render_scanlines;
