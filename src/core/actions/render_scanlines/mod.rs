pub mod ports;
mod render_session;
pub mod scanline_renderer;
