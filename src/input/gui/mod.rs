//! Windowed viewer: winit for the window and input, pixels for the framebuffer.

mod app;

pub use app::run_gui;
