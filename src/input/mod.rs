//! Input adapters for the fractal viewer.
//!
//! Pointer gestures and key presses are interpreted here; the core only ever
//! sees a finished zoom region or a new view state.

pub mod drag_box;
#[cfg(feature = "gui")]
pub mod gui;
pub mod pointer;
pub mod view_command;
