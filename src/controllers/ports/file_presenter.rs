use std::path::Path;

use crate::presenters::frame::frame_surface::FrameSurface;

pub trait FilePresenterPort {
    fn present(&self, frame: &FrameSurface, filepath: impl AsRef<Path>) -> std::io::Result<()>;
}
