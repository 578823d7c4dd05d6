use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::presenters::frame::frame_surface::FrameSurface;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes frames as binary PPM. The format has no alpha channel.
#[derive(Debug, Default)]
pub struct PpmFilePresenter {}

impl PpmFilePresenter {
    pub fn new() -> Self {
        Self {}
    }

    pub fn write_to(&self, frame: &FrameSurface, mut out: impl Write) -> std::io::Result<()> {
        // PPM header: P6 means binary RGB, then width, height and max_colour
        writeln!(out, "P6")?;
        writeln!(out, "{} {}", frame.width(), frame.height())?;
        writeln!(out, "255")?;
        out.write_all(&frame.to_rgb())?;
        out.flush()
    }
}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, frame: &FrameSurface, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        if let Some(parent) = filepath.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let file = std::fs::File::create(filepath)?;
        self.write_to(frame, BufWriter::new(file))
    }
}
