use std::path::Path;
use std::time::Duration;

use tracing::info;

use crate::controllers::interactive::ViewerController;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::render_scanlines::ports::render_events::RenderReport;
use crate::core::actions::render_scanlines::scanline_renderer::ScanlineRenderer;
use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::view_state::ViewState;
use crate::presenters::frame::frame_surface::FrameSurface;

/// Drives one progressive render to completion and hands the frame to a file presenter.
pub struct CliRenderController<P: FilePresenterPort> {
    presenter: P,
    viewer: ViewerController,
}

impl<P: FilePresenterPort> CliRenderController<P> {
    pub fn new(presenter: P, state: ViewState, canvas: CanvasSize, throttle: Duration) -> Self {
        let viewer = ViewerController::with_renderer(state, canvas, |scheduler| {
            ScanlineRenderer::new(FrameSurface::new(), scheduler).with_throttle(throttle)
        });

        Self { presenter, viewer }
    }

    /// The viewer the render runs on; zooms and parameter changes go through it.
    pub fn viewer_mut(&mut self) -> &mut ViewerController {
        &mut self.viewer
    }

    #[must_use]
    pub fn viewer(&self) -> &ViewerController {
        &self.viewer
    }

    /// Finishes the latest queued render, starting one if nothing is queued.
    pub fn generate(&mut self) -> Option<RenderReport> {
        if !self.viewer.has_pending_work() {
            self.viewer.start_render();
        }

        let slices = self.viewer.run_until_idle();
        let report = self.viewer.last_report()?;

        info!(
            generation = report.generation,
            slices,
            width = self.viewer.canvas().width(),
            height = self.viewer.canvas().height(),
            "frame ready"
        );

        Some(report)
    }

    /// Hands the last completed frame to the presenter; fails if no render has finished.
    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        if self.viewer.last_report().is_none() {
            return Err(std::io::Error::other("no completed frame to write"));
        }

        self.presenter.present(&self.viewer.frame(), filepath)
    }
}
