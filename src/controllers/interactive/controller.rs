use crate::controllers::interactive::task_queue::TaskQueue;
use crate::core::actions::render_scanlines::ports::clock::{Clock, SystemClock};
use crate::core::actions::render_scanlines::ports::raster_surface::RasterSurface;
use crate::core::actions::render_scanlines::ports::render_events::{RenderEventPort, RenderReport};
use crate::core::actions::render_scanlines::ports::scheduler::Scheduler;
use crate::core::actions::render_scanlines::scanline_renderer::{RenderStatus, ScanlineRenderer};
use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::parameter_set::{
    ParameterSet, from_parameter_set, has_scale, parse_query_string, to_parameter_set,
    to_query_string,
};
use crate::core::data::view_state::ViewState;
use crate::core::data::zoom_region::ZoomRegion;
use crate::core::util::zoom_to_state::zoom_to_state;
use crate::input::drag_box::DragBox;
use crate::input::pointer::PointerEvent;
use crate::presenters::frame::frame_surface::FrameSurface;
use std::cell::Ref;
use std::rc::Rc;
use tracing::debug;

/// Owns everything an interactive session needs: the current view, the
/// canvas, the renderer and the queue its continuations run on.
///
/// Every method that changes what should be on screen returns the generation
/// it started, or `None` when nothing changed and no render was started.
pub struct ViewerController<S = FrameSurface, K = SystemClock> {
    state: ViewState,
    canvas: CanvasSize,
    queue: Rc<TaskQueue>,
    renderer: ScanlineRenderer<S, K>,
    drag_box: DragBox,
}

impl ViewerController<FrameSurface, SystemClock> {
    pub fn new(state: ViewState, canvas: CanvasSize) -> Self {
        Self::with_renderer(state, canvas, |scheduler| {
            ScanlineRenderer::new(FrameSurface::new(), scheduler)
        })
    }
}

impl<S: RasterSurface + 'static, K: Clock + 'static> ViewerController<S, K> {
    /// Builds the controller around a renderer scheduled on the controller's queue.
    pub fn with_renderer(
        state: ViewState,
        canvas: CanvasSize,
        build: impl FnOnce(Rc<dyn Scheduler>) -> ScanlineRenderer<S, K>,
    ) -> Self {
        let queue = Rc::new(TaskQueue::new());
        let renderer = build(Rc::clone(&queue) as Rc<dyn Scheduler>);

        Self {
            state,
            canvas,
            queue,
            renderer,
            drag_box: DragBox::new(canvas),
        }
    }

    #[must_use]
    pub fn state(&self) -> ViewState {
        self.state
    }

    #[must_use]
    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    #[must_use]
    pub fn renderer(&self) -> &ScanlineRenderer<S, K> {
        &self.renderer
    }

    #[must_use]
    pub fn frame(&self) -> Ref<'_, S> {
        self.renderer.surface()
    }

    #[must_use]
    pub fn status(&self) -> RenderStatus {
        self.renderer.status()
    }

    #[must_use]
    pub fn last_report(&self) -> Option<RenderReport> {
        self.renderer.last_report()
    }

    #[must_use]
    pub fn has_pending_work(&self) -> bool {
        !self.queue.is_empty()
    }

    pub fn set_event_port(&self, port: Rc<dyn RenderEventPort>) {
        self.renderer.set_event_port(port);
    }

    /// Renders the current view again, superseding anything in flight.
    pub fn start_render(&mut self) -> u64 {
        self.renderer.start(self.state, self.canvas)
    }

    pub fn apply_state(&mut self, state: ViewState) -> Option<u64> {
        if state == self.state {
            return None;
        }

        self.state = state;
        Some(self.start_render())
    }

    pub fn zoom(&mut self, region: ZoomRegion) -> Option<u64> {
        match zoom_to_state(region, &self.state, self.canvas) {
            Ok(state) => self.apply_state(state),
            Err(err) => {
                debug!(%err, "zoom ignored");
                None
            }
        }
    }

    pub fn handle_pointer(&mut self, event: PointerEvent) -> Option<u64> {
        let region = self.drag_box.handle(event)?;
        self.zoom(region)
    }

    /// The zoom box being dragged, if any.
    #[must_use]
    pub fn drag_preview(&self) -> Option<ZoomRegion> {
        self.drag_box.preview()
    }

    /// Adopts a new canvas size. The scale is kept, so more or less of the
    /// plane becomes visible around the same center.
    pub fn resize(&mut self, canvas: CanvasSize) -> Option<u64> {
        if canvas == self.canvas {
            return None;
        }

        self.canvas = canvas;
        self.drag_box.set_canvas(canvas);
        Some(self.start_render())
    }

    pub fn reset_view(&mut self) -> Option<u64> {
        self.apply_state(self.state.refitted_to(self.canvas))
    }

    #[must_use]
    pub fn parameter_set(&self) -> ParameterSet {
        to_parameter_set(&self.state)
    }

    #[must_use]
    pub fn query_string(&self) -> String {
        to_query_string(&self.parameter_set())
    }

    /// Replaces the view with one read from a query string. A query without a
    /// scale fits the default view to the canvas.
    pub fn apply_query_string(&mut self, query: &str) -> Option<u64> {
        self.apply_parameter_set(&parse_query_string(query))
    }

    pub fn apply_parameter_set(&mut self, params: &ParameterSet) -> Option<u64> {
        let state = from_parameter_set(params);

        let state = if has_scale(params) {
            state
        } else {
            state
                .with_scale(ViewState::fitted_to(self.canvas).scale())
                .unwrap_or(state)
        };

        self.apply_state(state)
    }

    /// Runs one queued slice. Returns `false` if nothing was queued.
    pub fn tick(&self) -> bool {
        self.queue.run_next()
    }

    pub fn run_until_idle(&self) -> usize {
        self.queue.run_until_idle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::render_scanlines::ports::render_events::RenderEvent;
    use crate::core::colour_mapping::kinds::ColourMode;
    use crate::core::data::complex::Complex;
    use crate::core::fractals::fractal_kinds::FractalKind;
    use crate::input::pointer::PointerSample;
    use std::cell::RefCell;
    use std::time::Duration;

    #[derive(Default)]
    struct MockEventPort {
        events: RefCell<Vec<RenderEvent>>,
    }

    impl MockEventPort {
        fn take_events(&self) -> Vec<RenderEvent> {
            self.events.borrow_mut().drain(..).collect()
        }
    }

    impl RenderEventPort for MockEventPort {
        fn notify(&self, event: RenderEvent) {
            self.events.borrow_mut().push(event);
        }
    }

    fn canvas() -> CanvasSize {
        CanvasSize::new(40, 30).unwrap()
    }

    fn build_controller() -> (ViewerController, Rc<MockEventPort>) {
        let controller = ViewerController::with_renderer(
            ViewState::fitted_to(canvas()),
            canvas(),
            |scheduler| {
                ScanlineRenderer::new(FrameSurface::new(), scheduler)
                    .with_throttle(Duration::from_secs(60))
            },
        );
        let events = Rc::new(MockEventPort::default());
        controller.set_event_port(Rc::clone(&events) as Rc<dyn RenderEventPort>);

        (controller, events)
    }

    #[test]
    fn test_start_render_fills_frame() {
        let (mut controller, events) = build_controller();

        assert_eq!(controller.start_render(), 1);
        assert!(controller.has_pending_work());

        controller.run_until_idle();

        let frame = controller.frame();
        assert_eq!((frame.width(), frame.height()), (40, 30));
        assert_eq!(frame.rows_presented(), 30);
        assert!(frame.as_rgba().chunks_exact(4).all(|pixel| pixel[3] == 255));
        drop(frame);

        assert_eq!(controller.last_report().unwrap().rows, 30);
        assert!(matches!(
            events.take_events().as_slice(),
            [RenderEvent::Completed(_)]
        ));
    }

    #[test]
    fn test_apply_unchanged_state_does_not_render() {
        let (mut controller, _) = build_controller();

        assert_eq!(controller.apply_state(controller.state()), None);
        assert!(!controller.has_pending_work());
    }

    #[test]
    fn test_apply_changed_state_starts_new_generation() {
        let (mut controller, _) = build_controller();
        controller.start_render();

        let next = controller.state().with_colour_mode(ColourMode::Hue);

        assert_eq!(controller.apply_state(next), Some(2));
        assert_eq!(controller.state(), next);
    }

    #[test]
    fn test_zoom_narrows_view() {
        let (mut controller, _) = build_controller();
        let before = controller.state();

        let generation = controller.zoom(ZoomRegion::new(10.0, 7.5, 30.0, 22.5).unwrap());

        assert_eq!(generation, Some(1));
        assert!((controller.state().scale() - before.scale() / 2.0).abs() < 1e-15);
        assert_eq!(controller.state().center(), before.center());
    }

    #[test]
    fn test_drag_gesture_zooms_on_release() {
        let (mut controller, _) = build_controller();
        let before = controller.state();

        assert_eq!(
            controller.handle_pointer(PointerEvent::Down(PointerSample::new(0.0, 0.0))),
            None
        );
        assert_eq!(
            controller.handle_pointer(PointerEvent::Move(PointerSample::new(20.0, 5.0))),
            None
        );
        assert!(controller.drag_preview().is_some());

        let generation =
            controller.handle_pointer(PointerEvent::Up(PointerSample::new(20.0, 5.0)));

        assert_eq!(generation, Some(1));
        assert!(controller.state().scale() < before.scale());
        assert!(controller.drag_preview().is_none());
    }

    #[test]
    fn test_click_without_drag_keeps_view() {
        let (mut controller, _) = build_controller();
        let before = controller.state();

        controller.handle_pointer(PointerEvent::Down(PointerSample::new(5.0, 5.0)));
        let generation = controller.handle_pointer(PointerEvent::Up(PointerSample::new(5.0, 5.0)));

        assert_eq!(generation, None);
        assert_eq!(controller.state(), before);
    }

    #[test]
    fn test_resize_rerenders_at_new_size() {
        let (mut controller, _) = build_controller();

        assert_eq!(controller.resize(canvas()), None);

        let bigger = CanvasSize::new(64, 48).unwrap();
        assert_eq!(controller.resize(bigger), Some(1));
        controller.run_until_idle();

        assert_eq!(controller.frame().width(), 64);
        assert_eq!(controller.frame().rows_presented(), 48);
    }

    #[test]
    fn test_reset_view_restores_fitted_view() {
        let (mut controller, _) = build_controller();
        controller.zoom(ZoomRegion::new(0.0, 0.0, 8.0, 6.0).unwrap());

        assert!(controller.reset_view().is_some());
        assert_eq!(controller.state(), ViewState::fitted_to(canvas()));
        assert_eq!(controller.reset_view(), None);
    }

    #[test]
    fn test_query_string_round_trips_view() {
        let (mut controller, _) = build_controller();
        let state = controller
            .state()
            .with_center(Complex::new(-0.1, 0.65))
            .unwrap()
            .with_mode(FractalKind::Julia);
        controller.apply_state(state);

        let query = controller.query_string();
        let (mut other, _) = build_controller();

        assert!(other.apply_query_string(&query).is_some());
        assert_eq!(other.state(), state);
    }

    #[test]
    fn test_query_without_scale_fits_canvas() {
        let (mut controller, _) = build_controller();

        controller.apply_query_string("?n=200&h=1");

        assert_eq!(controller.state().scale(), ViewState::fitted_to(canvas()).scale());
        assert_eq!(controller.state().max_iterations(), 200);
        assert_eq!(controller.state().colour_mode(), ColourMode::Hue);
    }

    #[test]
    fn test_newest_request_wins() {
        let (mut controller, events) = build_controller();

        controller.start_render();
        controller.apply_state(controller.state().with_colour_mode(ColourMode::Hue));
        controller.run_until_idle();

        let events = events.take_events();
        assert_eq!(
            events[0],
            RenderEvent::Cancelled {
                generation: 1,
                rows_written: 0
            }
        );
        assert!(matches!(
            events[1],
            RenderEvent::Completed(RenderReport { generation: 2, .. })
        ));
        assert_eq!(controller.last_report().unwrap().generation, 2);
    }
}
