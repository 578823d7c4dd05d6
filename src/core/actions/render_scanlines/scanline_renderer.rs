//! Progressive, cancellable scanline rendering.
//!
//! A render generation walks the canvas top to bottom, one row at a time,
//! handing each finished row to the [`RasterSurface`]. After every row it
//! checks how long the current slice has run; once the throttle interval is
//! used up it moves its session into a continuation on the [`Scheduler`] and
//! returns, leaving the host free to do other work.
//!
//! Starting a render advances the generation counter. A continuation that
//! wakes up for an older generation drops its session without touching the
//! surface again, which is the only way a render is ever cancelled.

use crate::core::actions::cancellation::{CancelToken, GenerationCounter};
use crate::core::actions::render_row::ports::colour_map::ColourMap;
use crate::core::actions::render_row::render_row::render_row;
use crate::core::actions::render_scanlines::ports::clock::{Clock, SystemClock};
use crate::core::actions::render_scanlines::ports::raster_surface::RasterSurface;
use crate::core::actions::render_scanlines::ports::render_events::{
    RenderEvent, RenderEventPort, RenderReport,
};
use crate::core::actions::render_scanlines::ports::scheduler::Scheduler;
use crate::core::actions::render_scanlines::render_session::RenderSession;
use crate::core::colour_mapping::factory::ViewColourMap;
use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::view_state::ViewState;
use std::cell::{Cell, Ref, RefCell};
use std::rc::{Rc, Weak};
use std::time::Duration;
use tracing::{debug, info};

/// One display frame at 60 Hz.
pub const DEFAULT_THROTTLE: Duration = Duration::from_millis(16);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStatus {
    Idle,
    Running { generation: u64, current_row: u32 },
    Yielded { generation: u64, next_row: u32 },
}

struct RendererShared<S, K> {
    generations: GenerationCounter,
    status: Cell<RenderStatus>,
    last_report: Cell<Option<RenderReport>>,
    throttle: Cell<Duration>,
    surface: RefCell<S>,
    colour_map: RefCell<Box<dyn ColourMap>>,
    events: RefCell<Option<Rc<dyn RenderEventPort>>>,
    scheduler: Rc<dyn Scheduler>,
    clock: K,
}

pub struct ScanlineRenderer<S, K = SystemClock> {
    shared: Rc<RendererShared<S, K>>,
}

impl<S: RasterSurface + 'static> ScanlineRenderer<S, SystemClock> {
    pub fn new(surface: S, scheduler: Rc<dyn Scheduler>) -> Self {
        Self::with_clock(surface, scheduler, SystemClock)
    }
}

impl<S: RasterSurface + 'static, K: Clock + 'static> ScanlineRenderer<S, K> {
    pub fn with_clock(surface: S, scheduler: Rc<dyn Scheduler>, clock: K) -> Self {
        Self {
            shared: Rc::new(RendererShared {
                generations: GenerationCounter::new(),
                status: Cell::new(RenderStatus::Idle),
                last_report: Cell::new(None),
                throttle: Cell::new(DEFAULT_THROTTLE),
                surface: RefCell::new(surface),
                colour_map: RefCell::new(Box::new(ViewColourMap)),
                events: RefCell::new(None),
                scheduler,
                clock,
            }),
        }
    }

    #[must_use]
    pub fn with_throttle(self, throttle: Duration) -> Self {
        self.shared.throttle.set(throttle);
        self
    }

    /// Swaps the colour mapper used by every row rendered from now on.
    pub fn set_colour_map(&self, colour_map: Box<dyn ColourMap>) {
        *self.shared.colour_map.borrow_mut() = colour_map;
    }

    pub fn set_event_port(&self, port: Rc<dyn RenderEventPort>) {
        *self.shared.events.borrow_mut() = Some(port);
    }

    /// Begins a new generation and queues its first slice.
    ///
    /// Any generation still in flight becomes stale and abandons its remaining
    /// rows the next time it resumes. Returns the new generation id.
    pub fn start(&self, state: ViewState, canvas: CanvasSize) -> u64 {
        let shared = &self.shared;
        let generation = shared.generations.advance();
        let token = shared.generations.token(generation);

        shared
            .surface
            .borrow_mut()
            .begin_frame(canvas.width(), canvas.height());
        shared.status.set(RenderStatus::Running {
            generation,
            current_row: 0,
        });

        debug!(
            generation,
            width = canvas.width(),
            height = canvas.height(),
            mode = %state.mode(),
            "render started"
        );

        let session = RenderSession::new(token, state, canvas, shared.clock.now());
        schedule_slice(shared, session);

        generation
    }

    #[must_use]
    pub fn status(&self) -> RenderStatus {
        self.shared.status.get()
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.status() == RenderStatus::Idle
    }

    #[must_use]
    pub fn live_generation(&self) -> u64 {
        self.shared.generations.live()
    }

    #[must_use]
    pub fn last_report(&self) -> Option<RenderReport> {
        self.shared.last_report.get()
    }

    #[must_use]
    pub fn throttle(&self) -> Duration {
        self.shared.throttle.get()
    }

    #[must_use]
    pub fn surface(&self) -> Ref<'_, S> {
        self.shared.surface.borrow()
    }
}

fn schedule_slice<S, K>(shared: &Rc<RendererShared<S, K>>, session: RenderSession)
where
    S: RasterSurface + 'static,
    K: Clock + 'static,
{
    let weak: Weak<RendererShared<S, K>> = Rc::downgrade(shared);

    shared
        .scheduler
        .schedule_continuation(Box::new(move || {
            // renderer dropped while the continuation was queued
            if let Some(shared) = weak.upgrade() {
                run_slice(&shared, session);
            }
        }));
}

fn run_slice<S, K>(shared: &Rc<RendererShared<S, K>>, mut session: RenderSession)
where
    S: RasterSurface + 'static,
    K: Clock + 'static,
{
    let generation = session.generation();

    if let Err(err) = session.token.check() {
        debug!(
            generation,
            rows_written = session.current_row,
            %err,
            "stale render abandoned"
        );
        notify(
            shared,
            RenderEvent::Cancelled {
                generation,
                rows_written: session.current_row,
            },
        );
        return;
    }

    let throttle = shared.throttle.get();
    let slice_started = shared.clock.now();
    let mut yielded = false;

    {
        let colour_map = shared.colour_map.borrow();
        let mut surface = shared.surface.borrow_mut();

        while !session.is_finished() {
            shared.status.set(RenderStatus::Running {
                generation,
                current_row: session.current_row,
            });

            render_row(
                session.current_row,
                &session.state,
                session.canvas,
                &**colour_map,
                &mut session.row,
            );
            surface.present_row(
                session.current_row,
                session.row.as_bytes(),
                session.row.width(),
            );
            session.current_row += 1;

            if !session.is_finished()
                && shared.clock.now().duration_since(slice_started) >= throttle
            {
                yielded = true;
                break;
            }
        }
    }

    if yielded {
        shared.status.set(RenderStatus::Yielded {
            generation,
            next_row: session.current_row,
        });
        debug!(generation, next_row = session.current_row, "render yielded");
        schedule_slice(shared, session);
    } else {
        complete(shared, &session);
    }
}

fn complete<S, K: Clock>(shared: &Rc<RendererShared<S, K>>, session: &RenderSession) {
    let report = RenderReport {
        generation: session.generation(),
        rows: session.current_row,
        elapsed: shared.clock.now().duration_since(session.started_at),
    };

    shared.last_report.set(Some(report));
    shared.status.set(RenderStatus::Idle);

    info!(
        generation = report.generation,
        rows = report.rows,
        elapsed_ms = report.elapsed.as_secs_f64() * 1000.0,
        "render complete"
    );

    notify(shared, RenderEvent::Completed(report));
}

fn notify<S, K>(shared: &Rc<RendererShared<S, K>>, event: RenderEvent) {
    // cloned out so the port may start another render from inside `notify`
    let port = shared.events.borrow().clone();

    if let Some(port) = port {
        port.notify(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::interactive::task_queue::TaskQueue;
    use crate::core::colour_mapping::factory::colourise;
    use crate::core::colour_mapping::kinds::ColourMode;
    use crate::core::data::complex::Complex;
    use crate::core::data::row_buffer::BYTES_PER_PIXEL;
    use crate::core::fractals::algorithm::iterate;
    use crate::core::util::pixel_to_plane::pixel_to_plane;
    use std::collections::BTreeMap;
    use std::time::Instant;

    #[derive(Debug, Clone, PartialEq)]
    enum SurfaceCall {
        BeginFrame(u32, u32),
        Row(u32),
    }

    #[derive(Default)]
    struct RecordingSurface {
        calls: Vec<SurfaceCall>,
        rows: BTreeMap<u32, Vec<u8>>,
    }

    impl RecordingSurface {
        fn row_writes(&self) -> Vec<u32> {
            self.calls
                .iter()
                .filter_map(|call| match call {
                    SurfaceCall::Row(index) => Some(*index),
                    SurfaceCall::BeginFrame(..) => None,
                })
                .collect()
        }
    }

    impl RasterSurface for RecordingSurface {
        fn present_row(&mut self, row_index: u32, pixels: &[u8], width: u32) {
            assert_eq!(pixels.len(), width as usize * BYTES_PER_PIXEL);
            self.calls.push(SurfaceCall::Row(row_index));
            self.rows.insert(row_index, pixels.to_vec());
        }

        fn begin_frame(&mut self, width: u32, height: u32) {
            self.calls.push(SurfaceCall::BeginFrame(width, height));
        }
    }

    /// Every call to `now` returns the current time, then moves it on by `step`.
    struct SteppingClock {
        base: Instant,
        offset: Cell<Duration>,
        step: Duration,
    }

    impl SteppingClock {
        fn new(step: Duration) -> Self {
            Self {
                base: Instant::now(),
                offset: Cell::new(Duration::ZERO),
                step,
            }
        }
    }

    impl Clock for SteppingClock {
        fn now(&self) -> Instant {
            let offset = self.offset.get();
            self.offset.set(offset + self.step);
            self.base + offset
        }
    }

    #[derive(Default)]
    struct RecordingEvents {
        events: RefCell<Vec<RenderEvent>>,
    }

    impl RenderEventPort for RecordingEvents {
        fn notify(&self, event: RenderEvent) {
            self.events.borrow_mut().push(event);
        }
    }

    fn canvas() -> CanvasSize {
        CanvasSize::new(12, 6).unwrap()
    }

    fn grey_state() -> ViewState {
        ViewState::fitted_to(canvas())
            .with_center(Complex::new(-0.5, 0.0))
            .unwrap()
    }

    fn hue_state() -> ViewState {
        grey_state().with_colour_mode(ColourMode::Hue)
    }

    fn expected_row(state: &ViewState, row: u32) -> Vec<u8> {
        (0..canvas().width())
            .flat_map(|column| {
                let point = pixel_to_plane(f64::from(column), f64::from(row), state, canvas());
                let colour = colourise(iterate(point.real, point.imag, state), state);
                [colour.r, colour.g, colour.b, 255]
            })
            .collect()
    }

    fn renderer(
        step: Duration,
        throttle: Duration,
    ) -> (
        ScanlineRenderer<RecordingSurface, SteppingClock>,
        Rc<TaskQueue>,
        Rc<RecordingEvents>,
    ) {
        let queue = Rc::new(TaskQueue::new());
        let events = Rc::new(RecordingEvents::default());
        let renderer = ScanlineRenderer::with_clock(
            RecordingSurface::default(),
            Rc::clone(&queue) as Rc<dyn Scheduler>,
            SteppingClock::new(step),
        )
        .with_throttle(throttle);
        renderer.set_event_port(Rc::clone(&events) as Rc<dyn RenderEventPort>);

        (renderer, queue, events)
    }

    #[test]
    fn test_starts_idle() {
        let (renderer, queue, _) = renderer(Duration::ZERO, DEFAULT_THROTTLE);

        assert!(renderer.is_idle());
        assert_eq!(renderer.live_generation(), 0);
        assert_eq!(renderer.last_report(), None);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_start_queues_work_without_writing_rows() {
        let (renderer, queue, _) = renderer(Duration::ZERO, DEFAULT_THROTTLE);

        let generation = renderer.start(grey_state(), canvas());

        assert_eq!(generation, 1);
        assert_eq!(queue.len(), 1);
        assert_eq!(
            renderer.status(),
            RenderStatus::Running {
                generation: 1,
                current_row: 0
            }
        );
        assert!(renderer.surface().row_writes().is_empty());
    }

    #[test]
    fn test_renders_every_row_in_order() {
        let (renderer, queue, events) = renderer(Duration::ZERO, Duration::from_secs(60));
        let state = grey_state();

        renderer.start(state, canvas());
        assert_eq!(queue.run_until_idle(), 1);

        let surface = renderer.surface();
        assert_eq!(surface.row_writes(), (0..6).collect::<Vec<_>>());
        for row in 0..6 {
            assert_eq!(surface.rows[&row], expected_row(&state, row));
        }
        assert!(renderer.is_idle());
        assert!(matches!(
            events.events.borrow().as_slice(),
            [RenderEvent::Completed(RenderReport {
                generation: 1,
                rows: 6,
                ..
            })]
        ));
    }

    #[test]
    fn test_yields_once_throttle_interval_is_used() {
        let (renderer, queue, _) = renderer(Duration::from_millis(1), Duration::from_millis(2));

        renderer.start(grey_state(), canvas());
        assert!(queue.run_next());

        assert_eq!(renderer.surface().row_writes(), vec![0, 1]);
        assert_eq!(
            renderer.status(),
            RenderStatus::Yielded {
                generation: 1,
                next_row: 2
            }
        );
        assert_eq!(queue.len(), 1);

        assert_eq!(queue.run_until_idle(), 2);
        assert_eq!(renderer.surface().row_writes(), (0..6).collect::<Vec<_>>());
        assert!(renderer.is_idle());
    }

    #[test]
    fn test_zero_throttle_yields_after_every_row() {
        let (renderer, queue, _) = renderer(Duration::from_millis(1), Duration::ZERO);

        renderer.start(grey_state(), canvas());

        assert_eq!(queue.run_until_idle(), 6);
        assert_eq!(renderer.surface().row_writes(), (0..6).collect::<Vec<_>>());
    }

    #[test]
    fn test_reports_elapsed_time_since_start() {
        let (renderer, queue, _) = renderer(Duration::from_millis(1), Duration::from_secs(60));
        let short_canvas = CanvasSize::new(4, 3).unwrap();

        renderer.start(grey_state(), short_canvas);
        queue.run_until_idle();

        // start, slice start, after rows 0 and 1, completion: five clock reads
        let report = renderer.last_report().unwrap();
        assert_eq!(report.generation, 1);
        assert_eq!(report.rows, 3);
        assert_eq!(report.elapsed, Duration::from_millis(4));
    }

    #[test]
    fn test_second_start_before_first_yield_discards_first_generation() {
        let (renderer, queue, events) = renderer(Duration::ZERO, Duration::from_secs(60));
        let first = hue_state();
        let second = grey_state();

        assert_eq!(renderer.start(first, canvas()), 1);
        assert_eq!(renderer.start(second, canvas()), 2);
        queue.run_until_idle();

        let surface = renderer.surface();
        assert_eq!(surface.row_writes(), (0..6).collect::<Vec<_>>());
        for row in 0..6 {
            assert_eq!(surface.rows[&row], expected_row(&second, row));
        }
        assert!((0..6).any(|row| surface.rows[&row] != expected_row(&first, row)));

        assert_eq!(
            events.events.borrow()[0],
            RenderEvent::Cancelled {
                generation: 1,
                rows_written: 0
            }
        );
        assert!(matches!(
            events.events.borrow()[1],
            RenderEvent::Completed(RenderReport { generation: 2, .. })
        ));
        assert_eq!(renderer.last_report().unwrap().generation, 2);
    }

    #[test]
    fn test_superseded_generation_stops_at_next_resumption() {
        let (renderer, queue, events) = renderer(Duration::from_millis(1), Duration::from_millis(2));

        renderer.start(hue_state(), canvas());
        assert!(queue.run_next());

        renderer.start(grey_state(), canvas());
        queue.run_until_idle();

        let calls = renderer.surface().calls.clone();
        let mut expected = vec![
            SurfaceCall::BeginFrame(12, 6),
            SurfaceCall::Row(0),
            SurfaceCall::Row(1),
            SurfaceCall::BeginFrame(12, 6),
        ];
        expected.extend((0..6).map(SurfaceCall::Row));

        assert_eq!(calls, expected);
        assert!(events.events.borrow().contains(&RenderEvent::Cancelled {
            generation: 1,
            rows_written: 2
        }));
    }

    #[test]
    fn test_generation_ids_increase() {
        let (renderer, _, _) = renderer(Duration::ZERO, DEFAULT_THROTTLE);

        let a = renderer.start(grey_state(), canvas());
        let b = renderer.start(grey_state(), canvas());
        let c = renderer.start(hue_state(), canvas());

        assert!(a < b && b < c);
        assert_eq!(renderer.live_generation(), c);
    }

    #[test]
    fn test_swapped_colour_map_is_used() {
        struct White;

        impl ColourMap for White {
            fn map(
                &self,
                _: crate::core::data::escape_result::EscapeResult,
                _: &ViewState,
            ) -> crate::core::data::colour::Colour {
                crate::core::data::colour::Colour {
                    r: 255,
                    g: 255,
                    b: 255,
                }
            }

            fn display_name(&self) -> &str {
                "White"
            }
        }

        let (renderer, queue, _) = renderer(Duration::ZERO, Duration::from_secs(60));
        renderer.set_colour_map(Box::new(White));

        renderer.start(grey_state(), canvas());
        queue.run_until_idle();

        assert!(
            renderer
                .surface()
                .rows
                .values()
                .all(|row| row.iter().all(|&byte| byte == 255))
        );
    }

    #[test]
    fn test_dropped_renderer_leaves_queued_work_inert() {
        let (renderer, queue, events) = renderer(Duration::ZERO, Duration::from_secs(60));

        renderer.start(grey_state(), canvas());
        drop(renderer);

        assert_eq!(queue.run_until_idle(), 1);
        assert!(events.events.borrow().is_empty());
    }
}
