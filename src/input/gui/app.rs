//! Window host for the viewer.
//!
//! The winit event loop is the cooperative scheduler's clock: every pass
//! through `AboutToWait` runs one queued render slice, so the window stays
//! responsive while a frame fills in row by row.

use crate::controllers::interactive::ViewerController;
use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::view_state::ViewState;
use crate::core::data::zoom_region::ZoomRegion;
use crate::input::pointer::{PointerEvent, PointerSample};
use crate::input::view_command::ViewCommand;
use pixels::{Pixels, SurfaceTexture};
use std::error::Error;
use tracing::{error, info};
use winit::{
    dpi::LogicalSize,
    event::{ElementState, Event, MouseButton, TouchPhase, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    keyboard::{Key, NamedKey},
    window::{Window, WindowBuilder},
};

const OVERLAY: [u8; 4] = [255, 255, 0, 255];

struct GuiApp {
    pixels: Pixels<'static>,
    controller: ViewerController,
    cursor: PointerSample,
}

impl GuiApp {
    fn new(window: &'static Window, query: Option<&str>) -> Result<Self, Box<dyn Error>> {
        let size = window.inner_size();
        let canvas = CanvasSize::new(size.width, size.height)?;
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(size.width, size.height, surface_texture)?;

        let mut controller = ViewerController::new(ViewState::fitted_to(canvas), canvas);
        let restored = query.and_then(|query| controller.apply_query_string(query));
        if restored.is_none() {
            controller.start_render();
        }

        Ok(Self {
            pixels,
            controller,
            cursor: PointerSample::new(0.0, 0.0),
        })
    }

    /// Copies the rendered frame into the window buffer and draws the drag box.
    fn draw(&mut self) -> Result<(), pixels::Error> {
        let width = self.controller.canvas().width();
        let frame = self.pixels.frame_mut();

        {
            let rendered = self.controller.frame();

            // stale until the first rows of a resized frame arrive
            if rendered.as_rgba().len() == frame.len() {
                frame.copy_from_slice(rendered.as_rgba());
            }
        }

        if let Some(region) = self.controller.drag_preview() {
            draw_outline(frame, width, region);
        }

        self.pixels.render()
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), Box<dyn Error>> {
        // minimised windows report a zero size
        let Ok(canvas) = CanvasSize::new(width, height) else {
            return Ok(());
        };

        self.pixels.resize_surface(width, height)?;
        self.pixels.resize_buffer(width, height)?;
        self.controller.resize(canvas);

        Ok(())
    }

    fn pointer(&mut self, event: PointerEvent) {
        self.cursor = event.sample();
        self.controller.handle_pointer(event);
    }

    fn command(&mut self, command: ViewCommand) {
        let state = command.apply(self.controller.state(), self.controller.canvas());

        if self.controller.apply_state(state).is_some() {
            info!(command = command.display_name(), query = %self.controller.query_string(), "view changed");
        }
    }
}

fn draw_outline(frame: &mut [u8], width: u32, region: ZoomRegion) {
    let height = (frame.len() / 4) as u32 / width.max(1);
    let clamp_x = |x: f64| (x.max(0.0) as u32).min(width.saturating_sub(1));
    let clamp_y = |y: f64| (y.max(0.0) as u32).min(height.saturating_sub(1));
    let (x0, x1) = (clamp_x(region.x0()), clamp_x(region.x1()));
    let (y0, y1) = (clamp_y(region.y0()), clamp_y(region.y1()));

    let mut put = |x: u32, y: u32| {
        let start = (y as usize * width as usize + x as usize) * 4;
        if let Some(pixel) = frame.get_mut(start..start + 4) {
            pixel.copy_from_slice(&OVERLAY);
        }
    };

    for x in x0..=x1 {
        put(x, y0);
        put(x, y1);
    }
    for y in y0..=y1 {
        put(x0, y);
        put(x1, y);
    }
}

/// Opens the viewer window, optionally at a view saved as a query string.
/// Returns once the window is closed.
pub fn run_gui(query: Option<&str>) -> Result<(), Box<dyn Error>> {
    let event_loop = EventLoop::new()?;

    // Leak the window to get a 'static reference for pixels
    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title("Fractal Viewer")
            .with_inner_size(LogicalSize::new(800.0, 600.0))
            .with_min_inner_size(LogicalSize::new(200.0, 200.0))
            .build(&event_loop)?,
    ));

    let mut app = GuiApp::new(window, query)?;
    info!(query = %app.controller.query_string(), "viewer started");

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, window_id } if window_id == window.id() => match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::RedrawRequested => {
                if let Err(err) = app.draw() {
                    error!(%err, "render failed");
                    elwt.exit();
                }
            }
            WindowEvent::Resized(size) => {
                if let Err(err) = app.resize(size.width, size.height) {
                    error!(%err, "resize failed");
                    elwt.exit();
                }
                window.request_redraw();
            }
            WindowEvent::CursorMoved { position, .. } => {
                app.pointer(PointerEvent::Move(PointerSample::new(position.x, position.y)));
                if app.controller.drag_preview().is_some() {
                    window.request_redraw();
                }
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                let sample = app.cursor;
                app.pointer(match state {
                    ElementState::Pressed => PointerEvent::Down(sample),
                    ElementState::Released => PointerEvent::Up(sample),
                });
                window.request_redraw();
            }
            WindowEvent::Touch(touch) => {
                let sample = PointerSample::new(touch.location.x, touch.location.y);
                match touch.phase {
                    TouchPhase::Started => app.pointer(PointerEvent::Down(sample)),
                    TouchPhase::Moved => app.pointer(PointerEvent::Move(sample)),
                    TouchPhase::Ended => app.pointer(PointerEvent::Up(sample)),
                    TouchPhase::Cancelled => {}
                }
                window.request_redraw();
            }
            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                match event.logical_key {
                    Key::Named(NamedKey::Escape) => elwt.exit(),
                    Key::Character(key) => {
                        if let Some(command) = ViewCommand::from_key(key.as_str()) {
                            app.command(command);
                        }
                    }
                    _ => {}
                }
            }
            _ => {}
        },
        Event::AboutToWait => {
            if app.controller.tick() {
                window.request_redraw();
            }

            elwt.set_control_flow(if app.controller.has_pending_work() {
                ControlFlow::Poll
            } else {
                ControlFlow::Wait
            });
        }
        _ => {}
    })?;

    Ok(())
}
