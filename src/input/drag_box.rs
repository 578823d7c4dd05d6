use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::zoom_region::ZoomRegion;
use crate::input::pointer::{PointerEvent, PointerSample};

/// Turns a press-drag-release gesture into a [`ZoomRegion`].
///
/// The box keeps the dragged width and derives its height from the canvas
/// aspect ratio, growing from the press point in the direction of the drag.
#[derive(Debug, Clone)]
pub struct DragBox {
    height_per_width: f64,
    anchor: Option<PointerSample>,
    current: Option<PointerSample>,
}

impl DragBox {
    #[must_use]
    pub fn new(canvas: CanvasSize) -> Self {
        Self {
            height_per_width: height_per_width(canvas),
            anchor: None,
            current: None,
        }
    }

    /// Adopts a new canvas shape. Any drag in progress is dropped.
    pub fn set_canvas(&mut self, canvas: CanvasSize) {
        self.height_per_width = height_per_width(canvas);
        self.cancel();
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.anchor.is_some()
    }

    pub fn cancel(&mut self) {
        self.anchor = None;
        self.current = None;
    }

    /// Feeds one pointer event. Returns a region only when a drag with
    /// non-zero extent is released.
    pub fn handle(&mut self, event: PointerEvent) -> Option<ZoomRegion> {
        match event {
            PointerEvent::Down(sample) => {
                self.anchor = Some(sample);
                self.current = Some(sample);
                None
            }
            PointerEvent::Move(sample) => {
                if self.anchor.is_some() {
                    self.current = Some(sample);
                }
                None
            }
            PointerEvent::Up(sample) => {
                let anchor = self.anchor.take()?;
                self.current = None;
                constrain(anchor, sample, self.height_per_width)
            }
        }
    }

    /// The box as it would be released right now, for drawing an overlay.
    #[must_use]
    pub fn preview(&self) -> Option<ZoomRegion> {
        constrain(self.anchor?, self.current?, self.height_per_width)
    }
}

fn height_per_width(canvas: CanvasSize) -> f64 {
    f64::from(canvas.height()) / f64::from(canvas.width())
}

fn constrain(
    anchor: PointerSample,
    to: PointerSample,
    height_per_width: f64,
) -> Option<ZoomRegion> {
    let height = (to.x - anchor.x).abs() * height_per_width;
    let y = if to.y < anchor.y {
        anchor.y - height
    } else {
        anchor.y + height
    };

    ZoomRegion::from_corners((anchor.x, anchor.y), (to.x, y)).ok()
}
