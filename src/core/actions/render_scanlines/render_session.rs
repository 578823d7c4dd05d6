use crate::core::actions::cancellation::GenerationToken;
use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::row_buffer::RowBuffer;
use crate::core::data::view_state::ViewState;
use std::time::Instant;

/// Progress of one render generation.
///
/// Owned by whichever slice of work is currently running, and moved into the
/// continuation when the renderer yields.
#[derive(Debug)]
pub(crate) struct RenderSession {
    pub token: GenerationToken,
    pub state: ViewState,
    pub canvas: CanvasSize,
    pub current_row: u32,
    pub started_at: Instant,
    pub row: RowBuffer,
}

impl RenderSession {
    pub fn new(token: GenerationToken, state: ViewState, canvas: CanvasSize, started_at: Instant) -> Self {
        Self {
            token,
            state,
            canvas,
            current_row: 0,
            started_at,
            row: RowBuffer::new(canvas.width()),
        }
    }

    pub fn generation(&self) -> u64 {
        self.token.generation()
    }

    pub fn is_finished(&self) -> bool {
        self.current_row >= self.canvas.height()
    }
}
