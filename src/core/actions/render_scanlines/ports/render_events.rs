use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderReport {
    pub generation: u64,
    pub rows: u32,
    pub elapsed: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderEvent {
    Completed(RenderReport),
    /// A superseded generation noticed it was stale and stopped.
    Cancelled { generation: u64, rows_written: u32 },
}

pub trait RenderEventPort {
    fn notify(&self, event: RenderEvent);
}
