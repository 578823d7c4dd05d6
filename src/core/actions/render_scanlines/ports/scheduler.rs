pub type Continuation = Box<dyn FnOnce()>;

/// Runs deferred work on a later cooperative tick.
///
/// Implementations must resume continuations in the order they were scheduled.
pub trait Scheduler {
    fn schedule_continuation(&self, continuation: Continuation);
}
