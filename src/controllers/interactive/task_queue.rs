use crate::core::actions::render_scanlines::ports::scheduler::{Continuation, Scheduler};
use std::cell::RefCell;
use std::collections::VecDeque;

/// FIFO queue of continuations; each `run_next` is one cooperative tick.
///
/// The host loop (timer, frame callback, or a plain `while`) decides when to
/// tick. Tasks scheduled while a task runs go to the back of the queue.
#[derive(Default)]
pub struct TaskQueue {
    pending: RefCell<VecDeque<Continuation>>,
}

impl TaskQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.borrow().is_empty()
    }

    /// Runs the oldest pending task. Returns `false` if there was none.
    pub fn run_next(&self) -> bool {
        // release the borrow before running so the task can schedule more work
        let next = self.pending.borrow_mut().pop_front();

        match next {
            Some(task) => {
                task();
                true
            }
            None => false,
        }
    }

    /// Ticks until the queue is empty, returning how many tasks ran.
    pub fn run_until_idle(&self) -> usize {
        let mut ran = 0;

        while self.run_next() {
            ran += 1;
        }

        ran
    }
}

impl Scheduler for TaskQueue {
    fn schedule_continuation(&self, continuation: Continuation) {
        self.pending.borrow_mut().push_back(continuation);
    }
}

impl std::fmt::Debug for TaskQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskQueue")
            .field("pending", &self.len())
            .finish()
    }
}
