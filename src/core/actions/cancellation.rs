use std::cell::Cell;
use std::rc::Rc;

/// Returned by [`CancelToken::check`] once a token's work has been superseded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cancelled;

impl std::fmt::Display for Cancelled {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "operation cancelled")
    }
}

impl std::error::Error for Cancelled {}

pub trait CancelToken {
    fn is_cancelled(&self) -> bool;

    fn check(&self) -> Result<(), Cancelled> {
        if self.is_cancelled() {
            Err(Cancelled)
        } else {
            Ok(())
        }
    }
}

/// The single source of truth for which render generation is live.
///
/// Shared by reference between a renderer and the tokens it hands out;
/// single-threaded, so a `Cell` is enough.
#[derive(Debug, Clone, Default)]
pub struct GenerationCounter {
    live: Rc<Cell<u64>>,
}

impl GenerationCounter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn live(&self) -> u64 {
        self.live.get()
    }

    /// Starts a new generation, superseding every outstanding token.
    pub fn advance(&self) -> u64 {
        let next = self.live.get() + 1;
        self.live.set(next);
        next
    }

    #[must_use]
    pub fn token(&self, generation: u64) -> GenerationToken {
        GenerationToken {
            generation,
            live: Rc::clone(&self.live),
        }
    }
}

/// Cancelled as soon as its generation is no longer the live one.
#[derive(Debug, Clone)]
pub struct GenerationToken {
    generation: u64,
    live: Rc<Cell<u64>>,
}

impl GenerationToken {
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl CancelToken for GenerationToken {
    #[inline]
    fn is_cancelled(&self) -> bool {
        self.live.get() != self.generation
    }
}
