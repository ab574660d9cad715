use std::cell::Cell;
use std::rc::Rc;

/// Shared cancellation flag for a frame loop.
///
/// Clones observe the same flag. The loop checks it every iteration; once
/// set, no further frame is scheduled. The handle is `!Send` because the loop
/// runs on a single thread.
#[derive(Debug, Clone, Default)]
pub struct StopHandle {
    requested: Rc<Cell<bool>>,
}

impl StopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests that the loop stop after the current tick.
    pub fn stop(&self) {
        self.requested.set(true);
    }

    #[inline]
    pub fn is_requested(&self) -> bool {
        self.requested.get()
    }

    pub(crate) fn clear(&self) {
        self.requested.set(false);
    }
}
