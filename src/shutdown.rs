// Dispose requests that may arrive while a frame still holds the stage.

use std::cell::Cell;

/// One-shot teardown that can be retried until the stage is free.
///
/// `dispose()` can be called by page script from inside the camera's render
/// callback. The frame then still holds the director and camera, so the
/// teardown is left pending and the frame runs it once it has let go.
#[derive(Default)]
pub struct Shutdown {
    requested: Cell<bool>,
    done: Cell<bool>,
}

impl Shutdown {
    pub fn request(&self) {
        self.requested.set(true);
    }

    pub fn is_requested(&self) -> bool {
        self.requested.get()
    }

    pub fn is_done(&self) -> bool {
        self.done.get()
    }

    /// Run `teardown` if a request is pending. `teardown` returns `false`
    /// while the stage is busy; it is then retried on the next call.
    ///
    /// Returns `true` only for the call that completed the teardown.
    pub fn run(&self, teardown: impl FnOnce() -> bool) -> bool {
        if !self.requested.get() || self.done.get() {
            return false;
        }
        if !teardown() {
            return false;
        }
        self.done.set(true);
        true
    }
}
