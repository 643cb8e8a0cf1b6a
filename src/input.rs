//! Latest-value mailbox for controller input.
//!
//! The controller is usually polled from an interrupt or another task while
//! frames are rendered elsewhere. Only the newest poll matters to the
//! animator, so instead of a queue this keeps a single snapshot guarded by
//! `critical-section`.

use core::cell::Cell;

use critical_section::Mutex;

use crate::controller::ControllerSnapshot;

/// Holds the most recent [`ControllerSnapshot`].
///
/// Starts out as [`ControllerSnapshot::NEUTRAL`].
pub struct InputLatch {
    inner: Mutex<Cell<ControllerSnapshot>>,
}

impl InputLatch {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(Cell::new(ControllerSnapshot::NEUTRAL)),
        }
    }

    /// Get a publishing handle, typically handed to the polling side.
    pub const fn publisher(&self) -> InputPublisher<'_> {
        InputPublisher { latch: self }
    }

    /// Get a reading handle, typically handed to the render loop.
    pub const fn reader(&self) -> InputReader<'_> {
        InputReader { latch: self }
    }

    /// Replace the stored snapshot.
    pub fn publish(&self, snapshot: ControllerSnapshot) {
        critical_section::with(|cs| self.inner.borrow(cs).set(snapshot));
    }

    /// Copy out the stored snapshot.
    ///
    /// Reading does not consume it; the same poll is returned until a newer
    /// one is published.
    pub fn latest(&self) -> ControllerSnapshot {
        critical_section::with(|cs| self.inner.borrow(cs).get())
    }
}

impl Default for InputLatch {
    fn default() -> Self {
        Self::new()
    }
}

/// A publishing handle for an [`InputLatch`].
#[derive(Clone, Copy)]
pub struct InputPublisher<'a> {
    latch: &'a InputLatch,
}

impl InputPublisher<'_> {
    pub fn publish(&self, snapshot: ControllerSnapshot) {
        self.latch.publish(snapshot);
    }
}

/// A reading handle for an [`InputLatch`].
#[derive(Clone, Copy)]
pub struct InputReader<'a> {
    latch: &'a InputLatch,
}

impl InputReader<'_> {
    pub fn latest(&self) -> ControllerSnapshot {
        self.latch.latest()
    }
}
