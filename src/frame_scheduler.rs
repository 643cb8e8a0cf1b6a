//! Frame scheduling and timing utilities.
//!
//! Provides portable frame pacing without async/await or platform-specific timers.
//! The caller is responsible for sleeping/waiting between frames.

use embassy_time::{Duration, Instant};

use crate::controller::ControllerSnapshot;
use crate::input::InputReader;
use crate::{Animator, PixelSink};

/// Default frame rate, matching the controller poll rate (60 FPS).
pub const DEFAULT_FPS: u32 = 60;

/// Default frame duration based on target FPS.
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(1000 / DEFAULT_FPS as u64);

/// Source of controller input for the scheduler.
pub trait InputSource {
    /// Return the input to animate this frame with
    fn snapshot(&mut self) -> ControllerSnapshot;
}

impl InputSource for InputReader<'_> {
    fn snapshot(&mut self) -> ControllerSnapshot {
        self.latest()
    }
}

impl InputSource for ControllerSnapshot {
    fn snapshot(&mut self) -> ControllerSnapshot {
        *self
    }
}

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Portable frame scheduler that manages timing without async.
///
/// This scheduler:
/// - Tracks frame timing with drift correction
/// - Reads input and advances the animator by exactly one frame
/// - Returns timing info so the caller can sleep appropriately
///
/// Animations count frames, not time, so steady pacing here is what keeps
/// their timeouts and pulse lengths stable.
///
/// # Usage
///
/// ```ignore
/// static INPUT: InputLatch = InputLatch::new();
/// let mut scheduler = FrameScheduler::new(Animator::default(), INPUT.reader(), strip);
///
/// loop {
///     let now = get_current_time_ms();
///     let result = scheduler.tick(Instant::from_millis(now));
///
///     // Platform-specific sleep
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct FrameScheduler<I: InputSource, S: PixelSink> {
    animator: Animator,
    input: I,
    sink: S,
    next_frame: Instant,
    frame_duration: Duration,
}

impl<I: InputSource, S: PixelSink> FrameScheduler<I, S> {
    /// Create a new frame scheduler.
    ///
    /// Uses `DEFAULT_FRAME_DURATION` (60 FPS) for frame timing.
    pub fn new(animator: Animator, input: I, sink: S) -> Self {
        Self::with_frame_duration(animator, input, sink, DEFAULT_FRAME_DURATION)
    }

    /// Create a new frame scheduler with custom frame duration.
    pub fn with_frame_duration(
        animator: Animator,
        input: I,
        sink: S,
        frame_duration: Duration,
    ) -> Self {
        Self {
            animator,
            input,
            sink,
            next_frame: Instant::from_millis(0),
            frame_duration,
        }
    }

    /// Process one frame and return timing information.
    ///
    /// This method:
    /// 1. Applies drift correction if we've fallen too far behind
    /// 2. Advances the animator with the current input
    /// 3. Returns the deadline for the next frame
    ///
    /// The caller is responsible for waiting until `next_deadline` before
    /// calling `tick` again.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        // Skip the backlog after long stalls instead of bursting frames
        let max_drift = self.frame_duration.as_millis() * 2;
        if now.as_millis() > self.next_frame.as_millis() + max_drift {
            self.next_frame = now;
        }

        let input = self.input.snapshot();
        self.animator.next_frame(&input, &mut self.sink);

        self.next_frame += self.frame_duration;

        let sleep_duration = if self.next_frame.as_millis() > now.as_millis() {
            Duration::from_millis(self.next_frame.as_millis() - now.as_millis())
        } else {
            Duration::from_millis(0)
        };

        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
        }
    }

    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    pub fn animator_mut(&mut self) -> &mut Animator {
        &mut self.animator
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}
