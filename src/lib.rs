#![no_std]

pub mod animation;
pub mod animator;
pub mod color;
pub mod controller;
pub mod frame_scheduler;
pub mod input;
pub mod math8;
pub mod strip;

pub use animation::{AnimationKind, AnimationState, Preset};
pub use animator::{Animator, AnimatorConfig};
pub use controller::{Button, ControllerSnapshot, Direction, InputThresholds};
pub use frame_scheduler::{FrameScheduler, InputSource};
pub use input::{InputLatch, InputPublisher, InputReader};
pub use strip::StripWriter;

pub use color::Rgb;
pub use math8::{brightness_from_position, scale_brightness};
pub use embassy_time::{Duration, Instant};

/// Abstract LED strip output
///
/// Implement this trait to support different hardware platforms.
/// The animator is generic over this trait.
pub trait PixelSink {
    /// Append one pixel to the pending frame, in strip order
    fn emit_pixel(&mut self, color: Rgb);

    /// Display the pixels emitted since the last flush
    fn flush(&mut self);

    /// Set every pixel to one color and display it immediately
    fn fill_all(&mut self, color: Rgb);
}
