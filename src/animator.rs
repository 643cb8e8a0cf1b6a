//! Per-frame animation driver

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::PixelSink;
use crate::animation::{AnimationState, Preset, render, select_trigger};
use crate::controller::{ControllerSnapshot, InputThresholds};

/// Pixels on the accessory strip
const DEFAULT_PIXEL_COUNT: u8 = 5;

/// Configuration for the animator
#[derive(Debug, Clone)]
pub struct AnimatorConfig {
    /// Strip length, used by animations that address every pixel
    pub pixel_count: u8,
    pub thresholds: InputThresholds,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            pixel_count: DEFAULT_PIXEL_COUNT,
            thresholds: InputThresholds::default(),
        }
    }
}

/// Animator - owns the animation state and advances it once per frame
#[derive(Debug, Clone)]
pub struct Animator {
    config: AnimatorConfig,
    state: AnimationState,
}

impl Default for Animator {
    fn default() -> Self {
        Self::new(AnimatorConfig::default())
    }
}

impl Animator {
    /// Create an idle animator
    pub const fn new(config: AnimatorConfig) -> Self {
        Self {
            config,
            state: AnimationState::new(),
        }
    }

    pub const fn state(&self) -> &AnimationState {
        &self.state
    }

    pub const fn config(&self) -> &AnimatorConfig {
        &self.config
    }

    /// Start `preset` right away, regardless of the current animation
    pub fn start(&mut self, preset: &Preset) {
        #[cfg(feature = "esp32-log")]
        println!("[Animator] start {}", preset.kind.as_str());
        self.state.start(preset);
    }

    /// Process one frame
    ///
    /// Counts the frame, expires a spent animation, lets `input` start a new
    /// one if the current animation allows it, then renders into `sink`.
    pub fn next_frame<S: PixelSink + ?Sized>(&mut self, input: &ControllerSnapshot, sink: &mut S) {
        if self.state.advance() {
            #[cfg(feature = "esp32-log")]
            println!("[Animator] timeout");
        }

        if self.state.is_interruptible() {
            if let Some(trigger) = select_trigger(input, &self.config.thresholds) {
                #[cfg(feature = "esp32-log")]
                println!("[Animator] trigger {}", trigger.name);
                self.start(&trigger.preset);
            }
        }

        render(&self.state, self.config.pixel_count, sink);
    }
}
