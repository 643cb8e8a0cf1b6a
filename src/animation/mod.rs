//! Animation state with compile-time known animation kinds
//!
//! The whole animation lives in one [`AnimationState`] value. New animations
//! are started from a [`Preset`]; the only other way the kind changes is the
//! timeout reverting to [`AnimationKind::Blank`].

mod preset;
mod render;
mod trigger;

pub use preset::{BLIZZARD, CHASE_LEFT, GRAB_PULSE, ICE_PULSE, JUMP_PULSE, Preset, cycle_length};
pub use render::{BLIZZARD_PIXELS, render};
pub use trigger::{TRIGGERS, Trigger, TriggerPredicate, select_trigger};

use crate::color::{OFF, Rgb, WHITE};
use crate::controller::Direction;

const KIND_NAME_IDLE: &str = "idle";
const KIND_NAME_BLANK: &str = "blank";
const KIND_NAME_PULSE: &str = "pulse";
const KIND_NAME_BLIZZARD: &str = "blizzard";
const KIND_NAME_SIDE_B: &str = "side_b";
const KIND_NAME_WOBBLE: &str = "wobble";

/// Known animation kinds
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AnimationKind {
    /// Resting state before anything ran. Renders nothing yet.
    Idle,
    /// No active animation, strip off
    Blank,
    /// Single color brightness pulse, optionally chasing along the strip
    Pulse,
    /// Two color alternating five pixel flicker
    Blizzard,
    /// Reserved, renders nothing
    SideB,
    /// Reserved, renders nothing
    Wobble,
}

impl AnimationKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => KIND_NAME_IDLE,
            Self::Blank => KIND_NAME_BLANK,
            Self::Pulse => KIND_NAME_PULSE,
            Self::Blizzard => KIND_NAME_BLIZZARD,
            Self::SideB => KIND_NAME_SIDE_B,
            Self::Wobble => KIND_NAME_WOBBLE,
        }
    }

    /// `true` for the kinds that mean "no animation running"
    pub const fn is_resting(self) -> bool {
        matches!(self, Self::Idle | Self::Blank)
    }
}

/// Mutable state of the running animation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationState {
    kind: AnimationKind,
    primary_color: Rgb,
    secondary_color: Rgb,
    direction: Direction,
    /// Frames since the current kind was entered
    elapsed_frames: u32,
    timeout_frames: u32,
    interruptible: bool,
    /// Frames per brightness pulse, zero until an animation sets it
    cycle_length: u8,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationState {
    /// Fresh idle state
    pub const fn new() -> Self {
        Self {
            kind: AnimationKind::Idle,
            primary_color: WHITE,
            secondary_color: OFF,
            direction: Direction::None,
            elapsed_frames: 0,
            timeout_frames: 0,
            interruptible: true,
            cycle_length: 0,
        }
    }

    pub const fn kind(&self) -> AnimationKind {
        self.kind
    }

    pub const fn primary_color(&self) -> Rgb {
        self.primary_color
    }

    pub const fn secondary_color(&self) -> Rgb {
        self.secondary_color
    }

    pub const fn direction(&self) -> Direction {
        self.direction
    }

    pub const fn elapsed_frames(&self) -> u32 {
        self.elapsed_frames
    }

    pub const fn timeout_frames(&self) -> u32 {
        self.timeout_frames
    }

    pub const fn is_interruptible(&self) -> bool {
        self.interruptible
    }

    pub const fn cycle_length(&self) -> u8 {
        self.cycle_length
    }

    /// Replace the current animation with `preset`
    ///
    /// Overwrites every animation field and restarts the frame counter.
    pub const fn start(&mut self, preset: &Preset) {
        self.kind = preset.kind;
        self.primary_color = preset.primary;
        self.secondary_color = preset.secondary;
        self.direction = preset.direction;
        self.elapsed_frames = 0;
        self.timeout_frames = preset.timeout_frames;
        self.interruptible = preset.interruptible;
        self.cycle_length = preset.cycle_length.get();
    }

    /// Count one frame and expire the animation if its budget is spent
    ///
    /// Returns `true` when this frame moved the state to `Blank`.
    pub(crate) const fn advance(&mut self) -> bool {
        self.elapsed_frames = self.elapsed_frames.saturating_add(1);
        if self.elapsed_frames < self.timeout_frames {
            return false;
        }

        self.direction = Direction::None;
        self.interruptible = true;
        if matches!(self.kind, AnimationKind::Blank) {
            return false;
        }
        self.kind = AnimationKind::Blank;
        self.elapsed_frames = 0;
        true
    }
}
