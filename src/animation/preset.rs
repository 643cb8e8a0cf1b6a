//! Built-in animation definitions

use core::num::NonZeroU8;

use super::AnimationKind;
use crate::color::{BLUE, LIGHT_BLUE, OFF, PURPLE, Rgb, WHITE};
use crate::controller::Direction;

const PULSE_TIMEOUT_FRAMES: u32 = 20;
const PULSE_CYCLE_FRAMES: NonZeroU8 = cycle_length(20);

const BLIZZARD_TIMEOUT_FRAMES: u32 = 90;
const BLIZZARD_CYCLE_FRAMES: NonZeroU8 = cycle_length(12);

const CHASE_TIMEOUT_FRAMES: u32 = 60;

/// Everything needed to start an animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub kind: AnimationKind,
    pub primary: Rgb,
    pub secondary: Rgb,
    pub direction: Direction,
    /// Whether a trigger may replace this animation before it times out
    pub interruptible: bool,
    /// Frame budget before the animation reverts to blank
    pub timeout_frames: u32,
    /// Frames per brightness pulse
    pub cycle_length: NonZeroU8,
}

/// Non-zero cycle length for use in `const` presets
///
/// Fails const evaluation when `frames` is zero.
pub const fn cycle_length(frames: u8) -> NonZeroU8 {
    match NonZeroU8::new(frames) {
        Some(frames) => frames,
        None => panic!("cycle length must be non-zero"),
    }
}

/// Down special: white and blue flicker that can't be interrupted
pub const BLIZZARD: Preset = Preset {
    kind: AnimationKind::Blizzard,
    primary: WHITE,
    secondary: BLUE,
    direction: Direction::None,
    interruptible: false,
    timeout_frames: BLIZZARD_TIMEOUT_FRAMES,
    cycle_length: BLIZZARD_CYCLE_FRAMES,
};

pub const JUMP_PULSE: Preset = single_pulse(WHITE);

pub const GRAB_PULSE: Preset = single_pulse(PURPLE);

/// Neutral special
pub const ICE_PULSE: Preset = single_pulse(LIGHT_BLUE);

/// White pulse travelling along the strip, one phase step per pixel
pub const CHASE_LEFT: Preset = Preset {
    direction: Direction::Left,
    timeout_frames: CHASE_TIMEOUT_FRAMES,
    ..single_pulse(WHITE)
};

const fn single_pulse(color: Rgb) -> Preset {
    Preset {
        kind: AnimationKind::Pulse,
        primary: color,
        secondary: OFF,
        direction: Direction::None,
        interruptible: true,
        timeout_frames: PULSE_TIMEOUT_FRAMES,
        cycle_length: PULSE_CYCLE_FRAMES,
    }
}
