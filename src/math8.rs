//! 8-bit brightness waveform math
//!
//! Integer-only helpers that turn a frame counter into a pulsing color.
//! Everything here is `const` so presets and lookup values can be computed
//! at compile time.

use crate::color::Rgb;

/// Scale a color by a brightness level (0-255 = 0.0-1.0)
///
/// Each channel is multiplied by `level` and divided by 255 with truncation,
/// so `255` returns the color unchanged and `0` returns black.
#[inline]
pub const fn scale_brightness(color: Rgb, level: u8) -> Rgb {
    scale_wide(color, level as u16)
}

/// Brightness-scale a color by its phase within a pulse cycle
///
/// The level is `((cycle_length - position) % (cycle_length + 1)) * 255 / cycle_length`:
/// full brightness at `position == 0`, fading to black at `position == cycle_length`.
///
/// `position` is a wrapping 8-bit phase. Positions past `cycle_length` (such as a
/// chase pixel lagging behind phase zero) go through signed arithmetic and are
/// reinterpreted as a 16-bit level before the per-channel scale, then truncated
/// back to 8 bits. This keeps the dim flicker of trailing chase pixels identical
/// to the accessory firmware.
///
/// # Panics
///
/// Panics if `cycle_length` is zero.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn brightness_from_position(color: Rgb, position: u8, cycle_length: u8) -> Rgb {
    assert!(cycle_length != 0, "cycle length must be non-zero");

    let max = cycle_length as i32;
    let level = ((max - position as i32) % (max + 1)) * 255 / max;
    scale_wide(color, level as u16)
}

#[inline]
const fn scale_wide(color: Rgb, level: u16) -> Rgb {
    Rgb {
        r: scale_channel(color.r, level),
        g: scale_channel(color.g, level),
        b: scale_channel(color.b, level),
    }
}

#[inline]
#[allow(clippy::cast_possible_truncation)]
const fn scale_channel(value: u8, level: u16) -> u8 {
    ((value as u32 * level as u32) / 255) as u8
}
