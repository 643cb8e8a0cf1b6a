//! Named colors used by the animation presets

use super::{Rgb, rgb_from_u32};

pub const WHITE: Rgb = rgb_from_u32(0xFF_FF_FF);
pub const BLACK: Rgb = rgb_from_u32(0x00_00_00);
pub const BLUE: Rgb = rgb_from_u32(0x00_00_FF);
pub const PURPLE: Rgb = rgb_from_u32(0x80_00_FF);
pub const LIGHT_BLUE: Rgb = rgb_from_u32(0x40_C0_FF);

/// "No color" for the unused slot of single color animations
pub const OFF: Rgb = BLACK;
