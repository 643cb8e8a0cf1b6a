//! Turns the animation state into strip commands

use super::{AnimationKind, AnimationState};
use crate::PixelSink;
use crate::color::{OFF, Rgb};
use crate::controller::Direction;
use crate::math8::brightness_from_position;

/// Pixels written by one blizzard frame
pub const BLIZZARD_PIXELS: u8 = 5;

/// Render the current frame of `state` into `sink`
///
/// `pixel_count` is the strip length used by the chasing pulse.
pub fn render<S: PixelSink + ?Sized>(state: &AnimationState, pixel_count: u8, sink: &mut S) {
    match state.kind() {
        AnimationKind::Blank => sink.fill_all(OFF),
        // Placeholder for a resting animation
        AnimationKind::Idle => {}
        AnimationKind::SideB => {}
        AnimationKind::Wobble => {}
        AnimationKind::Pulse => render_pulse(state, pixel_count, sink),
        AnimationKind::Blizzard => render_blizzard(state, sink),
    }
}

#[allow(clippy::cast_possible_truncation)]
fn render_pulse<S: PixelSink + ?Sized>(state: &AnimationState, pixel_count: u8, sink: &mut S) {
    let cycle = state.cycle_length();
    if cycle == 0 {
        return;
    }
    // Below `cycle`, so it fits
    let position = (state.elapsed_frames() % u32::from(cycle)) as u8;

    match state.direction() {
        Direction::None => {
            sink.fill_all(brightness_from_position(state.primary_color(), position, cycle));
        }
        Direction::Left => {
            for i in 0..pixel_count {
                let phase = position.wrapping_sub(i);
                sink.emit_pixel(brightness_from_position(state.primary_color(), phase, cycle));
            }
            sink.flush();
        }
        Direction::Up | Direction::Down | Direction::Right => {}
    }
}

/// Two half cycles: `[a, b, a, b, a]` then `[b, a, b, a, b]`
#[allow(clippy::cast_possible_truncation)]
fn render_blizzard<S: PixelSink + ?Sized>(state: &AnimationState, sink: &mut S) {
    let cycle = state.cycle_length();
    if cycle == 0 {
        return;
    }
    let half = u32::from(cycle);
    let position = state.elapsed_frames() % (half * 2);

    let (outer, inner, position) = if position < half {
        (state.primary_color(), state.secondary_color(), position)
    } else {
        (state.secondary_color(), state.primary_color(), position - half)
    };
    let position = position as u8;

    let outer = brightness_from_position(outer, position, cycle);
    let inner = brightness_from_position(inner, position, cycle);
    for i in 0..BLIZZARD_PIXELS {
        sink.emit_pixel(alternate(i, outer, inner));
    }
    sink.flush();
}

const fn alternate(index: u8, even: Rgb, odd: Rgb) -> Rgb {
    if index % 2 == 0 { even } else { odd }
}
