//! Input triggers, checked in fixed priority order
//!
//! [`TRIGGERS`] is a decision list: the first entry whose predicate holds
//! starts its preset and the rest are not evaluated.

use super::preset::{BLIZZARD, GRAB_PULSE, ICE_PULSE, JUMP_PULSE, Preset};
use crate::controller::{ControllerSnapshot, Direction, InputThresholds};

/// Decides whether a trigger fires for the current input
///
/// `direction` is the stick direction already derived from the snapshot.
pub type TriggerPredicate = fn(&ControllerSnapshot, Direction, &InputThresholds) -> bool;

/// One entry of the trigger list
#[derive(Clone, Copy)]
pub struct Trigger {
    pub name: &'static str,
    pub predicate: TriggerPredicate,
    pub preset: Preset,
}

impl Trigger {
    pub fn matches(
        &self,
        input: &ControllerSnapshot,
        direction: Direction,
        thresholds: &InputThresholds,
    ) -> bool {
        (self.predicate)(input, direction, thresholds)
    }
}

impl core::fmt::Debug for Trigger {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Trigger")
            .field("name", &self.name)
            .field("preset", &self.preset)
            .finish_non_exhaustive()
    }
}

/// Built-in triggers, highest priority first
pub static TRIGGERS: [Trigger; 4] = [
    Trigger {
        name: "down_special",
        predicate: down_special,
        preset: BLIZZARD,
    },
    Trigger {
        name: "jump",
        predicate: jump,
        preset: JUMP_PULSE,
    },
    Trigger {
        name: "grab",
        predicate: grab,
        preset: GRAB_PULSE,
    },
    Trigger {
        name: "neutral_special",
        predicate: neutral_special,
        preset: ICE_PULSE,
    },
];

/// Find the first trigger in [`TRIGGERS`] satisfied by `input`
pub fn select_trigger(
    input: &ControllerSnapshot,
    thresholds: &InputThresholds,
) -> Option<&'static Trigger> {
    let direction = input.direction(thresholds);
    TRIGGERS
        .iter()
        .find(|trigger| trigger.matches(input, direction, thresholds))
}

fn down_special(input: &ControllerSnapshot, direction: Direction, _: &InputThresholds) -> bool {
    input.special_held() && direction == Direction::Down
}

fn jump(input: &ControllerSnapshot, _: Direction, _: &InputThresholds) -> bool {
    input.jump_held()
}

/// Z, or a shield grab (attack while either shoulder is held)
fn grab(input: &ControllerSnapshot, _: Direction, thresholds: &InputThresholds) -> bool {
    input.grab_held() || (input.attack_held() && input.shoulder_held(thresholds))
}

fn neutral_special(input: &ControllerSnapshot, direction: Direction, _: &InputThresholds) -> bool {
    input.special_held() && direction == Direction::None
}
