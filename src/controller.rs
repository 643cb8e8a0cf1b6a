//! Controller input snapshot
//!
//! A decoded view of one controller poll: digital buttons, the main analog
//! stick and both analog shoulder triggers. The animation triggers only ever
//! look at the role accessors (`special_held`, `jump_held`, ...), so the
//! physical layout lives in this module alone.

/// Stick axis value at rest
pub const STICK_CENTER: u8 = 128;

const DEFAULT_STICK_DEADZONE: u8 = 48;
const DEFAULT_TRIGGER_PRESS: u8 = 64;

/// Digital buttons, as bits of [`ControllerSnapshot`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u16)]
pub enum Button {
    A = 1 << 0,
    B = 1 << 1,
    X = 1 << 2,
    Y = 1 << 3,
    Z = 1 << 4,
    Start = 1 << 5,
}

/// Analog stick tilt, reduced to a single direction
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    #[default]
    None,
    Up,
    Down,
    Left,
    Right,
}

/// Thresholds used to turn analog values into held/tilted predicates
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InputThresholds {
    /// Distance from [`STICK_CENTER`] at which the stick counts as tilted
    pub stick_deadzone: u8,
    /// Analog shoulder value at which a trigger counts as held
    pub trigger_press: u8,
}

impl Default for InputThresholds {
    fn default() -> Self {
        Self {
            stick_deadzone: DEFAULT_STICK_DEADZONE,
            trigger_press: DEFAULT_TRIGGER_PRESS,
        }
    }
}

/// One controller poll
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControllerSnapshot {
    buttons: u16,
    /// Stick X axis, 0 = full left, 255 = full right
    pub stick_x: u8,
    /// Stick Y axis, 0 = full down, 255 = full up
    pub stick_y: u8,
    /// Left analog shoulder, 0 = released
    pub trigger_l: u8,
    /// Right analog shoulder, 0 = released
    pub trigger_r: u8,
}

impl Default for ControllerSnapshot {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl ControllerSnapshot {
    /// No buttons held, stick centered, triggers released
    pub const NEUTRAL: Self = Self {
        buttons: 0,
        stick_x: STICK_CENTER,
        stick_y: STICK_CENTER,
        trigger_l: 0,
        trigger_r: 0,
    };

    /// Snapshot with the given button held in addition to the current ones
    #[must_use]
    pub const fn with_button(mut self, button: Button) -> Self {
        self.buttons |= button as u16;
        self
    }

    #[must_use]
    pub const fn with_stick(mut self, x: u8, y: u8) -> Self {
        self.stick_x = x;
        self.stick_y = y;
        self
    }

    #[must_use]
    pub const fn with_triggers(mut self, left: u8, right: u8) -> Self {
        self.trigger_l = left;
        self.trigger_r = right;
        self
    }

    /// Replace the button bits at once
    pub const fn set_buttons(&mut self, buttons: u16) {
        self.buttons = buttons;
    }

    pub const fn is_held(&self, button: Button) -> bool {
        self.buttons & (button as u16) != 0
    }

    /// Special attack button
    pub const fn special_held(&self) -> bool {
        self.is_held(Button::B)
    }

    /// Either jump button
    pub const fn jump_held(&self) -> bool {
        self.is_held(Button::X) || self.is_held(Button::Y)
    }

    pub const fn grab_held(&self) -> bool {
        self.is_held(Button::Z)
    }

    pub const fn attack_held(&self) -> bool {
        self.is_held(Button::A)
    }

    pub const fn trigger_l_held(&self, thresholds: &InputThresholds) -> bool {
        self.trigger_l >= thresholds.trigger_press
    }

    pub const fn trigger_r_held(&self, thresholds: &InputThresholds) -> bool {
        self.trigger_r >= thresholds.trigger_press
    }

    /// Either analog shoulder trigger
    pub const fn shoulder_held(&self, thresholds: &InputThresholds) -> bool {
        self.trigger_l_held(thresholds) || self.trigger_r_held(thresholds)
    }

    pub const fn tilted_up(&self, thresholds: &InputThresholds) -> bool {
        self.stick_y >= STICK_CENTER.saturating_add(thresholds.stick_deadzone)
    }

    pub const fn tilted_down(&self, thresholds: &InputThresholds) -> bool {
        self.stick_y <= STICK_CENTER.saturating_sub(thresholds.stick_deadzone)
    }

    pub const fn tilted_left(&self, thresholds: &InputThresholds) -> bool {
        self.stick_x <= STICK_CENTER.saturating_sub(thresholds.stick_deadzone)
    }

    pub const fn tilted_right(&self, thresholds: &InputThresholds) -> bool {
        self.stick_x >= STICK_CENTER.saturating_add(thresholds.stick_deadzone)
    }

    /// Reduce the stick to one direction
    ///
    /// A diagonal tilt asserts two predicates; the first in
    /// up, down, left, right order wins.
    pub const fn direction(&self, thresholds: &InputThresholds) -> Direction {
        if self.tilted_up(thresholds) {
            Direction::Up
        } else if self.tilted_down(thresholds) {
            Direction::Down
        } else if self.tilted_left(thresholds) {
            Direction::Left
        } else if self.tilted_right(thresholds) {
            Direction::Right
        } else {
            Direction::None
        }
    }
}
