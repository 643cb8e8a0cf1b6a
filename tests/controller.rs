mod tests {
    use padlight::controller::{
        Button, ControllerSnapshot, Direction, InputThresholds, STICK_CENTER,
    };

    fn stick(x: u8, y: u8) -> ControllerSnapshot {
        ControllerSnapshot::NEUTRAL.with_stick(x, y)
    }

    #[test]
    fn test_neutral_snapshot() {
        let input = ControllerSnapshot::default();
        let thresholds = InputThresholds::default();
        assert_eq!(input, ControllerSnapshot::NEUTRAL);
        assert_eq!(input.stick_x, STICK_CENTER);
        assert_eq!(input.direction(&thresholds), Direction::None);
        assert!(!input.special_held());
        assert!(!input.jump_held());
        assert!(!input.grab_held());
        assert!(!input.attack_held());
        assert!(!input.shoulder_held(&thresholds));
    }

    #[test]
    fn test_button_roles() {
        let input = ControllerSnapshot::NEUTRAL.with_button(Button::Y);
        assert!(input.jump_held());
        assert!(input.is_held(Button::Y));
        assert!(!input.is_held(Button::X));

        assert!(ControllerSnapshot::NEUTRAL.with_button(Button::X).jump_held());
        assert!(ControllerSnapshot::NEUTRAL.with_button(Button::B).special_held());
        assert!(ControllerSnapshot::NEUTRAL.with_button(Button::Z).grab_held());
        assert!(ControllerSnapshot::NEUTRAL.with_button(Button::A).attack_held());
        assert!(!ControllerSnapshot::NEUTRAL.with_button(Button::Start).jump_held());
    }

    #[test]
    fn test_set_buttons() {
        let mut input = ControllerSnapshot::NEUTRAL.with_button(Button::A);
        input.set_buttons(Button::B as u16 | Button::Z as u16);
        assert!(!input.attack_held());
        assert!(input.special_held());
        assert!(input.grab_held());
    }

    #[test]
    fn test_direction_deadzone() {
        let thresholds = InputThresholds::default();
        assert_eq!(stick(128, 175).direction(&thresholds), Direction::None);
        assert_eq!(stick(128, 176).direction(&thresholds), Direction::Up);
        assert_eq!(stick(128, 81).direction(&thresholds), Direction::None);
        assert_eq!(stick(128, 80).direction(&thresholds), Direction::Down);
        assert_eq!(stick(80, 128).direction(&thresholds), Direction::Left);
        assert_eq!(stick(176, 128).direction(&thresholds), Direction::Right);
    }

    #[test]
    fn test_direction_priority() {
        let thresholds = InputThresholds::default();
        // up-left, up-right
        assert_eq!(stick(0, 255).direction(&thresholds), Direction::Up);
        assert_eq!(stick(255, 255).direction(&thresholds), Direction::Up);
        // down-left, down-right
        assert_eq!(stick(0, 0).direction(&thresholds), Direction::Down);
        assert_eq!(stick(255, 0).direction(&thresholds), Direction::Down);
    }

    #[test]
    fn test_shoulder_threshold() {
        let thresholds = InputThresholds {
            stick_deadzone: 48,
            trigger_press: 100,
        };
        let input = ControllerSnapshot::NEUTRAL.with_triggers(99, 0);
        assert!(!input.trigger_l_held(&thresholds));
        assert!(!input.shoulder_held(&thresholds));

        let input = ControllerSnapshot::NEUTRAL.with_triggers(0, 100);
        assert!(input.trigger_r_held(&thresholds));
        assert!(input.shoulder_held(&thresholds));
    }
}
