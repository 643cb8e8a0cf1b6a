mod tests {
    use padlight::color::{BLACK, BLUE, LIGHT_BLUE, PURPLE, Rgb, WHITE};
    use padlight::math8::{brightness_from_position, scale_brightness};

    const ORANGE: Rgb = Rgb {
        r: 255,
        g: 128,
        b: 7,
    };

    #[test]
    fn test_scale_brightness_bounds() {
        for color in [WHITE, BLUE, PURPLE, LIGHT_BLUE, ORANGE, BLACK] {
            assert_eq!(scale_brightness(color, 255), color);
            assert_eq!(scale_brightness(color, 0), BLACK);
        }
    }

    #[test]
    fn test_scale_brightness_truncates() {
        assert_eq!(scale_brightness(ORANGE, 128), Rgb::new(128, 64, 3));
        assert_eq!(scale_brightness(WHITE, 1), Rgb::new(1, 1, 1));
        assert_eq!(scale_brightness(Rgb::new(254, 1, 100), 254), Rgb::new(253, 0, 99));
    }

    #[test]
    fn test_brightness_from_position_ramp() {
        assert_eq!(brightness_from_position(WHITE, 0, 12), WHITE);
        assert_eq!(brightness_from_position(WHITE, 6, 12), Rgb::new(127, 127, 127));
        assert_eq!(brightness_from_position(WHITE, 12, 12), BLACK);

        assert_eq!(brightness_from_position(WHITE, 1, 20), Rgb::new(242, 242, 242));
        assert_eq!(brightness_from_position(BLUE, 5, 20), Rgb::new(0, 0, 191));
        assert_eq!(brightness_from_position(BLUE, 19, 20), Rgb::new(0, 0, 12));
    }

    #[test]
    fn test_brightness_from_position_is_decreasing_within_cycle() {
        let mut last = 255;
        for position in 0..=20 {
            let level = brightness_from_position(WHITE, position, 20).r;
            assert!(level <= last, "position {position}");
            last = level;
        }
    }

    #[test]
    fn test_brightness_from_position_wrapped_phase() {
        // Phases "behind" zero wrap to 255, 254, ... and pass through a
        // 16-bit level before being truncated back to 8 bits.
        assert_eq!(brightness_from_position(WHITE, 255, 20), Rgb::new(205, 205, 205));
        assert_eq!(brightness_from_position(WHITE, 254, 20), Rgb::new(218, 218, 218));
        assert_eq!(brightness_from_position(WHITE, 253, 20), Rgb::new(231, 231, 231));
        assert_eq!(brightness_from_position(BLACK, 255, 20), BLACK);
    }

    #[test]
    #[should_panic(expected = "cycle length must be non-zero")]
    fn test_brightness_from_position_zero_cycle() {
        let _ = brightness_from_position(WHITE, 0, 0);
    }
}
