mod tests {
    use padlight::color::{BLUE, OFF, WHITE};
    use padlight::{PixelSink, Rgb, StripWriter};
    use smart_leds::SmartLedsWrite;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct WriteFailed;

    #[derive(Default)]
    struct MockStrip {
        frames: Vec<Vec<Rgb>>,
        fail: bool,
    }

    impl SmartLedsWrite for MockStrip {
        type Error = WriteFailed;
        type Color = Rgb;

        fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
        where
            T: IntoIterator<Item = I>,
            I: Into<Self::Color>,
        {
            if self.fail {
                return Err(WriteFailed);
            }
            self.frames.push(iterator.into_iter().map(Into::into).collect());
            Ok(())
        }
    }

    #[test]
    fn test_flush_writes_emitted_pixels() {
        let mut strip = StripWriter::<_, 5>::new(MockStrip::default());
        strip.emit_pixel(WHITE);
        strip.emit_pixel(BLUE);
        assert_eq!(strip.pending_len(), 2);
        strip.flush();
        assert_eq!(strip.pending_len(), 0);
        assert_eq!(strip.take_error(), None);

        let mock = strip.into_inner();
        assert_eq!(mock.frames, vec![vec![WHITE, BLUE]]);
    }

    #[test]
    fn test_pixels_past_capacity_are_dropped() {
        let mut strip = StripWriter::<_, 3>::new(MockStrip::default());
        for _ in 0..5 {
            strip.emit_pixel(WHITE);
        }
        strip.flush();
        assert_eq!(strip.into_inner().frames, vec![vec![WHITE; 3]]);
    }

    #[test]
    fn test_fill_all_covers_strip() {
        let mut strip = StripWriter::<_, 4>::new(MockStrip::default());
        strip.emit_pixel(BLUE);
        strip.fill_all(OFF);
        assert_eq!(strip.pending_len(), 0);
        assert_eq!(strip.into_inner().frames, vec![vec![OFF; 4]]);
    }

    #[test]
    fn test_write_error_is_kept() {
        let mut strip = StripWriter::<_, 4>::new(MockStrip {
            fail: true,
            ..MockStrip::default()
        });
        strip.fill_all(WHITE);
        assert_eq!(strip.take_error(), Some(WriteFailed));
        assert_eq!(strip.take_error(), None);
    }
}
