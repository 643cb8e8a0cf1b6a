mod common;

mod tests {
    use padlight::color::{OFF, WHITE};
    use padlight::frame_scheduler::{DEFAULT_FRAME_DURATION, DEFAULT_FPS};
    use padlight::{
        AnimationKind, Animator, Button, ControllerSnapshot, Duration, FrameScheduler, InputLatch,
        Instant,
    };

    use crate::common::{Command, Recorder};

    #[test]
    fn test_default_frame_rate() {
        assert_eq!(DEFAULT_FPS, 60);
        assert_eq!(DEFAULT_FRAME_DURATION, Duration::from_millis(16));
    }

    #[test]
    fn test_tick_paces_frames() {
        let mut scheduler =
            FrameScheduler::new(Animator::default(), ControllerSnapshot::NEUTRAL, Recorder::new());

        let result = scheduler.tick(Instant::from_millis(0));
        assert_eq!(result.next_deadline, Instant::from_millis(16));
        assert_eq!(result.sleep_duration, Duration::from_millis(16));

        let result = scheduler.tick(Instant::from_millis(20));
        assert_eq!(result.next_deadline, Instant::from_millis(32));
        assert_eq!(result.sleep_duration, Duration::from_millis(12));

        assert_eq!(scheduler.sink().commands, vec![Command::Fill(OFF); 2]);
    }

    #[test]
    fn test_tick_resets_after_stall() {
        let mut scheduler =
            FrameScheduler::new(Animator::default(), ControllerSnapshot::NEUTRAL, Recorder::new());
        scheduler.tick(Instant::from_millis(0));

        let result = scheduler.tick(Instant::from_millis(1_000));
        assert_eq!(result.next_deadline, Instant::from_millis(1_016));
        assert_eq!(result.sleep_duration, Duration::from_millis(16));
    }

    #[test]
    fn test_tick_reads_latch() {
        let latch = InputLatch::new();
        let mut scheduler = FrameScheduler::with_frame_duration(
            Animator::default(),
            latch.reader(),
            Recorder::new(),
            Duration::from_millis(10),
        );

        scheduler.tick(Instant::from_millis(0));
        assert_eq!(scheduler.animator().state().kind(), AnimationKind::Blank);

        latch.publisher().publish(ControllerSnapshot::NEUTRAL.with_button(Button::Y));
        scheduler.tick(Instant::from_millis(10));
        assert_eq!(scheduler.animator().state().kind(), AnimationKind::Pulse);
        assert_eq!(scheduler.sink_mut().take(), vec![Command::Fill(OFF), Command::Fill(WHITE)]);
    }
}
