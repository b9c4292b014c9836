mod tests {
    use myrtio_light_scanner::color::Rgb;
    use myrtio_light_scanner::frame_scheduler::DEFAULT_FRAME_DURATION;
    use myrtio_light_scanner::{
        Duration, FrameScheduler, Instant, OutputDriver, Scanner, ScannerConfig,
    };

    const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    #[derive(Default)]
    struct RecordingDriver {
        frames: usize,
        last: Vec<Rgb>,
    }

    impl OutputDriver for RecordingDriver {
        fn write(&mut self, colors: &[Rgb]) {
            self.frames += 1;
            self.last = colors.to_vec();
        }
    }

    fn scheduler() -> FrameScheduler<'static, RecordingDriver, 16, 4> {
        let config = ScannerConfig::new(8, WHITE)
            .with_speed(100.0)
            .with_glow_radius(0);
        let mut scanner = Scanner::new(config).unwrap();
        scanner.start();
        FrameScheduler::new(scanner, RecordingDriver::default())
    }

    #[test]
    fn test_tick_writes_frame() {
        let mut scheduler = scheduler();
        let result = scheduler.tick(Instant::from_millis(0));

        assert_eq!(scheduler.output().frames, 1);
        assert_eq!(scheduler.output().last.len(), 8);
        assert_eq!(scheduler.output().last[4], WHITE);
        assert_eq!(result.next_deadline, Instant::from_millis(0) + DEFAULT_FRAME_DURATION);
        assert_eq!(result.sleep_duration, DEFAULT_FRAME_DURATION);
    }

    #[test]
    fn test_tick_sleeps_until_next_deadline() {
        let mut scheduler = scheduler();
        scheduler.tick(Instant::from_millis(0));
        let result = scheduler.tick(Instant::from_millis(5));

        assert_eq!(result.next_deadline, Instant::from_millis(0) + DEFAULT_FRAME_DURATION * 2);
        assert_eq!(
            result.sleep_duration,
            DEFAULT_FRAME_DURATION * 2 - Duration::from_millis(5)
        );
    }

    #[test]
    fn test_tick_skips_backlog() {
        let mut scheduler = scheduler();
        scheduler.tick(Instant::from_millis(0));
        let result = scheduler.tick(Instant::from_millis(1_000));

        assert_eq!(result.next_deadline, Instant::from_millis(1_000) + DEFAULT_FRAME_DURATION);
        assert_eq!(result.sleep_duration, DEFAULT_FRAME_DURATION);
    }

    #[test]
    fn test_tick_advances_scanner() {
        let mut scheduler = scheduler();
        scheduler.tick(Instant::from_millis(0));
        scheduler.tick(Instant::from_millis(20));

        assert_eq!(scheduler.scanner().state().position, 6);
        assert_eq!(scheduler.output().last[6], WHITE);
        assert_eq!(scheduler.output().frames, 2);

        scheduler.scanner_mut().stop();
        scheduler.tick(Instant::from_millis(1_000));
        assert!(!scheduler.scanner().state().is_running());
    }
}
