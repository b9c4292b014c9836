mod tests {
    use myrtio_light_scanner::color::{BLACK, Rgb};
    use myrtio_light_scanner::{
        ConfigError, Direction, Duration, Instant, Phase, Scanner, ScannerConfig,
    };

    type TestScanner = Scanner<'static, 32, 4>;

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };

    fn config() -> ScannerConfig {
        ScannerConfig::new(24, RED)
            .with_speed(10.0)
            .with_glow_radius(0)
    }

    #[test]
    fn test_new_validates_led_count() {
        let empty = ScannerConfig::new(0, RED);
        assert_eq!(TestScanner::new(empty).err(), Some(ConfigError::EmptyStrip));

        let long = ScannerConfig::new(40, RED);
        assert_eq!(
            TestScanner::new(long).err(),
            Some(ConfigError::TooManyLeds {
                requested: 40,
                capacity: 32
            })
        );

        assert!(TestScanner::new(ScannerConfig::new(32, RED)).is_ok());
    }

    #[test]
    fn test_new_rests_at_midpoint() {
        let mut scanner = TestScanner::new(config()).unwrap();
        assert_eq!(scanner.state().phase, Phase::Stopped);
        assert_eq!(scanner.state().position, 12);

        let frame = scanner.render();
        assert_eq!(frame.len(), 24);
        assert_eq!(frame[12], RED);
        assert_eq!(frame[11], BLACK);
    }

    #[test]
    fn test_start_advance_render() {
        let mut scanner = TestScanner::new(config()).unwrap();
        scanner.start();
        scanner.advance(100.0);
        let frame = scanner.render();
        assert_eq!(frame[13], RED);
        assert_eq!(frame[12], BLACK);
        assert_eq!(scanner.leds()[13], RED);
    }

    #[test]
    fn test_stop_settles() {
        let mut scanner = TestScanner::new(config()).unwrap();
        scanner.start();
        scanner.advance(300.0);
        scanner.stop();
        assert_eq!(scanner.state().phase, Phase::Stopping);
        assert_eq!(scanner.state().edges_remaining, 2);

        // 15 -> 23 -> 0 -> 12
        scanner.advance(800.0 + 2300.0 + 1200.0);
        assert_eq!(scanner.state().phase, Phase::Stopped);
        assert_eq!(scanner.state().position, 12);
    }

    #[test]
    fn test_live_setters() {
        let mut scanner = TestScanner::new(config()).unwrap();
        scanner.set_speed(100.0);
        scanner.set_end_pause(Duration::from_millis(50));
        scanner.set_mid_pause(Duration::from_millis(20));
        scanner.set_color(BLUE);
        scanner.set_glow_radius(3);

        let config = scanner.config();
        assert_eq!(config.speed, 100.0);
        assert_eq!(config.end_pause, Duration::from_millis(50));
        assert_eq!(config.mid_pause, Duration::from_millis(20));
        assert_eq!(config.color, BLUE);
        assert_eq!(config.glow_radius, 3);

        scanner.start();
        scanner.advance(10.0);
        assert_eq!(scanner.state().position, 13);
        assert_eq!(scanner.render()[13], BLUE);
    }

    #[test]
    fn test_set_led_count_resets() {
        let mut scanner = TestScanner::new(config()).unwrap();
        scanner.start();
        scanner.advance(500.0);

        assert!(scanner.set_led_count(10).is_ok());
        assert_eq!(scanner.led_count(), 10);
        assert_eq!(scanner.state().position, 5);
        assert_eq!(scanner.state().phase, Phase::Stopped);
        assert_eq!(scanner.render().len(), 10);

        assert_eq!(scanner.set_led_count(0), Err(ConfigError::EmptyStrip));
        assert!(scanner.set_led_count(33).is_err());
        assert_eq!(scanner.led_count(), 10);
    }

    #[test]
    fn test_reset() {
        let mut scanner = TestScanner::new(config()).unwrap();
        scanner.start();
        scanner.advance(250.0);
        scanner.reset();
        assert_eq!(scanner.state().position, 12);
        assert_eq!(scanner.state().direction, Direction::Forward);
        assert_eq!(scanner.state().phase, Phase::Stopped);
    }

    #[test]
    fn test_tick_uses_elapsed_time() {
        let mut scanner = TestScanner::new(config()).unwrap();
        scanner.start();

        scanner.tick(Instant::from_millis(1_000));
        assert_eq!(scanner.state().position, 12);

        scanner.tick(Instant::from_millis(1_100));
        assert_eq!(scanner.state().position, 13);

        scanner.tick(Instant::from_millis(1_150));
        scanner.tick(Instant::from_millis(1_200));
        assert_eq!(scanner.state().position, 14);
    }

    #[test]
    fn test_tick_ignores_clock_going_backwards() {
        let mut scanner = TestScanner::new(config()).unwrap();
        scanner.start();
        scanner.tick(Instant::from_millis(500));
        scanner.tick(Instant::from_millis(100));
        assert_eq!(scanner.state().position, 12);
        scanner.tick(Instant::from_millis(200));
        assert_eq!(scanner.state().position, 13);
    }
}
