mod tests {
    use myrtio_light_scanner::channel::TrySendError;
    use myrtio_light_scanner::color::Rgb;
    use myrtio_light_scanner::intent_processor::apply_intent;
    use myrtio_light_scanner::{
        Duration, Instant, IntentChannel, IntentProcessor, Phase, Scanner, ScannerConfig,
        ScannerIntent, ScannerState,
    };

    const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };

    fn config() -> ScannerConfig {
        ScannerConfig::new(10, GREEN).with_speed(100.0)
    }

    #[test]
    fn test_channel_rejects_when_full() {
        let channel = IntentChannel::<2>::new();
        let sender = channel.sender();
        assert!(sender.try_send(ScannerIntent::Start).is_ok());
        assert!(sender.try_send(ScannerIntent::Stop).is_ok());
        assert_eq!(
            sender.try_send(ScannerIntent::Speed(5.0)),
            Err(TrySendError(ScannerIntent::Speed(5.0)))
        );
        assert_eq!(channel.len(), 2);

        let receiver = channel.receiver();
        assert_eq!(receiver.try_receive(), Some(ScannerIntent::Start));
        assert_eq!(receiver.try_receive(), Some(ScannerIntent::Stop));
        assert_eq!(receiver.try_receive(), None);
        assert!(channel.is_empty());
    }

    #[test]
    fn test_drain_takes_one_batch() {
        let channel = IntentChannel::<4>::new();
        let sender = channel.sender();
        let receiver = channel.receiver();
        let _ = sender.try_send(ScannerIntent::Start);
        let _ = sender.try_send(ScannerIntent::GlowRadius(3));

        let mut drained = 0;
        for intent in receiver.drain() {
            if intent == ScannerIntent::Start {
                let _ = sender.try_send(ScannerIntent::Stop);
            }
            drained += 1;
        }
        assert_eq!(drained, 2);
        assert_eq!(channel.len(), 1);
        assert_eq!(receiver.try_receive(), Some(ScannerIntent::Stop));
        assert_eq!(receiver.drain().count(), 0);
    }

    #[test]
    fn test_processor_applies_in_order() {
        let channel = IntentChannel::<8>::new();
        let sender = channel.sender();
        let mut processor = IntentProcessor::new(channel.receiver());
        let mut config = config();
        let mut state = ScannerState::new(&config);

        let _ = sender.try_send(ScannerIntent::Start);
        let _ = sender.try_send(ScannerIntent::Speed(20.0));
        let _ = sender.try_send(ScannerIntent::EndPause(Duration::from_millis(80)));
        let _ = sender.try_send(ScannerIntent::MidPause(Duration::from_millis(40)));
        let _ = sender.try_send(ScannerIntent::GlowRadius(4));
        let _ = sender.try_send(ScannerIntent::Color(Rgb { r: 1, g: 2, b: 3 }));
        let _ = sender.try_send(ScannerIntent::Stop);

        assert_eq!(processor.process_pending(&mut config, &mut state), 7);
        assert_eq!(state.phase, Phase::Stopping);
        assert_eq!(state.edges_remaining, 2);
        assert_eq!(config.speed, 20.0);
        assert_eq!(config.end_pause, Duration::from_millis(80));
        assert_eq!(config.mid_pause, Duration::from_millis(40));
        assert_eq!(config.glow_radius, 4);
        assert_eq!(config.color, Rgb { r: 1, g: 2, b: 3 });
        assert!(channel.is_empty());

        assert_eq!(processor.process_pending(&mut config, &mut state), 0);
    }

    #[test]
    fn test_start_after_stop_cancels() {
        let mut config = config();
        let mut state = ScannerState::new(&config);
        apply_intent(ScannerIntent::Start, &mut config, &mut state);
        apply_intent(ScannerIntent::Stop, &mut config, &mut state);
        apply_intent(ScannerIntent::Start, &mut config, &mut state);
        assert_eq!(state.phase, Phase::Moving);
    }

    #[test]
    fn test_scanner_drains_intents_on_tick() {
        let channel = IntentChannel::<4>::new();
        let sender = channel.sender();
        let mut scanner = Scanner::<16, 4>::with_intents(channel.receiver(), config()).unwrap();

        let _ = sender.try_send(ScannerIntent::Start);
        scanner.tick(Instant::from_millis(0));
        assert_eq!(scanner.state().phase, Phase::Moving);
        assert_eq!(scanner.state().position, 5);

        scanner.tick(Instant::from_millis(10));
        assert_eq!(scanner.state().position, 6);

        let _ = sender.try_send(ScannerIntent::Stop);
        let frame = scanner.tick(Instant::from_millis(20));
        assert_eq!(frame.len(), 10);
        assert_eq!(scanner.state().phase, Phase::Stopping);
        assert_eq!(scanner.state().position, 7);
    }
}
