use embassy_time::{Duration, Instant};

use crate::color::{BLACK, Rgb};
use crate::config::{ConfigError, ScannerConfig, duration_ms};
use crate::intent_processor::{IntentProcessor, IntentReceiver};
use crate::renderer::render;
use crate::state::ScannerState;

/// Default capacity of the intent queue
pub const DEFAULT_INTENT_CHANNEL_SIZE: usize = 4;

/// Scanner - one animated strip with its own frame buffer
///
/// Owns the configuration and state of a single strip. Hosts either call
/// the command methods directly or queue intents and call [`Scanner::tick`]
/// once per frame.
pub struct Scanner<
    'a,
    const MAX_LEDS: usize,
    const INTENT_CHANNEL_SIZE: usize = DEFAULT_INTENT_CHANNEL_SIZE,
> {
    // External dependencies and configuration
    intent_processor: Option<IntentProcessor<'a, INTENT_CHANNEL_SIZE>>,
    config: ScannerConfig,

    // Internal state
    state: ScannerState,
    last_tick: Option<Instant>,
    frame_buffer: [Rgb; MAX_LEDS],
}

impl<'a, const MAX_LEDS: usize, const INTENT_CHANNEL_SIZE: usize>
    Scanner<'a, MAX_LEDS, INTENT_CHANNEL_SIZE>
{
    /// Create a scanner resting at the midpoint
    pub fn new(config: ScannerConfig) -> Result<Self, ConfigError> {
        Self::build(None, config)
    }

    /// Create a scanner that also takes commands from an intent channel
    pub fn with_intents(
        intents: IntentReceiver<'a, INTENT_CHANNEL_SIZE>,
        config: ScannerConfig,
    ) -> Result<Self, ConfigError> {
        Self::build(Some(IntentProcessor::new(intents)), config)
    }

    fn build(
        intent_processor: Option<IntentProcessor<'a, INTENT_CHANNEL_SIZE>>,
        config: ScannerConfig,
    ) -> Result<Self, ConfigError> {
        config.validate(MAX_LEDS)?;
        trace!("scanner: {} leds at {} leds/s", config.led_count, config.speed);
        Ok(Self {
            intent_processor,
            config,
            state: ScannerState::new(&config),
            last_tick: None,
            frame_buffer: [BLACK; MAX_LEDS],
        })
    }

    /// Start or resume sweeping
    pub fn start(&mut self) {
        self.state.start();
    }

    /// Finish the current sweep and settle at the midpoint
    pub fn stop(&mut self) {
        self.state.request_stop(&self.config);
    }

    /// Put the dot back to rest at the midpoint
    pub fn reset(&mut self) {
        self.state.reset(&self.config);
    }

    /// Advance the animation by `dt_ms` milliseconds
    pub fn advance(&mut self, dt_ms: f32) {
        self.state.advance(dt_ms, &self.config);
    }

    /// Render the current state into the frame buffer
    pub fn render(&mut self) -> &[Rgb] {
        render(&self.state, &self.config, &mut self.frame_buffer)
    }

    /// Process one frame at `now`
    ///
    /// Applies pending intents, advances by the time since the previous
    /// tick and renders. The first tick only renders.
    pub fn tick(&mut self, now: Instant) -> &[Rgb] {
        let dt_ms = self.elapsed_ms(now);
        self.process_intents();
        self.advance(dt_ms);
        self.render()
    }

    fn process_intents(&mut self) {
        if let Some(processor) = self.intent_processor.as_mut() {
            processor.process_pending(&mut self.config, &mut self.state);
        }
    }

    fn elapsed_ms(&mut self, now: Instant) -> f32 {
        let elapsed = self
            .last_tick
            .and_then(|last| now.checked_duration_since(last))
            .unwrap_or(Duration::from_millis(0));
        self.last_tick = Some(now);
        duration_ms(elapsed)
    }

    /// The most recently rendered frame
    pub fn leds(&self) -> &[Rgb] {
        &self.frame_buffer[..self.led_count()]
    }

    pub fn led_count(&self) -> usize {
        usize::from(self.config.led_count)
    }

    pub const fn state(&self) -> &ScannerState {
        &self.state
    }

    pub const fn config(&self) -> &ScannerConfig {
        &self.config
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.config.speed = speed;
    }

    pub fn set_end_pause(&mut self, end_pause: Duration) {
        self.config.end_pause = end_pause;
    }

    pub fn set_mid_pause(&mut self, mid_pause: Duration) {
        self.config.mid_pause = mid_pause;
    }

    pub fn set_color(&mut self, color: Rgb) {
        self.config.color = color;
    }

    pub fn set_glow_radius(&mut self, glow_radius: u8) {
        self.config.glow_radius = glow_radius;
    }

    /// Resize the strip
    ///
    /// The dot is put back to rest because its position may no longer fit.
    pub fn set_led_count(&mut self, led_count: u8) -> Result<(), ConfigError> {
        let config = ScannerConfig {
            led_count,
            ..self.config
        };
        if let Err(err) = config.validate(MAX_LEDS) {
            trace!("scanner: rejected strip of {} leds", led_count);
            return Err(err);
        }
        self.config = config;
        self.frame_buffer = [BLACK; MAX_LEDS];
        self.reset();
        Ok(())
    }
}
