//! Intent processing
//!
//! Hosts talk to a running [`Scanner`](crate::Scanner) by queueing
//! [`ScannerIntent`]s. The scanner drains them at the start of every tick
//! and applies them in arrival order.

use embassy_time::Duration;

use crate::channel::{Channel, Receiver, Sender};
use crate::color::Rgb;
use crate::config::ScannerConfig;
use crate::state::ScannerState;

/// A request to change what the scanner does
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScannerIntent {
    /// Start or resume sweeping
    Start,
    /// Finish the sweep and settle in the middle
    Stop,
    /// Change the speed in LEDs per second
    Speed(f32),
    /// Change the dwell time at the ends
    EndPause(Duration),
    /// Change the dwell time at the midpoint
    MidPause(Duration),
    /// Change the dot color
    Color(Rgb),
    /// Change the glow radius
    GlowRadius(u8),
}

/// Type alias for intent sender
pub type IntentSender<'a, const SIZE: usize> = Sender<'a, ScannerIntent, SIZE>;

/// Type alias for intent receiver
pub type IntentReceiver<'a, const SIZE: usize> = Receiver<'a, ScannerIntent, SIZE>;

/// Type alias for the intent channel
pub type IntentChannel<const SIZE: usize> = Channel<ScannerIntent, SIZE>;

/// Applies queued intents to a scanner's configuration and state
pub struct IntentProcessor<'a, const SIZE: usize> {
    intents: IntentReceiver<'a, SIZE>,
}

impl<'a, const SIZE: usize> IntentProcessor<'a, SIZE> {
    pub const fn new(intents: IntentReceiver<'a, SIZE>) -> Self {
        Self { intents }
    }

    /// Drain and apply every pending intent
    ///
    /// Returns how many intents were applied.
    pub fn process_pending(
        &mut self,
        config: &mut ScannerConfig,
        state: &mut ScannerState,
    ) -> usize {
        let mut applied = 0;
        for intent in self.intents.drain() {
            apply_intent(intent, config, state);
            applied += 1;
        }
        applied
    }
}

/// Apply a single intent
pub fn apply_intent(intent: ScannerIntent, config: &mut ScannerConfig, state: &mut ScannerState) {
    match intent {
        ScannerIntent::Start => state.start(),
        ScannerIntent::Stop => state.request_stop(config),
        ScannerIntent::Speed(speed) => config.speed = speed,
        ScannerIntent::EndPause(pause) => config.end_pause = pause,
        ScannerIntent::MidPause(pause) => config.mid_pause = pause,
        ScannerIntent::Color(color) => config.color = color,
        ScannerIntent::GlowRadius(radius) => config.glow_radius = radius,
    }
}
