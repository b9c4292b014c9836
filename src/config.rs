//! Strip and animation parameters

use embassy_time::Duration;

use crate::color::{Rgb, rgb_from_u32};

/// Default dot speed in LEDs per second
pub const DEFAULT_SPEED: f32 = 30.0;

/// Default number of dimmed neighbours on each side of the dot
pub const DEFAULT_GLOW_RADIUS: u8 = 2;

/// Classic scanner red
#[allow(clippy::unreadable_literal)]
pub const DEFAULT_COLOR: Rgb = rgb_from_u32(0xFF1A00);

/// Reasons a configuration can not be applied to a scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The strip has no LEDs
    EmptyStrip,
    /// The strip is longer than the frame buffer
    TooManyLeds { requested: u8, capacity: usize },
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::EmptyStrip => f.write_str("strip must have at least one LED"),
            Self::TooManyLeds {
                requested,
                capacity,
            } => write!(
                f,
                "strip of {requested} LEDs does not fit a buffer of {capacity}"
            ),
        }
    }
}

impl core::error::Error for ConfigError {}

/// Configuration of one scanning strip
///
/// Owned by the host. The state machine only reads it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScannerConfig {
    /// Number of addressable positions
    pub led_count: u8,
    /// Positions traversed per second. Non-positive values freeze the dot.
    pub speed: f32,
    /// Dwell time at either end before reversing
    pub end_pause: Duration,
    /// Dwell time when crossing the midpoint while sweeping
    pub mid_pause: Duration,
    /// Number of neighbouring positions lit with linear falloff
    pub glow_radius: u8,
    /// Color of the lit position
    pub color: Rgb,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self::new(24, DEFAULT_COLOR)
    }
}

impl ScannerConfig {
    /// Create a configuration with default timing and no pauses
    pub const fn new(led_count: u8, color: Rgb) -> Self {
        Self {
            led_count,
            speed: DEFAULT_SPEED,
            end_pause: Duration::from_millis(0),
            mid_pause: Duration::from_millis(0),
            glow_radius: DEFAULT_GLOW_RADIUS,
            color,
        }
    }

    #[must_use]
    pub const fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    #[must_use]
    pub const fn with_end_pause(mut self, end_pause: Duration) -> Self {
        self.end_pause = end_pause;
        self
    }

    #[must_use]
    pub const fn with_mid_pause(mut self, mid_pause: Duration) -> Self {
        self.mid_pause = mid_pause;
        self
    }

    #[must_use]
    pub const fn with_glow_radius(mut self, glow_radius: u8) -> Self {
        self.glow_radius = glow_radius;
        self
    }

    /// Index the dot rests at, `led_count / 2`
    pub const fn midpoint(&self) -> u8 {
        self.led_count / 2
    }

    /// Index of the last LED
    pub const fn last_index(&self) -> u8 {
        self.led_count.saturating_sub(1)
    }

    /// Duration of one step in milliseconds, `None` when the dot can not move
    pub fn ms_per_step(&self) -> Option<f32> {
        if self.speed.is_finite() && self.speed > 0.0 {
            Some(1000.0 / self.speed)
        } else {
            None
        }
    }

    /// End pause in fractional milliseconds
    pub fn end_pause_ms(&self) -> f32 {
        duration_ms(self.end_pause)
    }

    /// Middle pause in fractional milliseconds
    pub fn mid_pause_ms(&self) -> f32 {
        duration_ms(self.mid_pause)
    }

    /// Check that the strip fits a frame buffer of `capacity` LEDs
    pub fn validate(&self, capacity: usize) -> Result<(), ConfigError> {
        if self.led_count == 0 {
            return Err(ConfigError::EmptyStrip);
        }
        if usize::from(self.led_count) > capacity {
            return Err(ConfigError::TooManyLeds {
                requested: self.led_count,
                capacity,
            });
        }
        Ok(())
    }
}

/// Duration in fractional milliseconds
#[allow(clippy::cast_precision_loss)]
pub(crate) fn duration_ms(duration: Duration) -> f32 {
    duration.as_micros() as f32 / 1000.0
}
