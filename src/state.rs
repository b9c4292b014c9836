//! Mutable scanner state

use crate::config::ScannerConfig;

/// Animation phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// At rest in the middle of the strip
    #[default]
    Stopped,
    /// Sweeping end to end
    Moving,
    /// Dwelling at an end, reverses when the timer runs out
    PausedAtEnd,
    /// Dwelling at the midpoint, keeps its direction
    PausedAtMiddle,
    /// Finishing the current sweep before settling at the midpoint
    Stopping,
}

impl Phase {
    /// Whether the dot is in a dedicated pause phase
    pub const fn is_paused(self) -> bool {
        matches!(self, Self::PausedAtEnd | Self::PausedAtMiddle)
    }
}

/// Kind of pause a stopping dot is waiting out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseKind {
    /// Dwelling at a wall, reverses when done
    End,
    /// Dwelling at the midpoint, keeps its direction
    Middle,
}

/// Direction of travel along the strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Towards the last LED
    #[default]
    Forward,
    /// Towards the first LED
    Backward,
}

impl Direction {
    /// +1 for forward, -1 for backward
    pub const fn sign(self) -> i8 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }

    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }
}

/// State of one scanning strip
///
/// Advanced only by [`ScannerState::advance`] and the two commands
/// [`ScannerState::start`] and [`ScannerState::request_stop`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScannerState {
    /// Lit index, always within `0..led_count`
    pub position: u8,
    pub direction: Direction,
    pub phase: Phase,
    /// Remaining dwell time of the active pause
    pub pause_timer_ms: f32,
    /// Time not yet spent on a whole step
    pub move_accumulator_ms: f32,
    /// Wall arrivals left before a stopping sweep may settle
    pub edges_remaining: u8,
    /// Pause being waited out while `Stopping`
    pub stop_pause: Option<PauseKind>,
}

impl ScannerState {
    /// Create a state resting at the midpoint
    pub const fn new(config: &ScannerConfig) -> Self {
        Self {
            position: config.midpoint(),
            direction: Direction::Forward,
            phase: Phase::Stopped,
            pause_timer_ms: 0.0,
            move_accumulator_ms: 0.0,
            edges_remaining: 0,
            stop_pause: None,
        }
    }

    /// Put the state back to rest at the midpoint
    pub fn reset(&mut self, config: &ScannerConfig) {
        *self = Self::new(config);
    }

    /// Whether the dot is sweeping or finishing a sweep
    pub const fn is_running(&self) -> bool {
        !matches!(self.phase, Phase::Stopped)
    }

    /// Whether a pause timer is counting down
    pub fn is_pausing(&self) -> bool {
        self.phase.is_paused() || self.stop_pause.is_some()
    }
}
