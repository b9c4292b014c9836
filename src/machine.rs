//! Scanner state machine
//!
//! Discrete-time simulation driven purely by elapsed milliseconds. Elapsed
//! time is collected in an accumulator and spent in fixed steps of
//! `1000 / speed` ms, so the result does not depend on how the host slices
//! time into frames.

use crate::config::ScannerConfig;
use crate::state::{Direction, PauseKind, Phase, ScannerState};

/// Whether the stepping loop may keep consuming time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Halt,
}

impl ScannerState {
    /// Begin (or resume) sweeping from the current position
    ///
    /// Cancels a graceful stop in flight without moving the dot.
    pub fn start(&mut self) {
        self.phase = Phase::Moving;
        self.stop_pause = None;
    }

    /// Ask the dot to finish its sweep and settle at the midpoint
    ///
    /// Does nothing if the scanner is stopped or already stopping; the
    /// number of remaining wall arrivals is fixed when the first request
    /// is accepted.
    pub fn request_stop(&mut self, config: &ScannerConfig) {
        let (edges_remaining, stop_pause) = match self.phase {
            Phase::Stopped | Phase::Stopping => return,
            Phase::PausedAtEnd => {
                let edges = match self.direction {
                    Direction::Forward => 1,
                    Direction::Backward => 0,
                };
                (edges, Some(PauseKind::End))
            }
            Phase::PausedAtMiddle => (
                sweep_edges_remaining(self.position, self.direction, config),
                Some(PauseKind::Middle),
            ),
            Phase::Moving => (
                sweep_edges_remaining(self.position, self.direction, config),
                None,
            ),
        };

        self.edges_remaining = edges_remaining;
        self.stop_pause = stop_pause;
        self.phase = Phase::Stopping;
        trace!(
            "scanner: stop accepted at {} with {} edges left",
            self.position,
            edges_remaining
        );
    }

    /// Advance the simulation by `dt_ms` milliseconds
    ///
    /// Negative and NaN values count as zero. Arbitrarily large values
    /// are fine and cost at most a few bounces worth of steps.
    pub fn advance(&mut self, dt_ms: f32, config: &ScannerConfig) {
        let dt_ms = dt_ms.max(0.0);
        match self.phase {
            Phase::Stopped => {}
            Phase::PausedAtEnd | Phase::PausedAtMiddle => self.count_down_pause(dt_ms),
            Phase::Stopping if self.stop_pause.is_some() => self.count_down_pause(dt_ms),
            Phase::Moving | Phase::Stopping => self.sweep(dt_ms, config),
        }
    }

    /// Spend `dt_ms` of the running pause, resuming when it runs out
    ///
    /// Leftover time past the end of the pause is dropped.
    fn count_down_pause(&mut self, dt_ms: f32) {
        self.pause_timer_ms -= dt_ms;
        if self.pause_timer_ms > 0.0 {
            return;
        }

        self.pause_timer_ms = 0.0;
        self.move_accumulator_ms = 0.0;
        let reverse = match self.phase {
            Phase::PausedAtEnd => true,
            Phase::PausedAtMiddle => false,
            _ => self.stop_pause == Some(PauseKind::End),
        };
        if reverse {
            self.direction = self.direction.reversed();
        }
        self.stop_pause = None;
        if self.phase.is_paused() {
            self.phase = Phase::Moving;
        }
    }

    fn sweep(&mut self, dt_ms: f32, config: &ScannerConfig) {
        let Some(ms_per_step) = config.ms_per_step() else {
            return;
        };

        let (steps, remainder) = whole_steps(self.move_accumulator_ms + dt_ms, ms_per_step);
        self.move_accumulator_ms = remainder;

        // A free bounce repeats every period, anything else halts within a few
        let period = bounce_period(config);
        let steps = if self.sweep_can_halt(config) {
            steps.min(4 * period)
        } else {
            steps % period
        };

        for _ in 0..steps {
            if self.step(config) == Flow::Halt {
                return;
            }
        }
    }

    fn sweep_can_halt(&self, config: &ScannerConfig) -> bool {
        self.phase == Phase::Stopping
            || config.end_pause_ms() > 0.0
            || config.mid_pause_ms() > 0.0
    }

    /// Move one LED and react to walls and the midpoint
    fn step(&mut self, config: &ScannerConfig) -> Flow {
        let last = i16::from(config.last_index());
        let next = i16::from(self.position) + i16::from(self.direction.sign());

        if next <= 0 || next >= last {
            self.position = u8::try_from(next.clamp(0, last)).unwrap_or(config.last_index());
            if self.arrive_at_wall(config) == Flow::Halt {
                return Flow::Halt;
            }
        } else {
            self.position = u8::try_from(next).unwrap_or(config.last_index());
        }

        self.arrive_at_midpoint(config)
    }

    fn arrive_at_wall(&mut self, config: &ScannerConfig) -> Flow {
        let stopping = self.phase == Phase::Stopping;
        if stopping {
            self.edges_remaining = self.edges_remaining.saturating_sub(1);
        }

        let end_pause_ms = config.end_pause_ms();
        if end_pause_ms <= 0.0 {
            self.direction = self.direction.reversed();
            return Flow::Continue;
        }

        // Strips of one or two LEDs have their midpoint on a wall
        if stopping && self.edges_remaining == 0 && self.position == config.midpoint() {
            self.settle();
            return Flow::Halt;
        }

        self.pause_timer_ms = end_pause_ms;
        self.move_accumulator_ms = 0.0;
        if stopping {
            self.stop_pause = Some(PauseKind::End);
        } else {
            self.phase = Phase::PausedAtEnd;
        }
        Flow::Halt
    }

    fn arrive_at_midpoint(&mut self, config: &ScannerConfig) -> Flow {
        if self.position != config.midpoint() {
            return Flow::Continue;
        }

        match self.phase {
            Phase::Stopping if self.edges_remaining == 0 => {
                self.settle();
                Flow::Halt
            }
            Phase::Moving if config.mid_pause_ms() > 0.0 => {
                self.phase = Phase::PausedAtMiddle;
                self.pause_timer_ms = config.mid_pause_ms();
                self.move_accumulator_ms = 0.0;
                Flow::Halt
            }
            _ => Flow::Continue,
        }
    }

    fn settle(&mut self) {
        self.phase = Phase::Stopped;
        self.direction = Direction::Forward;
        self.pause_timer_ms = 0.0;
        self.move_accumulator_ms = 0.0;
        self.edges_remaining = 0;
        self.stop_pause = None;
        trace!("scanner: settled at {}", self.position);
    }
}

/// Wall arrivals a sweeping dot needs before it may settle
///
/// Settling always happens on a forward pass through the midpoint.
fn sweep_edges_remaining(position: u8, direction: Direction, config: &ScannerConfig) -> u8 {
    match direction {
        Direction::Backward => 1,
        Direction::Forward if position >= config.midpoint() => 2,
        Direction::Forward => 0,
    }
}

/// Split `total_ms` into whole steps and the time left over
///
/// Non-finite totals yield as many steps as fit in a `u64` and no
/// remainder.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole_steps(total_ms: f32, ms_per_step: f32) -> (u64, f32) {
    if !total_ms.is_finite() {
        return (u64::MAX, 0.0);
    }
    let remainder = libm::fmodf(total_ms, ms_per_step);
    let steps = libm::roundf((total_ms - remainder) / ms_per_step);
    (steps as u64, remainder)
}

/// Steps after which an unobstructed sweep is back where it started
fn bounce_period(config: &ScannerConfig) -> u64 {
    (2 * u64::from(config.last_index())).max(2)
}
