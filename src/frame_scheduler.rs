//! Frame scheduling and timing utilities.
//!
//! Paces a [`Scanner`] without async/await or platform-specific timers.
//! The caller is responsible for sleeping/waiting between frames.

use embassy_time::{Duration, Instant};

use crate::{OutputDriver, Scanner};

/// Default target frame rate (90 FPS).
pub const DEFAULT_FPS: u32 = 90;

/// Default frame duration based on target FPS.
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(1000 / DEFAULT_FPS as u64);

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Drives a scanner and pushes its frames to an output driver.
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(scanner, driver);
///
/// loop {
///     let result = scheduler.tick(Instant::now());
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct FrameScheduler<'a, O: OutputDriver, const MAX_LEDS: usize, const INTENT_CHANNEL_SIZE: usize>
{
    output: O,
    scanner: Scanner<'a, MAX_LEDS, INTENT_CHANNEL_SIZE>,
    next_frame: Instant,
    frame_duration: Duration,
}

impl<'a, O: OutputDriver, const MAX_LEDS: usize, const INTENT_CHANNEL_SIZE: usize>
    FrameScheduler<'a, O, MAX_LEDS, INTENT_CHANNEL_SIZE>
{
    /// Create a scheduler running at `DEFAULT_FPS`.
    pub fn new(scanner: Scanner<'a, MAX_LEDS, INTENT_CHANNEL_SIZE>, output: O) -> Self {
        Self::with_frame_duration(scanner, output, DEFAULT_FRAME_DURATION)
    }

    /// Create a scheduler with a custom frame duration.
    pub fn with_frame_duration(
        scanner: Scanner<'a, MAX_LEDS, INTENT_CHANNEL_SIZE>,
        output: O,
        frame_duration: Duration,
    ) -> Self {
        Self {
            output,
            scanner,
            next_frame: Instant::from_millis(0),
            frame_duration,
        }
    }

    /// Process one frame and return timing information.
    ///
    /// If the caller has fallen more than two frames behind, the backlog is
    /// skipped instead of rendering a burst of catch-up frames. The scanner
    /// itself always sees the true elapsed time.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        let max_drift = self.frame_duration * 2;
        if now > self.next_frame + max_drift {
            self.next_frame = now;
        }

        let frame = self.scanner.tick(now);
        self.output.write(frame);

        self.next_frame += self.frame_duration;

        let sleep_duration = self
            .next_frame
            .checked_duration_since(now)
            .unwrap_or(Duration::from_millis(0));

        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
        }
    }

    pub fn scanner(&self) -> &Scanner<'a, MAX_LEDS, INTENT_CHANNEL_SIZE> {
        &self.scanner
    }

    pub fn scanner_mut(&mut self) -> &mut Scanner<'a, MAX_LEDS, INTENT_CHANNEL_SIZE> {
        &mut self.scanner
    }

    pub fn output(&self) -> &O {
        &self.output
    }
}
