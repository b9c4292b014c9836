#![no_std]

#[macro_use]
mod log;

pub mod channel;
pub mod color;
pub mod config;
pub mod frame_scheduler;
pub mod intent_processor;
mod machine;
pub mod renderer;
pub mod scanner;
pub mod state;

pub use config::{ConfigError, ScannerConfig};
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use intent_processor::{
    IntentChannel, IntentProcessor, IntentReceiver, IntentSender, ScannerIntent,
};
pub use renderer::render;
pub use scanner::Scanner;
pub use state::{Direction, PauseKind, Phase, ScannerState};

pub use color::Rgb;
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to push frames to real or simulated hardware.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
