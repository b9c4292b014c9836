//! Frame rendering
//!
//! Turns a [`ScannerState`] into pixel colors: the lit position in the full
//! configured color, `glow_radius` neighbours on each side dimmed linearly,
//! everything else black.

use crate::color::{BLACK, Rgb, fade};
use crate::config::ScannerConfig;
use crate::state::ScannerState;

/// Render one frame into `leds`
///
/// Writes the first `config.led_count` entries (or fewer if `leds` is
/// shorter) and returns the rendered slice. Safe to call in any phase.
pub fn render<'a>(
    state: &ScannerState,
    config: &ScannerConfig,
    leds: &'a mut [Rgb],
) -> &'a mut [Rgb] {
    let count = leds.len().min(usize::from(config.led_count));
    let frame = &mut leds[..count];
    let position = usize::from(state.position);

    for (i, led) in frame.iter_mut().enumerate() {
        let distance = i.abs_diff(position);
        *led = pixel_color(config.color, distance, config.glow_radius);
    }

    frame
}

/// Color of a pixel `distance` LEDs away from the dot
#[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
pub const fn pixel_color(color: Rgb, distance: usize, glow_radius: u8) -> Rgb {
    if distance == 0 {
        return color;
    }
    if distance > glow_radius as usize {
        return BLACK;
    }
    let divisor = glow_radius as u16 + 1;
    let factor = divisor - distance as u16;
    fade(color, factor, divisor)
}
