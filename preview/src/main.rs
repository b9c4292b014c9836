//! Desktop preview for the scanning dot
//!
//! Plays the host role: feeds wall-clock time into a [`Scanner`] and sends
//! intents from the UI controls.

use std::time::Instant as StdInstant;

use eframe::egui::{self};
use myrtio_light_scanner::{
    Duration, Instant, IntentChannel, IntentSender, Phase, Rgb, Scanner, ScannerConfig,
    ScannerIntent,
};

/// Maximum number of LEDs the preview supports
const MAX_LEDS: usize = 180;

/// Size of each LED rectangle in pixels
const LED_SIZE: f32 = 18.0;

/// Gap between LEDs
const LED_GAP: f32 = 2.0;

/// Intent channel size
const INTENT_CHANNEL_SIZE: usize = 16;

/// Intent channel between the UI controls and the scanner
static INTENTS_CHANNEL: IntentChannel<INTENT_CHANNEL_SIZE> =
    IntentChannel::<INTENT_CHANNEL_SIZE>::new();

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 320.0])
            .with_title("Light Scanner Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "myrtio-light-scanner-preview",
        options,
        Box::new(|_cc| Ok(Box::new(PreviewApp::new()))),
    )
}

struct PreviewApp {
    scanner: Scanner<'static, MAX_LEDS, INTENT_CHANNEL_SIZE>,
    intent_sender: IntentSender<'static, INTENT_CHANNEL_SIZE>,

    // UI state (tracked to detect changes and send intents)
    /// Synthetic time in milliseconds
    t_ms: u64,
    /// Wall-clock reference for delta time
    last_frame: StdInstant,
    /// Time scale multiplier (1.0 = realtime)
    time_scale: f32,
    speed: f32,
    end_pause_ms: u64,
    mid_pause_ms: u64,
    glow_radius: u8,
    color: [u8; 3],
    led_count: u8,
}

impl PreviewApp {
    fn new() -> Self {
        let config = ScannerConfig::default().with_glow_radius(3);
        Self {
            scanner: Self::build_scanner(config),
            intent_sender: INTENTS_CHANNEL.sender(),
            t_ms: 0,
            last_frame: StdInstant::now(),
            time_scale: 1.0,
            speed: config.speed,
            end_pause_ms: config.end_pause.as_millis(),
            mid_pause_ms: config.mid_pause.as_millis(),
            glow_radius: config.glow_radius,
            color: [config.color.r, config.color.g, config.color.b],
            led_count: config.led_count,
        }
    }

    fn build_scanner(config: ScannerConfig) -> Scanner<'static, MAX_LEDS, INTENT_CHANNEL_SIZE> {
        match Scanner::with_intents(INTENTS_CHANNEL.receiver(), config) {
            Ok(scanner) => scanner,
            Err(err) => panic!("invalid preview configuration: {err}"),
        }
    }

    fn send(&self, intent: ScannerIntent) {
        let _ = self.intent_sender.try_send(intent);
    }

    /// Resize the strip; the dot goes back to rest
    fn change_led_count(&mut self) {
        if let Err(err) = self.scanner.set_led_count(self.led_count) {
            eprintln!("{err}");
            self.led_count = self.scanner.config().led_count;
        }
    }

    /// Update synthetic time based on wall clock and time scale
    fn update_time(&mut self) {
        let now = StdInstant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        let delta_ms_f64 = delta.as_secs_f64() * 1000.0 * f64::from(self.time_scale);
        let delta_ms_f64 = if delta_ms_f64.is_finite() {
            delta_ms_f64.max(0.0)
        } else {
            0.0
        };
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let delta_ms = delta_ms_f64 as u64;
        self.t_ms = self.t_ms.wrapping_add(delta_ms);
    }

    fn phase_label(&self) -> &'static str {
        match self.scanner.state().phase {
            Phase::Stopped => "stopped",
            Phase::Moving => "moving",
            Phase::PausedAtEnd => "paused at end",
            Phase::PausedAtMiddle => "paused at middle",
            Phase::Stopping => "stopping",
        }
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_time();
        let frame: Vec<Rgb> = self.scanner.tick(Instant::from_millis(self.t_ms)).to_vec();

        ctx.request_repaint();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("▶ Start").clicked() {
                    self.send(ScannerIntent::Start);
                }
                if ui.button("⏹ Stop").clicked() {
                    self.send(ScannerIntent::Stop);
                }
                ui.add_space(8.0);
                ui.label(format!(
                    "Phase: {} | position {}",
                    self.phase_label(),
                    self.scanner.state().position
                ));
            });

            ui.add_space(8.0);

            ui.horizontal(|ui| {
                ui.label("Time scale:");
                ui.add(egui::Slider::new(&mut self.time_scale, 0.1..=5.0).logarithmic(true));

                ui.add_space(8.0);

                ui.label("LEDs:");
                let old_led_count = self.led_count;
                ui.add(egui::Slider::new(&mut self.led_count, 1..=u8::MAX));
                if self.led_count != old_led_count {
                    self.change_led_count();
                }
            });

            ui.add_space(4.0);

            ui.horizontal(|ui| {
                ui.label("Speed:");
                let old_speed = self.speed;
                ui.add(egui::Slider::new(&mut self.speed, 1.0..=200.0).logarithmic(true));
                if (self.speed - old_speed).abs() > f32::EPSILON {
                    self.send(ScannerIntent::Speed(self.speed));
                }

                ui.add_space(8.0);

                ui.label("Glow:");
                let old_glow = self.glow_radius;
                ui.add(egui::Slider::new(&mut self.glow_radius, 0..=16));
                if self.glow_radius != old_glow {
                    self.send(ScannerIntent::GlowRadius(self.glow_radius));
                }
            });

            ui.add_space(4.0);

            ui.horizontal(|ui| {
                ui.label("End pause (ms):");
                let old_end_pause = self.end_pause_ms;
                ui.add(egui::DragValue::new(&mut self.end_pause_ms).range(0..=2000));
                if self.end_pause_ms != old_end_pause {
                    self.send(ScannerIntent::EndPause(Duration::from_millis(self.end_pause_ms)));
                }

                ui.add_space(8.0);

                ui.label("Middle pause (ms):");
                let old_mid_pause = self.mid_pause_ms;
                ui.add(egui::DragValue::new(&mut self.mid_pause_ms).range(0..=2000));
                if self.mid_pause_ms != old_mid_pause {
                    self.send(ScannerIntent::MidPause(Duration::from_millis(self.mid_pause_ms)));
                }

                ui.add_space(8.0);

                ui.label("Color:");
                let old_color = self.color;
                if ui.color_edit_button_srgb(&mut self.color).changed() && old_color != self.color {
                    self.send(ScannerIntent::Color(Rgb {
                        r: self.color[0],
                        g: self.color[1],
                        b: self.color[2],
                    }));
                }
            });

            ui.add_space(16.0);

            // === LED Display ===
            let available_width = ui.available_width();
            let led_pitch = LED_SIZE + LED_GAP;
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let leds_per_row = (available_width / led_pitch).floor().max(1.0) as usize;
            let rows = frame.len().div_ceil(leds_per_row);
            #[allow(clippy::cast_precision_loss)]
            let height = rows as f32 * led_pitch;

            let (response, painter) = ui.allocate_painter(
                egui::vec2(available_width, height),
                egui::Sense::hover(),
            );
            let origin = response.rect.min;

            #[allow(clippy::cast_precision_loss)]
            for (i, pixel) in frame.iter().enumerate() {
                let row = i / leds_per_row;
                let col = i % leds_per_row;
                let x = origin.x + col as f32 * led_pitch;
                let y = origin.y + row as f32 * led_pitch;

                let rect = egui::Rect::from_min_size(
                    egui::pos2(x, y),
                    egui::vec2(LED_SIZE, LED_SIZE),
                );
                let color = egui::Color32::from_rgb(pixel.r, pixel.g, pixel.b);
                painter.rect_filled(rect, 3.0, color);
            }
        });
    }
}
