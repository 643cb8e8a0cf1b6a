//! Desktop preview app for padlight animations
//!
//! Simulates the controller with the keyboard and draws the LED strip
//! in a window. The animator runs at the firmware frame rate no matter
//! how fast the window repaints.

use std::time::Instant as StdInstant;

use eframe::egui::{self};
use padlight::animation::{BLIZZARD, CHASE_LEFT, GRAB_PULSE, ICE_PULSE, JUMP_PULSE, Preset};
use padlight::controller::STICK_CENTER;
use padlight::frame_scheduler::DEFAULT_FRAME_DURATION;
use padlight::{Animator, AnimatorConfig, Button, ControllerSnapshot, PixelSink, Rgb};

/// Maximum number of LEDs the preview supports
const MAX_LEDS: usize = 60;

/// Default number of LEDs in the simulated strip
const DEFAULT_LED_COUNT: usize = 5;

/// Size of each LED rectangle in pixels
const LED_SIZE: f32 = 32.0;

/// Gap between LEDs
const LED_GAP: f32 = 4.0;

/// Keyboard layout, shown in the window
const KEY_BINDINGS: [(egui::Key, Button, &str); 6] = [
    (egui::Key::A, Button::A, "A: attack"),
    (egui::Key::B, Button::B, "B: special"),
    (egui::Key::X, Button::X, "X: jump"),
    (egui::Key::Y, Button::Y, "Y: jump"),
    (egui::Key::Z, Button::Z, "Z: grab"),
    (egui::Key::Enter, Button::Start, "Enter: start"),
];

const PRESETS: [(&str, Preset); 5] = [
    ("blizzard", BLIZZARD),
    ("jump", JUMP_PULSE),
    ("grab", GRAB_PULSE),
    ("ice", ICE_PULSE),
    ("chase left", CHASE_LEFT),
];

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 420.0])
            .with_title("Padlight Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "padlight-preview",
        options,
        Box::new(|_cc| Ok(Box::new(PreviewApp::new()))),
    )
}

/// Strip that keeps the last displayed colors
struct PreviewStrip {
    pixels: Vec<Rgb>,
    pending: Vec<Rgb>,
}

impl PreviewStrip {
    fn new(led_count: usize) -> Self {
        Self {
            pixels: vec![Rgb::default(); led_count],
            pending: Vec::with_capacity(led_count),
        }
    }
}

impl PixelSink for PreviewStrip {
    fn emit_pixel(&mut self, color: Rgb) {
        self.pending.push(color);
    }

    fn flush(&mut self) {
        // Like a real strip, pixels past the written ones keep their color
        for (pixel, color) in self.pixels.iter_mut().zip(self.pending.drain(..)) {
            *pixel = color;
        }
        self.pending.clear();
    }

    fn fill_all(&mut self, color: Rgb) {
        self.pending.clear();
        self.pixels.fill(color);
    }
}

struct PreviewApp {
    animator: Animator,
    strip: PreviewStrip,

    /// Synthetic time in milliseconds
    t_ms: u64,
    /// Synthetic time of the next animation frame
    next_frame_ms: u64,
    /// Frames run since the last reset
    frames: u64,
    /// Wall-clock reference for delta time
    last_frame: StdInstant,
    /// Whether animation is playing
    playing: bool,
    /// Time scale multiplier (1.0 = realtime)
    time_scale: f32,
    /// Number of LEDs to display
    led_count: usize,
    /// Analog shoulder value sent while Q/E are held
    trigger_level: u8,
}

impl PreviewApp {
    fn new() -> Self {
        Self {
            animator: Self::animator(DEFAULT_LED_COUNT),
            strip: PreviewStrip::new(DEFAULT_LED_COUNT),
            t_ms: 0,
            next_frame_ms: 0,
            frames: 0,
            last_frame: StdInstant::now(),
            playing: true,
            time_scale: 1.0,
            led_count: DEFAULT_LED_COUNT,
            trigger_level: 255,
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn animator(led_count: usize) -> Animator {
        Animator::new(AnimatorConfig {
            pixel_count: led_count as u8,
            ..AnimatorConfig::default()
        })
    }

    /// Start over with a fresh animator and a dark strip
    fn reset(&mut self) {
        self.animator = Self::animator(self.led_count);
        self.strip = PreviewStrip::new(self.led_count);
        self.t_ms = 0;
        self.next_frame_ms = 0;
        self.frames = 0;
        self.last_frame = StdInstant::now();
    }

    /// Build a controller snapshot from the keyboard state
    fn read_controller(&self, ctx: &egui::Context) -> ControllerSnapshot {
        ctx.input(|input| {
            let mut snapshot = ControllerSnapshot::NEUTRAL;
            for (key, button, _) in KEY_BINDINGS {
                if input.key_down(key) {
                    snapshot = snapshot.with_button(button);
                }
            }

            let axis = |low: egui::Key, high: egui::Key| match (input.key_down(low), input.key_down(high)) {
                (true, false) => 0,
                (false, true) => u8::MAX,
                _ => STICK_CENTER,
            };
            let x = axis(egui::Key::ArrowLeft, egui::Key::ArrowRight);
            let y = axis(egui::Key::ArrowDown, egui::Key::ArrowUp);

            let level = |key: egui::Key| if input.key_down(key) { self.trigger_level } else { 0 };
            snapshot
                .with_stick(x, y)
                .with_triggers(level(egui::Key::Q), level(egui::Key::E))
        })
    }

    /// Update synthetic time based on wall clock and time scale
    fn update_time(&mut self) {
        let now = StdInstant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        if self.playing {
            let delta_ms_f64 = delta.as_secs_f64() * 1000.0 * f64::from(self.time_scale);
            let delta_ms_f64 = if delta_ms_f64.is_finite() {
                #[allow(clippy::cast_precision_loss)]
                delta_ms_f64.clamp(0.0, u64::MAX as f64)
            } else {
                0.0
            };
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let delta_ms = delta_ms_f64 as u64;
            self.t_ms = self.t_ms.wrapping_add(delta_ms);
        }
    }

    /// Run every animation frame that is due
    fn run_frames(&mut self, input: &ControllerSnapshot) {
        let frame_ms = DEFAULT_FRAME_DURATION.as_millis();
        // Don't replay a long backlog after the window was hidden
        if self.t_ms > self.next_frame_ms + frame_ms * 2 {
            self.next_frame_ms = self.t_ms;
        }
        while self.next_frame_ms <= self.t_ms {
            self.animator.next_frame(input, &mut self.strip);
            self.next_frame_ms += frame_ms;
            self.frames += 1;
        }
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_time();

        let input = self.read_controller(ctx);
        self.run_frames(&input);

        // Request continuous repaint for animation
        ctx.request_repaint();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                // <PlaybackControls>
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        if ui.button("⏮ Reset").clicked() {
                            self.reset();
                        }
                        if ui
                            .button(if self.playing { "⏸ Pause" } else { "▶ Play" })
                            .clicked()
                        {
                            self.playing = !self.playing;
                        }
                    });

                    ui.add_space(4.0);
                    ui.label(format!("Frame: {}", self.frames));

                    ui.add_space(4.0);
                    ui.horizontal(|ui| {
                        ui.label("Speed:");
                        ui.add(egui::Slider::new(&mut self.time_scale, 0.1..=5.0).logarithmic(true));
                    });
                });
                // </PlaybackControls>
                ui.add_space(16.0);
                // <StripControls>
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        ui.label("LEDs:");
                        let old_led_count = self.led_count;
                        ui.add(egui::Slider::new(&mut self.led_count, 1usize..=MAX_LEDS));
                        if self.led_count != old_led_count {
                            self.reset();
                        }
                    });

                    ui.add_space(4.0);
                    ui.horizontal(|ui| {
                        ui.label("Shoulder (Q/E):");
                        ui.add(egui::Slider::new(&mut self.trigger_level, 0u8..=255u8));
                    });
                });
                // </StripControls>
            });

            ui.add_space(16.0);

            ui.horizontal(|ui| {
                ui.label("Start:");
                for (name, preset) in &PRESETS {
                    if ui.button(*name).clicked() {
                        self.animator.start(preset);
                    }
                }
            });

            ui.add_space(8.0);

            let state = self.animator.state();
            ui.label(format!(
                "{} | frame {}/{} | cycle {} | {:?} | {}",
                state.kind().as_str(),
                state.elapsed_frames(),
                state.timeout_frames(),
                state.cycle_length(),
                state.direction(),
                if state.is_interruptible() { "interruptible" } else { "locked" },
            ));

            ui.add_space(16.0);

            // === LED Display ===
            let led_pitch = LED_SIZE + LED_GAP;
            let available_width = ui.available_width();
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let leds_per_row = (available_width / led_pitch).floor().max(1.0) as usize;
            let rows = self.led_count.div_ceil(leds_per_row);
            #[allow(clippy::cast_precision_loss)]
            let height = rows as f32 * led_pitch;

            let (response, painter) =
                ui.allocate_painter(egui::vec2(available_width, height), egui::Sense::hover());
            let origin = response.rect.min;

            #[allow(clippy::cast_precision_loss)]
            for (i, pixel) in self.strip.pixels.iter().enumerate() {
                let row = i / leds_per_row;
                let col = i % leds_per_row;
                let x = origin.x + col as f32 * led_pitch;
                let y = origin.y + row as f32 * led_pitch;

                let rect = egui::Rect::from_min_size(egui::pos2(x, y), egui::vec2(LED_SIZE, LED_SIZE));
                let color = egui::Color32::from_rgb(pixel.r, pixel.g, pixel.b);
                painter.rect_filled(rect, 6.0, color);
            }

            ui.add_space(16.0);
            ui.label("Stick: arrows | Shoulders: Q / E");
            ui.horizontal_wrapped(|ui| {
                for (_, _, label) in KEY_BINDINGS {
                    ui.label(label);
                }
            });
        });
    }
}
