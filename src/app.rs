use eframe::egui::{self, Color32, Pos2, Sense, Stroke};
use log::debug;
use std::time::Instant;

use crate::config::{limits, VisualizationConfig, VisualizationType};
use crate::geometry::generate_lines;
use crate::modulation::SessionModulator;
use crate::render::compose_frame;

/// Default auto-evolve session length (a classic 25-minute focus block).
const SESSION_MINUTES: f64 = 25.0;

pub struct LinefieldApp {
    config: VisualizationConfig,
    start: Instant,
    auto_evolve: bool,
    modulator: SessionModulator,
    session_start: Instant,
}

impl LinefieldApp {
    pub fn new() -> Self {
        let mut config = VisualizationConfig::default();
        // Startup mode override, e.g. LINEFIELD_MODE=hexGrid. Unknown tags
        // fall back to the tunnel.
        if let Ok(tag) = std::env::var("LINEFIELD_MODE") {
            config.viz_type = VisualizationType::from_tag(&tag);
        }
        let now = Instant::now();
        Self {
            config,
            start: now,
            auto_evolve: false,
            modulator: SessionModulator::new(SESSION_MINUTES * 60.0),
            session_start: now,
        }
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Mode:");
            for viz_type in VisualizationType::ALL {
                if ui
                    .selectable_label(self.config.viz_type == viz_type, viz_type.label())
                    .clicked()
                {
                    self.config.viz_type = viz_type;
                    debug!("switched mode to {viz_type:?}");
                }
            }

            ui.separator();

            if ui.button("Reset").clicked() {
                let viz_type = self.config.viz_type;
                self.config = VisualizationConfig {
                    viz_type,
                    ..VisualizationConfig::default()
                };
            }

            if ui.checkbox(&mut self.auto_evolve, "Auto-evolve").changed()
                && self.auto_evolve
            {
                self.session_start = Instant::now();
            }
        });

        ui.horizontal(|ui| {
            ui.label("Speed:");
            ui.add(egui::Slider::new(
                &mut self.config.speed,
                limits::MIN_SPEED..=limits::MAX_SPEED,
            ));

            ui.label("Rotation:");
            ui.add(egui::Slider::new(
                &mut self.config.rotation,
                limits::MIN_ROTATION..=limits::MAX_ROTATION,
            ));

            ui.label("Perspective:");
            ui.add(egui::Slider::new(
                &mut self.config.perspective,
                limits::MIN_PERSPECTIVE..=limits::MAX_PERSPECTIVE,
            ));

            ui.label("Lines:");
            ui.add(egui::Slider::new(
                &mut self.config.line_count,
                limits::MIN_LINE_COUNT..=limits::MAX_LINE_COUNT,
            ));

            ui.label("Opacity:");
            ui.add(egui::Slider::new(
                &mut self.config.line_opacity,
                limits::MIN_LINE_OPACITY..=limits::MAX_LINE_OPACITY,
            ));

            ui.checkbox(&mut self.config.pulse_effect, "Pulse");
        });
    }

    fn paint_frame(&self, painter: &egui::Painter, rect: egui::Rect) {
        painter.rect_filled(rect, 0.0, Color32::BLACK);

        let width = rect.width() as f64;
        let height = rect.height() as f64;
        let elapsed_ms = self.start.elapsed().as_secs_f64() * 1000.0;

        let lines = generate_lines(
            self.config.viz_type,
            self.config.line_count,
            self.config.perspective,
            width,
            height,
            self.config.rotation,
            elapsed_ms * self.config.speed,
        );
        let strokes = compose_frame(lines, &self.config, width, height, elapsed_ms);

        for stroke in strokes {
            let alpha = (stroke.opacity.clamp(0.0, 1.0) * 255.0) as u8;
            painter.line_segment(
                [
                    Pos2::new(
                        rect.min.x + stroke.p1.0 as f32,
                        rect.min.y + stroke.p1.1 as f32,
                    ),
                    Pos2::new(
                        rect.min.x + stroke.p2.0 as f32,
                        rect.min.y + stroke.p2.1 as f32,
                    ),
                ],
                Stroke::new(stroke.width, Color32::from_white_alpha(alpha)),
            );
        }
    }
}

impl Default for LinefieldApp {
    fn default() -> Self {
        Self::new()
    }
}

impl eframe::App for LinefieldApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.auto_evolve {
            let elapsed = self.session_start.elapsed().as_secs_f64();
            let remaining = (self.modulator.duration_secs() - elapsed).max(0.0);
            self.modulator.apply(remaining, &mut self.config);
        }

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            self.controls(ui);
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), Sense::hover());
                self.paint_frame(&painter, response.rect);
            });

        // Keep animating even with no input events.
        ctx.request_repaint();
    }
}
