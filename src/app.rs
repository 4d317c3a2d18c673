//! Contains all application code, including application state and drawing logic

mod canvas;
mod plot;
mod schematic;
mod simulation;

use canvas::Canvas;
use plot::{PlotStrip, Trace, positive_range, symmetric_range};
use simulation::{Direction, FieldModel, Simulation, variables};

use egui::{Color32, Pos2, Rangef, Rect, Response, Style, Ui, pos2, vec2};
use std::time::SystemTime;
use strum::IntoEnumIterator;

const MONITOR_REFRESH_RATE: u32 = 60;
// batches per second; one batch is variables::STEPS_PER_RUN model steps,
// which paces playback at roughly real time
const RUN_BATCH_RATE: u32 = 4;
const FRAMES_PER_RUN_BATCH: u32 = MONITOR_REFRESH_RATE / RUN_BATCH_RATE;

pub struct DynamoApp {
    simulation: Simulation,
    paused: bool,
    frame: u32,
    step_count: u32,
    last_n_frames_start: SystemTime,
    last_n_frames_time_micros: f32,
}

impl DynamoApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            simulation: Simulation::new(),
            paused: true,

            frame: 0,
            step_count: variables::STEPS_PER_RUN as u32,
            last_n_frames_start: SystemTime::now(),
            last_n_frames_time_micros: 1e6,
        }
    }

    fn draw_settings(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.label("ω").on_hover_text("Angular speed");
            ui.add(
                egui::Slider::new(
                    &mut self.simulation.omega,
                    variables::ANGULAR_SPEED.min..=variables::ANGULAR_SPEED.max,
                )
                .suffix(" rad/s"),
            );
            if ui.button("↺").on_hover_text("Reset").clicked() {
                self.simulation.omega = variables::ANGULAR_SPEED.default;
            }

            egui::ComboBox::from_id_salt("direction")
                .selected_text(self.simulation.direction.name())
                .show_ui(ui, |ui| {
                    for direction in Direction::iter() {
                        ui.selectable_value(
                            &mut self.simulation.direction,
                            direction,
                            direction.name(),
                        );
                    }
                });

            ui.separator();

            ui.label("B₀").on_hover_text("Peak field strength");
            ui.add(
                egui::Slider::new(
                    &mut self.simulation.b_peak,
                    variables::PEAK_FIELD.min..=variables::PEAK_FIELD.max,
                )
                .suffix(" T"),
            );
            if ui.button("↺").on_hover_text("Reset").clicked() {
                self.simulation.b_peak = variables::PEAK_FIELD.default;
            }

            egui::ComboBox::from_id_salt("field-model")
                .selected_text(self.simulation.field_model.properties().name)
                .show_ui(ui, |ui| {
                    for model in FieldModel::iter() {
                        ui.selectable_value(
                            &mut self.simulation.field_model,
                            model,
                            model.properties().name,
                        )
                        .on_hover_text(model.properties().description);
                    }
                });
        });

        ui.horizontal(|ui| {
            ui.label("w").on_hover_text("Coil width");
            ui.add(
                egui::Slider::new(
                    &mut self.simulation.coil.width,
                    variables::COIL_WIDTH.min..=variables::COIL_WIDTH.max,
                )
                .suffix(" m"),
            );
            if ui.button("↺").on_hover_text("Reset").clicked() {
                self.simulation.coil.width = variables::COIL_WIDTH.default;
            }

            ui.label("h").on_hover_text("Coil height");
            ui.add(
                egui::Slider::new(
                    &mut self.simulation.coil.height,
                    variables::COIL_HEIGHT.min..=variables::COIL_HEIGHT.max,
                )
                .suffix(" m"),
            );
            if ui.button("↺").on_hover_text("Reset").clicked() {
                self.simulation.coil.height = variables::COIL_HEIGHT.default;
            }

            ui.label("N").on_hover_text("Number of turns");
            ui.add(egui::Slider::new(
                &mut self.simulation.coil.turns,
                variables::TURNS_MIN..=variables::TURNS_MAX,
            ));
            if ui.button("↺").on_hover_text("Reset").clicked() {
                self.simulation.coil.turns = variables::TURNS_DEFAULT;
            }

            ui.separator();

            ui.label("Max t").on_hover_text("Run duration cap, seconds");
            ui.add(
                egui::DragValue::new(&mut self.simulation.max_run_time)
                    .range(variables::MAX_RUN_TIME.min..=variables::MAX_RUN_TIME.max)
                    .suffix(" s"),
            );
        });

        ui.horizontal(|ui| {
            ui.label("θ").on_hover_text("Coil angle; dragging overrides the rotation");
            let mut angle_deg = self.simulation.angle().to_degrees().rem_euclid(360.0);
            let dragged = ui
                .add(egui::Slider::new(&mut angle_deg, 0.0..=360.0).suffix("°"))
                .changed();
            if dragged {
                self.simulation.set_angle(angle_deg.to_radians());
            }

            ui.separator();

            ui.label(format!("B⊥ {:+.3} T", self.simulation.perpendicular_field()));
            ui.label(format!("Φ {:+.4} Wb", self.simulation.current_flux()));
            ui.label(format!("output {:.4} V", self.simulation.dc_output()));
        });
    }

    fn draw_controls(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            if ui
                .add_enabled(self.paused, egui::Button::new("▶"))
                .on_hover_text("Play simulation")
                .clicked()
            {
                if self.simulation.finished() {
                    self.simulation.reset();
                }
                self.simulation.start();
                self.paused = false;
            }
            if ui
                .add_enabled(!self.paused, egui::Button::new("⏸"))
                .on_hover_text("Pause simulation")
                .clicked()
            {
                self.simulation.stop();
                self.paused = true;
            }
            if ui
                .add_enabled(self.simulation.elapsed() > 0.0, egui::Button::new("⟲"))
                .on_hover_text("Restart simulation")
                .clicked()
            {
                self.paused = true;
                self.simulation.reset();
                self.frame = 0;
            }
            if ui
                .add_enabled(self.paused, egui::Button::new("⏭"))
                .on_hover_text("Advance simulation by one step")
                .clicked()
            {
                for _ in 0..self.step_count {
                    self.simulation.step();
                }
            }
            ui.add(egui::DragValue::new(&mut self.step_count).range(1..=100))
                .on_hover_text("Number of model steps to advance per step");

            ui.separator();

            ui.label(format!(
                "t = {:.2} s{}",
                self.simulation.elapsed(),
                if self.simulation.finished() {
                    "  (run complete)"
                } else {
                    ""
                }
            ));

            ui.separator();

            ui.label(format!("{0:.0} FPS", 6e7 / self.last_n_frames_time_micros));
        });
    }

    fn draw_plots(&self, ui: &Ui, extent: Rect) {
        const MARGIN: f32 = 12.0;
        let strip_height = ((extent.height() - 4.0 * MARGIN) / 3.0).max(10.0);

        let simulation = &self.simulation;
        let t_range = Rangef::new(
            0.0,
            simulation.max_run_time.max(simulation.elapsed()).max(1e-3),
        );
        let field = simulation.field_strength();
        let flux_amplitude = simulation.coil.peak_flux(field);
        let emf_amplitude = simulation.coil.peak_emf(field, simulation.omega);

        for (i, trace) in Trace::iter().enumerate() {
            let rect = Rect::from_min_size(
                pos2(
                    extent.left() + MARGIN,
                    extent.top() + MARGIN + i as f32 * (strip_height + MARGIN),
                ),
                vec2(extent.width() - 2.0 * MARGIN, strip_height),
            );
            let y_range = match trace {
                Trace::Flux => symmetric_range(flux_amplitude),
                Trace::Emf => symmetric_range(emf_amplitude),
                Trace::DcOutput => positive_range(emf_amplitude),
            };

            let strip = PlotStrip::new(ui, rect, t_range, y_range);
            let properties = trace.properties();
            strip.draw_frame(properties.name);

            if trace == Trace::Emf {
                // closed-form AC curve as a reference under the estimate
                let analytic: Vec<f32> = simulation
                    .times()
                    .iter()
                    .map(|t| {
                        simulation.coil.analytic_emf(
                            field,
                            simulation.signed_omega(),
                            simulation.signed_omega() * t,
                        )
                    })
                    .collect();
                strip.draw_series(
                    simulation.times(),
                    &analytic,
                    1.0,
                    Color32::from_rgb(110, 110, 110),
                );
            }

            let values = match trace {
                Trace::Flux => simulation.flux_samples(),
                Trace::Emf => simulation.emf_samples(),
                Trace::DcOutput => simulation.output_samples(),
            };
            let (r, g, b) = properties.colour;
            strip.draw_series(simulation.times(), values, 2.0, Color32::from_rgb(r, g, b));
            strip.draw_cursor(simulation.elapsed());
        }
    }
}

impl eframe::App for DynamoApp {
    /// Called each time the UI needs repainting
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.frame % MONITOR_REFRESH_RATE == MONITOR_REFRESH_RATE - 1 {
            self.last_n_frames_time_micros =
                self.last_n_frames_start.elapsed().unwrap().as_micros() as f32;
            self.last_n_frames_start = SystemTime::now();
        }

        if !self.paused && (self.frame % FRAMES_PER_RUN_BATCH == 0) {
            if self.simulation.run() {
                // time cap reached, leave the traces on screen
                self.paused = true;
            }
        }

        // draws parameter controls at the top of the window
        let settings = egui::TopBottomPanel::top("settings");
        let settings_drawn: Response = settings
            .show(ctx, |ui| {
                self.draw_settings(ui);
            })
            .response;

        let controls = egui::TopBottomPanel::bottom("controls");
        let controls_drawn: Response = controls
            .show(ctx, |ui| {
                self.draw_controls(ui);
            })
            .response;

        let canvas_extent = Rect::from_two_pos(
            Pos2::new(ctx.screen_rect().left(), settings_drawn.rect.bottom()),
            Pos2::new(ctx.screen_rect().right(), controls_drawn.rect.top()),
        );
        let split_x = canvas_extent.left() + 0.55 * canvas_extent.width();
        let schematic_extent =
            Rect::from_two_pos(canvas_extent.left_top(), pos2(split_x, canvas_extent.bottom()));
        let plots_extent =
            Rect::from_two_pos(pos2(split_x, canvas_extent.top()), canvas_extent.right_bottom());

        // draws the schematic and the plot stack in the main panel
        let style = Style::default();
        let _ = egui::CentralPanel::default()
            .frame(egui::Frame::canvas(&style))
            .show(ctx, |ui| {
                let canvas = Canvas::new(
                    ui,
                    schematic_extent,
                    Rangef::new(-schematic::WORLD_HALF_WIDTH, schematic::WORLD_HALF_WIDTH),
                );

                canvas.draw_grid_lines();
                canvas.draw_axes();
                schematic::draw(&canvas, &self.simulation);

                self.draw_plots(ui, plots_extent);
            })
            .response;

        self.frame += 1;

        ctx.request_repaint();
    }
}
