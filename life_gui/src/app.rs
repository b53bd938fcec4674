// app.rs - egui front end: control row, painted cell grid, input routing

use std::time::{Duration, Instant};

use eframe::egui;
use egui::{Color32, Rect, Sense, Stroke, Vec2};

use life::labels::LabelRegistry;
use life::{CellPaint, Density, GridEngine, Rotation, Session, Universe};

const CELL_SIZE: f32 = 12.0;
const CELL_SPACING: f32 = 1.0;

const ALIVE_COLOR: Color32 = Color32::from_rgb(0, 200, 0);
const DEAD_COLOR: Color32 = Color32::from_rgb(90, 40, 40);
const EMPTY_COLOR: Color32 = Color32::from_rgb(25, 25, 25);
const PREVIEW_COLOR: Color32 = Color32::from_rgb(70, 130, 200);

pub struct LifeApp {
    session: Session<Universe>,
    labels: LabelRegistry,
    width_input: u32,
    height_input: u32,
    speed_ms: u64,
    density: Density,
    hovering_grid: bool,
}

impl LifeApp {
    pub fn new(session: Session<Universe>, labels: LabelRegistry) -> Self {
        let width_input = session.engine().width();
        let height_input = session.engine().height();
        Self {
            session,
            labels,
            width_input,
            height_input,
            speed_ms: 100,
            density: Density::Medium,
            hovering_grid: false,
        }
    }

    fn density_name(&self, density: Density) -> &str {
        match density {
            Density::Low => self.labels.current_label("ctrls.density.low"),
            Density::Medium => self.labels.current_label("ctrls.density.medium"),
            Density::High => self.labels.current_label("ctrls.density.high"),
        }
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        let editing = !self.session.is_running();

        ui.horizontal(|ui| {
            if editing {
                if ui
                    .button(self.labels.current_label("ctrls.play"))
                    .clicked()
                {
                    self.session
                        .play_universe(Instant::now(), Duration::from_millis(self.speed_ms));
                }
            } else if ui
                .button(self.labels.current_label("ctrls.stop"))
                .clicked()
            {
                self.session.stop_universe();
            }

            ui.separator();

            ui.add_enabled_ui(editing, |ui| {
                ui.label(self.labels.current_label("ctrls.width"));
                ui.add(egui::DragValue::new(&mut self.width_input).clamp_range(1..=300));
                ui.label(self.labels.current_label("ctrls.height"));
                ui.add(egui::DragValue::new(&mut self.height_input).clamp_range(1..=200));
                if ui
                    .button(self.labels.current_label("ctrls.apply"))
                    .clicked()
                {
                    self.session.update_universe(self.width_input, self.height_input);
                }

                ui.separator();

                let choices = [Density::Low, Density::Medium, Density::High]
                    .map(|d| (d, self.density_name(d).to_string()));
                egui::ComboBox::from_id_source("density_selector")
                    .selected_text(self.density_name(self.density).to_string())
                    .show_ui(ui, |ui| {
                        for (density, name) in choices {
                            ui.selectable_value(&mut self.density, density, name);
                        }
                    });
                if ui
                    .button(self.labels.current_label("ctrls.random"))
                    .clicked()
                {
                    self.session.random_universe(self.density);
                }
            });
        });

        ui.horizontal(|ui| {
            ui.label(self.labels.current_label("ctrls.speed"));
            if ui
                .add(egui::Slider::new(&mut self.speed_ms, 10..=1000).suffix(" ms"))
                .changed()
            {
                // Applies when the next tick is armed, never mid-flight.
                self.session.set_interval(Duration::from_millis(self.speed_ms));
            }

            ui.separator();

            ui.add_enabled_ui(!self.session.is_running(), |ui| {
                let mut circular = self.session.is_circular();
                if ui
                    .checkbox(&mut circular, self.labels.current_label("ctrls.circular"))
                    .changed()
                {
                    self.session.set_circular_universe(circular);
                }

                let mut display_dead = self.session.display_dead();
                if ui
                    .checkbox(
                        &mut display_dead,
                        self.labels.current_label("ctrls.display_dead"),
                    )
                    .changed()
                {
                    self.session.set_display_dead(display_dead);
                }

                self.pattern_selector(ui);
            });

            ui.separator();
            let mut lang = self.labels.current_language().to_string();
            egui::ComboBox::from_id_source("language_selector")
                .selected_text(lang.clone())
                .show_ui(ui, |ui| {
                    for l in self.labels.languages() {
                        let l = l.to_string();
                        ui.selectable_value(&mut lang, l.clone(), l);
                    }
                });
            if lang != self.labels.current_language() {
                self.labels.set_language(&lang);
            }
        });
    }

    fn pattern_selector(&mut self, ui: &mut egui::Ui) {
        ui.label(self.labels.current_label("ctrls.patterns"));
        let mut selected = self.session.selected_key().to_string();
        let selected_text = self.session.selected_pattern().name.clone();
        egui::ComboBox::from_id_source("pattern_selector")
            .selected_text(selected_text)
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut selected, life::pattern::POINTER_KEY.to_string(), "Pointer");
                for group in self.session.catalog().groups() {
                    let group_label = self
                        .labels
                        .current_label(&format!("ctrls.patterns.{}", group.id))
                        .to_string();
                    ui.label(egui::RichText::new(group_label).strong());
                    for (key, name) in &group.entries {
                        ui.selectable_value(&mut selected, key.clone(), name.as_str());
                    }
                }
            });
        if selected != self.session.selected_key() {
            if let Err(err) = self.session.select_pattern(&selected) {
                // Selector entries come from the catalog, so this is fatal.
                log::error!("pattern selection failed: {err}");
                std::process::exit(1);
            }
        }
    }

    fn grid(&mut self, ui: &mut egui::Ui) {
        let width = self.session.view().width();
        let height = self.session.view().height();
        let pitch = CELL_SIZE + CELL_SPACING;
        let total = Vec2::new(
            pitch * width as f32 - CELL_SPACING,
            pitch * height as f32 - CELL_SPACING,
        );

        let (response, painter) = ui.allocate_painter(total, Sense::click());
        let origin = response.rect.min;

        // Route pointer position into the session before painting, so the
        // preview shows up in the same frame.
        let hovered_cell = response.hover_pos().and_then(|pos| {
            let cx = ((pos.x - origin.x) / pitch).floor();
            let cy = ((pos.y - origin.y) / pitch).floor();
            if cx < 0.0 || cy < 0.0 || cx >= width as f32 || cy >= height as f32 {
                None
            } else {
                Some((cx as u32, cy as u32))
            }
        });
        match hovered_cell {
            Some((x, y)) => {
                self.session.hover(x, y);
                self.hovering_grid = true;
                if response.clicked() {
                    self.session.click(x, y);
                }
            }
            None => {
                if self.hovering_grid {
                    self.session.leave();
                    self.hovering_grid = false;
                }
            }
        }

        for y in 0..height {
            for x in 0..width {
                let rect = Rect::from_min_size(
                    egui::pos2(origin.x + x as f32 * pitch, origin.y + y as f32 * pitch),
                    Vec2::splat(CELL_SIZE),
                );
                let color = match self.session.view().get(x, y) {
                    CellPaint::Alive => ALIVE_COLOR,
                    CellPaint::Dead => DEAD_COLOR,
                    CellPaint::Preview => PREVIEW_COLOR,
                    CellPaint::Empty => EMPTY_COLOR,
                };
                painter.rect_filled(rect, 1.0, color);
                painter.rect_stroke(rect, 1.0, Stroke::new(0.2, Color32::from_gray(60)));
            }
        }
    }
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.session.poll(Instant::now());

        // Rotate keys: A counter-clockwise, D clockwise.
        if ctx.input(|i| i.key_pressed(egui::Key::A)) {
            self.session.rotate(Rotation::CounterClockwise);
        }
        if ctx.input(|i| i.key_pressed(egui::Key::D)) {
            self.session.rotate(Rotation::Clockwise);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(self.labels.current_label("title"));
            self.controls(ui);
            ui.separator();

            ui.horizontal(|ui| {
                ui.label(format!(
                    "{}: {}",
                    self.labels.current_label("stats.generation"),
                    self.session.generation()
                ));
                ui.separator();
                ui.label(format!(
                    "{}: {}",
                    self.labels.current_label("stats.population"),
                    self.session.population()
                ));
            });
            ui.separator();

            egui::ScrollArea::both().show(ui, |ui| {
                self.grid(ui);
            });
        });

        if self.session.is_running() {
            ctx.request_repaint();
        }
    }
}
