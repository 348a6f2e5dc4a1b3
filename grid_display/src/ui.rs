// ui.rs - egui drawing for GridApp

use conway::MIN_GRID;
use conway::patterns::PATTERNS;
use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};

use crate::GridApp;

const MAX_EDGE: i64 = 200;
const BOARD_PIXELS: f32 = 760.0;

impl eframe::App for GridApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Seeded Game of Life");

            // Parameters
            ui.horizontal(|ui| {
                ui.label("Height:");
                ui.add(egui::DragValue::new(&mut self.params.height).clamp_range(MIN_GRID as i64..=MAX_EDGE));
                ui.label("Width:");
                ui.add(egui::DragValue::new(&mut self.params.width).clamp_range(MIN_GRID as i64..=MAX_EDGE));
                ui.label("Seed:");
                ui.add(egui::DragValue::new(&mut self.params.seed));
                ui.label("Generations:");
                ui.add(egui::DragValue::new(&mut self.params.iterations).clamp_range(0..=10_000));
            });

            // Controls
            ui.horizontal(|ui| {
                if ui.button("▶ Play").clicked() {
                    self.play();
                }

                if ui.button("⏩ Advance").clicked() {
                    self.advance_current();
                }

                if ui.button("⏹ Clear").clicked() {
                    self.clear_grid();
                }

                ui.separator();

                // Pattern dropdown
                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });

                if ui.button("Apply Pattern").clicked() {
                    self.apply_selected_pattern();
                }
            });

            ui.horizontal(|ui| {
                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.dead_color);
            });

            if let Some(error) = &self.error {
                ui.colored_label(Color32::from_rgb(220, 80, 80), error.as_str());
            }

            ui.separator();
            ui.label("Click cells to toggle them, then Advance to run the board you drew.");
            ui.separator();

            let mut clicked = None;
            if let Some(grid) = &self.grid {
                let spacing = 0.5;
                let edge = grid.height().max(grid.width()) as f32;
                let box_size = (BOARD_PIXELS / edge - spacing).clamp(2.0, 15.0);

                let start_pos = ui.cursor().min;
                let total_size = Vec2::new(
                    (box_size + spacing) * grid.width() as f32 - spacing,
                    (box_size + spacing) * grid.height() as f32 - spacing,
                );

                let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());

                // Fill background
                painter.rect_filled(Rect::from_min_size(start_pos, total_size), 0.0, Color32::BLACK);

                let pointer = response
                    .clicked()
                    .then(|| response.interact_pointer_pos())
                    .flatten();

                for (row, cells) in grid.rows().enumerate() {
                    for (col, &alive) in cells.iter().enumerate() {
                        let x = start_pos.x + col as f32 * (box_size + spacing);
                        let y = start_pos.y + row as f32 * (box_size + spacing);
                        let rect = Rect::from_min_size(egui::pos2(x, y), Vec2::splat(box_size));

                        let cell_color = if alive { self.live_color } else { self.dead_color };
                        painter.rect_filled(rect, 1.0, cell_color);
                        painter.rect_stroke(rect, 1.0, Stroke::new(0.2, Color32::from_gray(60)));

                        if pointer.is_some_and(|pos| rect.contains(pos)) {
                            clicked = Some((row, col));
                        }
                    }
                }
            }
            if let Some((row, col)) = clicked {
                self.toggle_cell(row, col);
            }

            ui.separator();

            if let Some(stats) = self.stats() {
                ui.horizontal(|ui| {
                    ui.label(format!("Live cells: {}", stats.live));
                    ui.label(format!("Dead cells: {}", stats.dead));
                    ui.label(format!("Population: {:.1}%", stats.population));
                });
            }
        });
    }
}
