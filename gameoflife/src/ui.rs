// ui.rs - egui front-end: controls, foreground grid, ambient backdrop

use std::time::Instant;

use automaton::{CellCoord, PointerKind, ToolMode};
use eframe::egui;
use egui::{Color32, Painter, Pos2, Rect, Stroke, Vec2};

use crate::app::GameOfLife;

const SPACING: f32 = 1.0;

impl eframe::App for GameOfLife {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.dispatch_ticks();

        let screen = ctx.screen_rect();
        self.track_viewport(screen.size(), now);
        if let Some(wait) = self.resize.remaining(now) {
            ctx.request_repaint_after(wait);
        }

        self.draw_background(&ctx.layer_painter(egui::LayerId::background()), screen);

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading("Conway's Game of Life");
                    ui.add_space(4.0);
                    self.controls(ui);
                    ui.add_space(8.0);
                    if self.grid_view(ui) {
                        ctx.request_repaint();
                    }
                    ui.add_space(4.0);
                    self.status(ui);
                });
            });
    }
}

impl GameOfLife {
    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let label = if self.foreground.is_playing() { "⏸ Pause" } else { "▶ Play" };
            if ui.button(label).clicked() {
                self.toggle_play_pause();
            }

            if ui.button("⏹ Clear").clicked() {
                self.clear();
            }

            ui.separator();

            let tool = self.foreground.tool();
            if ui.selectable_label(tool == ToolMode::Brush, "Brush").clicked() {
                self.select_tool(ToolMode::Brush);
            }
            if ui.selectable_label(tool == ToolMode::Eraser, "Eraser").clicked() {
                self.select_tool(ToolMode::Eraser);
            }
        });
    }

    /// Draws the foreground grid and feeds it pointer input. Returns true
    /// when a stroke changed a cell.
    fn grid_view(&mut self, ui: &mut egui::Ui) -> bool {
        let box_size = self.dimensions.cell_size as f32;
        let pitch = box_size + SPACING;
        let dimension = self.foreground.grid().rows();
        let total_size = Vec2::splat(pitch * dimension as f32 - SPACING);

        let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click_and_drag());
        let rect = response.rect;

        // Release is tracked everywhere, not just over the grid.
        let (pressed, down, released, pos) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_down(),
                i.pointer.primary_released(),
                i.pointer.interact_pos(),
            )
        });
        let coord = pos.and_then(|p| cell_at(rect, pitch, dimension, p));

        let mut changed = false;
        if pressed {
            changed |= self.pointer(PointerKind::Press, coord);
        } else if down {
            changed |= self.pointer(PointerKind::DragOver, coord);
        }
        if released {
            self.release_pointer();
        }

        painter.rect_filled(rect, 0.0, Color32::BLACK);
        for visual in self.fg_canvas.cells() {
            let cell = Rect::from_min_size(
                rect.min + Vec2::new(visual.col as f32 * pitch, visual.row as f32 * pitch),
                Vec2::splat(box_size),
            );
            let color = if visual.alive { self.live_color } else { self.dead_color };
            painter.rect_filled(cell, 1.0, color);
            painter.rect_stroke(cell, 1.0, Stroke::new(0.2, Color32::from_gray(60)));
        }

        changed
    }

    /// Only the cells needed to cover the screen are painted.
    fn draw_background(&self, painter: &Painter, screen: Rect) {
        let pitch = self.background_cell_size();
        let cell = Vec2::splat(pitch - SPACING);
        for visual in self.bg_canvas.cells() {
            if !visual.alive || visual.row >= self.coverage.rows || visual.col >= self.coverage.cols {
                continue;
            }
            let min = screen.min + Vec2::new(visual.col as f32 * pitch, visual.row as f32 * pitch);
            painter.rect_filled(Rect::from_min_size(min, cell), 2.0, self.ambient_color);
        }
    }

    fn status(&self, ui: &mut egui::Ui) {
        let grid = self.foreground.grid();
        let total = grid.rows() * grid.cols();
        let live = grid.population();
        ui.horizontal(|ui| {
            ui.label(format!("Generation: {}", self.foreground.generation()));
            ui.separator();
            ui.label(format!("Live cells: {live}"));
            ui.separator();
            ui.label(format!("Population: {:.1}%", live as f32 / total.max(1) as f32 * 100.0));
            ui.separator();
            ui.label(format!("Grid: {}×{}", grid.rows(), grid.cols()));
        });
    }
}

/// Maps a pointer position to a grid cell; gaps belong to the cell before them.
fn cell_at(rect: Rect, pitch: f32, dimension: usize, pos: Pos2) -> Option<CellCoord> {
    if !rect.contains(pos) || pitch <= 0.0 {
        return None;
    }
    let col = ((pos.x - rect.min.x) / pitch).floor() as usize;
    let row = ((pos.y - rect.min.y) / pitch).floor() as usize;
    (row < dimension && col < dimension).then(|| CellCoord::new(row, col))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_rect() -> Rect {
        Rect::from_min_size(Pos2::new(100.0, 50.0), Vec2::splat(10.0 * 13.0 - 1.0))
    }

    #[test]
    fn pointer_maps_to_cells() {
        let rect = grid_rect();
        assert_eq!(cell_at(rect, 13.0, 10, Pos2::new(100.0, 50.0)), Some(CellCoord::new(0, 0)));
        assert_eq!(cell_at(rect, 13.0, 10, Pos2::new(127.0, 64.0)), Some(CellCoord::new(1, 2)));
        assert_eq!(cell_at(rect, 13.0, 10, Pos2::new(228.0, 178.0)), Some(CellCoord::new(9, 9)));
    }

    #[test]
    fn pointer_outside_grid_has_no_cell() {
        let rect = grid_rect();
        assert_eq!(cell_at(rect, 13.0, 10, Pos2::new(99.0, 60.0)), None);
        assert_eq!(cell_at(rect, 13.0, 10, Pos2::new(150.0, 400.0)), None);
    }
}
