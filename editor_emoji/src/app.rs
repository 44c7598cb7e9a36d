use eframe::egui::{self, Layout};
use eframe::Frame;
use egui::{Color32, Pos2, Rect, Sense, Stroke, Vec2};
use lib_emoji::constants::GRID_SIZE;
use lib_emoji::{PixelGrid, Rgb};
use log::error;

use crate::filemanager::{self, FileError};

pub const CELL_SIZE: f32 = 30.0;

const DEFAULT_COLORS: &[Color32] = &[
    Color32::BLACK,
    Color32::RED,
    Color32::GREEN,
    Color32::BLUE,
    Color32::YELLOW,
    Color32::from_rgb(255, 128, 0),
    Color32::from_rgb(128, 0, 255),
    Color32::from_rgb(128, 64, 0),
];

fn to_rgb(color: Color32) -> Rgb {
    Rgb::new(color.r(), color.g(), color.b())
}

fn to_color32(color: Rgb) -> Color32 {
    Color32::from_rgb(color.r, color.g, color.b)
}

pub struct EmojiEditor {
    grid: PixelGrid,
    current_color: Color32,
    emoji_name: String,
    status: Option<String>,
}

impl EmojiEditor {
    pub fn new() -> Self {
        Self {
            grid: PixelGrid::new(),
            current_color: Color32::BLACK,
            emoji_name: String::new(),
            status: None,
        }
    }

    fn paint_at(&mut self, origin: Pos2, pos: Pos2, color: Rgb) {
        let col = ((pos.x - origin.x) / CELL_SIZE).floor() as i32;
        let row = ((pos.y - origin.y) / CELL_SIZE).floor() as i32;
        if row < 0 || col < 0 {
            return;
        }

        // Strokes that wander off the canvas are simply ignored
        let _ = self.grid.set_pixel(row as usize, col as usize, color);
    }

    fn handle_load(&mut self) {
        match filemanager::open_emoji() {
            Ok(grid) => {
                // The parsed grid replaces the live one in a single
                // swap; a failed load never gets this far
                self.grid = grid;
                self.status = Some("Emoji loaded successfully".to_string());
            }
            Err(FileError::DialogCanceled) => {}
            Err(e) => {
                error!("Failed to load emoji: {}", e);
                self.status = Some(format!("Load failed: {}", e));
            }
        }
    }

    fn handle_export(&mut self) {
        match filemanager::save_emoji(&self.grid, &self.emoji_name) {
            Ok(path) => self.status = Some(format!("Emoji saved as {}", path)),
            Err(FileError::DialogCanceled) => {}
            Err(e) => {
                error!("Failed to export emoji: {}", e);
                self.status = Some(format!("Export failed: {}", e));
            }
        }
    }

    fn draw_toolbar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Name:");
                ui.add(
                    egui::TextEdit::singleline(&mut self.emoji_name)
                        .hint_text("e.g. Happy Face")
                        .desired_width(160.0),
                );

                if ui.button("📂 Load Emoji").clicked() {
                    self.handle_load();
                }

                if ui.button("Export Emoji").clicked() {
                    self.handle_export();
                }

                ui.separator();

                if let Some(status) = &self.status {
                    ui.label(status);
                }
            });
        });
    }

    fn draw_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let canvas_size = Vec2::splat(CELL_SIZE * GRID_SIZE as f32);
            let (response, painter) = ui.allocate_painter(canvas_size, Sense::click_and_drag());
            let origin = response.rect.min;

            for row in 0..GRID_SIZE {
                for col in 0..GRID_SIZE {
                    let cell = self.grid.pixel(row, col).unwrap_or(Rgb::WHITE);
                    let min = origin + Vec2::new(col as f32 * CELL_SIZE, row as f32 * CELL_SIZE);
                    let cell_rect = Rect::from_min_size(min, Vec2::splat(CELL_SIZE));

                    painter.rect_filled(cell_rect, 0.0, to_color32(cell));
                    painter.rect_stroke(cell_rect, 0.0, Stroke::new(0.5, Color32::GRAY));
                }
            }

            let input = ui.input(|i| i.clone());

            // Left click/drag paints, right click/drag erases to white
            if response.clicked() || (response.dragged() && input.pointer.primary_down()) {
                if let Some(pos) = input.pointer.hover_pos() {
                    self.paint_at(origin, pos, to_rgb(self.current_color));
                }
            }

            if response.secondary_clicked() || (response.dragged() && input.pointer.secondary_down())
            {
                if let Some(pos) = input.pointer.hover_pos() {
                    self.paint_at(origin, pos, Rgb::WHITE);
                }
            }
        });
    }

    fn draw_side_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("color_panel")
            .resizable(false)
            .min_width(200.0)
            .max_width(200.0)
            .show(ctx, |ui| {
                ui.heading("Color Palette");
                ui.add_space(8.0);

                ui.label("Current Color:");
                let color_size = Vec2::new(ui.available_width(), 30.0);
                ui.allocate_ui_with_layout(
                    color_size,
                    Layout::left_to_right(egui::Align::Center),
                    |ui| {
                        ui.color_edit_button_srgba(&mut self.current_color);
                    },
                );
                ui.add_space(8.0);

                ui.label("Colors:");
                ui.add_space(4.0);

                let swatch_size = Vec2::new(30.0, 30.0);
                for chunk in DEFAULT_COLORS.chunks(4) {
                    ui.horizontal(|ui| {
                        for &color in chunk {
                            let stroke = if self.current_color == color {
                                Stroke::new(4.0, Color32::WHITE)
                            } else {
                                Stroke::new(1.0, Color32::WHITE)
                            };

                            if ui
                                .add(
                                    egui::Button::new("")
                                        .fill(color)
                                        .stroke(stroke)
                                        .min_size(swatch_size),
                                )
                                .clicked()
                            {
                                self.current_color = color;
                            }
                        }
                    });
                }

                ui.add_space(8.0);
                if ui.button("Clear Canvas").clicked() {
                    self.grid.clear();
                }

                ui.add_space(16.0);
                ui.label("Controls:");
                ui.label("• Left click to draw");
                ui.label("• Right click to erase");
            });
    }
}

impl Default for EmojiEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl eframe::App for EmojiEditor {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.draw_toolbar(ctx);
        self.draw_side_panel(ctx);
        self.draw_central_panel(ctx);
    }
}
