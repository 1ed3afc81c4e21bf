use egui::{Color32, ComboBox, Sense};

use crate::PaintApp;
use crate::color::{PALETTE, color_name};
use crate::command::Command;
use crate::components::ToolButton;
use crate::tools::{MAX_BRUSH_WIDTH, MIN_BRUSH_WIDTH, Tool};

const CUSTOM_COLOR: &str = "Custom...";

pub fn tools_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("tools_panel")
        .resizable(false)
        .show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal_top(|ui| {
                properties_group(app, ui);
                ui.separator();
                shapes_group(app, ui);
                ui.separator();
                actions_group(app, ui);
            });
            ui.add_space(4.0);
        });
}

fn properties_group(app: &mut PaintApp, ui: &mut egui::Ui) {
    ui.vertical(|ui| {
        ui.strong("Properties:");

        ui.horizontal(|ui| {
            if ui.button("Custom Color...").clicked() {
                app.open_color_dialog();
            }
            if ui.button("Color Picker").clicked() {
                app.select_picker_button();
            }
        });

        ui.horizontal(|ui| {
            ui.label("Color:");
            let current = app.settings().color();
            let selected_text = color_name(current).unwrap_or(CUSTOM_COLOR);
            let mut choice = None;
            ComboBox::from_id_salt("color_choice")
                .selected_text(selected_text)
                .show_ui(ui, |ui| {
                    for (name, color) in PALETTE {
                        if ui.selectable_label(current == color, name).clicked() {
                            choice = Some(Command::SetColor(color));
                        }
                    }
                    if ui.selectable_label(false, CUSTOM_COLOR).clicked() {
                        app.open_color_dialog();
                    }
                });
            if let Some(cmd) = choice {
                app.execute_command(cmd);
            }

            let (rect, _) = ui.allocate_exact_size(egui::vec2(60.0, 25.0), Sense::hover());
            ui.painter().rect_filled(rect, 2.0, current);
            ui.painter()
                .rect_stroke(rect, 2.0, egui::Stroke::new(1.0, Color32::GRAY));
        });

        ui.horizontal(|ui| {
            ui.label("Brush Size:");
            let width = app.settings().brush_width();
            let mut new_width = None;
            ComboBox::from_id_salt("brush_choice")
                .selected_text(width.to_string())
                .width(48.0)
                .show_ui(ui, |ui| {
                    for w in MIN_BRUSH_WIDTH..=MAX_BRUSH_WIDTH {
                        if ui.selectable_label(w == width, w.to_string()).clicked() {
                            new_width = Some(w);
                        }
                    }
                });
            if let Some(w) = new_width {
                app.execute_command(Command::SetBrushWidth(w));
            }

            ui.label("Tool:");
            let shown = app.tool_choice();
            let mut picked = None;
            ComboBox::from_id_salt("tool_choice")
                .selected_text(shown.label())
                .show_ui(ui, |ui| {
                    for tool in Tool::PAINT_TOOLS {
                        if ui.selectable_label(shown == tool, tool.label()).clicked() {
                            picked = Some(tool);
                        }
                    }
                });
            if let Some(tool) = picked {
                app.select_tool_choice(tool);
            }
        });
    });
}

fn shapes_group(app: &mut PaintApp, ui: &mut egui::Ui) {
    ui.vertical(|ui| {
        ui.strong("Shapes:");
        ui.horizontal(|ui| {
            let active = app.settings().tool;
            for tool in Tool::SHAPE_TOOLS {
                if ToolButton::new(tool, active == tool).show(ui).clicked() {
                    log::info!("Tool selected from UI: {}", tool.label());
                    app.select_shape_tool(tool);
                }
            }
        });
    });
}

fn actions_group(app: &mut PaintApp, ui: &mut egui::Ui) {
    ui.vertical(|ui| {
        ui.strong("Actions:");
        ui.horizontal(|ui| {
            if ui.button("Clear").clicked() {
                app.execute_command(Command::Clear);
            }

            let can_undo = app.canvas().can_undo();
            let can_redo = app.canvas().can_redo();
            if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                app.execute_command(Command::Undo);
            }
            if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                app.execute_command(Command::Redo);
            }

            if ui.button("Save").clicked() {
                app.save_with_dialog();
            }
            if ui.button("Load").clicked() {
                app.load_with_dialog();
            }
        });

        let history = app.canvas().history();
        ui.label(format!(
            "Undo: {}/{}  Redo: {}",
            history.undo_len(),
            history.capacity(),
            history.redo_len()
        ));
    });
}
