use eframe::egui::{self, Color32, ColorImage, Sense, TextureHandle, TextureOptions};

use crate::color::gradient_color_at;

pub const GRADIENT_WIDTH: u32 = 350;
pub const GRADIENT_HEIGHT: u32 = 250;

/// How the user closed the dialog this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogOutcome {
    Accepted(Color32),
    Cancelled,
}

/// Modal window for picking an arbitrary color from an HSB gradient
#[derive(Default)]
pub struct ColorDialog {
    open: bool,
    selected: Color32,
    gradient: Option<TextureHandle>,
}

impl std::fmt::Debug for ColorDialog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColorDialog")
            .field("open", &self.open)
            .field("selected", &self.selected)
            .finish()
    }
}

impl ColorDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Open with black preselected
    pub fn open(&mut self) {
        self.open = true;
        self.selected = Color32::BLACK;
    }

    pub fn selected(&self) -> Color32 {
        self.selected
    }

    /// Select the gradient color at `(x, y)`; clicks outside the gradient are ignored
    pub fn select_at(&mut self, x: i32, y: i32) {
        if let Some(color) = gradient_color_at(x, y, GRADIENT_WIDTH, GRADIENT_HEIGHT) {
            self.selected = color;
        }
    }

    /// Label under the preview swatch
    pub fn rgb_label(&self) -> String {
        format!("RGB: {}, {}, {}", self.selected.r(), self.selected.g(), self.selected.b())
    }

    fn gradient_texture(&mut self, ctx: &egui::Context) -> TextureHandle {
        self.gradient
            .get_or_insert_with(|| {
                let (w, h) = (GRADIENT_WIDTH as usize, GRADIENT_HEIGHT as usize);
                let mut image = ColorImage::new([w, h], Color32::BLACK);
                for y in 0..h {
                    for x in 0..w {
                        if let Some(color) = gradient_color_at(x as i32, y as i32, GRADIENT_WIDTH, GRADIENT_HEIGHT) {
                            image.pixels[y * w + x] = color;
                        }
                    }
                }
                ctx.load_texture("hsb_gradient", image, TextureOptions::NEAREST)
            })
            .clone()
    }

    /// Draw the dialog if open. Returns the outcome on the frame it closes.
    pub fn show(&mut self, ctx: &egui::Context) -> Option<DialogOutcome> {
        if !self.open {
            return None;
        }

        let texture = self.gradient_texture(ctx);
        let mut outcome = None;

        egui::Window::new("Choose Custom Color")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let size = egui::vec2(GRADIENT_WIDTH as f32, GRADIENT_HEIGHT as f32);
                    let response = ui.add(egui::Image::new((texture.id(), size)).sense(Sense::click_and_drag()));
                    if response.clicked() || response.dragged() {
                        if let Some(pos) = response.interact_pointer_pos() {
                            let local = pos - response.rect.min;
                            self.select_at(local.x.floor() as i32, local.y.floor() as i32);
                        }
                    }

                    ui.vertical(|ui| {
                        ui.label("Selected Color:");
                        let (rect, _) = ui.allocate_exact_size(egui::vec2(80.0, 80.0), Sense::hover());
                        ui.painter().rect_filled(rect, 0.0, self.selected);
                        ui.label(self.rgb_label());
                    });
                });

                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() {
                        outcome = Some(DialogOutcome::Accepted(self.selected));
                    }
                    if ui.button("Cancel").clicked() {
                        outcome = Some(DialogOutcome::Cancelled);
                    }
                });
            });

        if outcome.is_some() {
            self.open = false;
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opens_with_black() {
        let mut dialog = ColorDialog::new();
        dialog.select_at(0, 0);
        dialog.open();
        assert!(dialog.is_open());
        assert_eq!(dialog.selected(), Color32::BLACK);
        assert_eq!(dialog.rgb_label(), "RGB: 0, 0, 0");
    }

    #[test]
    fn test_select_inside_and_outside_gradient() {
        let mut dialog = ColorDialog::new();
        dialog.open();
        dialog.select_at(0, 0);
        assert_eq!(dialog.selected(), Color32::from_rgb(255, 0, 0));

        dialog.select_at(-1, 10);
        dialog.select_at(GRADIENT_WIDTH as i32, 10);
        assert_eq!(dialog.selected(), Color32::from_rgb(255, 0, 0));
    }
}
