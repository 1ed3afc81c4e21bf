use std::path::{Path, PathBuf};

use eframe::egui;
use image::{ImageFormat, RgbaImage};

use crate::error::{StudioError, StudioResult};
use crate::raster::RasterBuffer;

/// Write a flattened drawing as PNG.
///
/// A `.png` extension is appended when the file name lacks one. Returns the
/// path that was actually written.
pub fn save_png(path: &Path, image: &RasterBuffer) -> StudioResult<PathBuf> {
    let path = with_png_extension(path);

    image
        .to_rgb_image()
        .save_with_format(&path, ImageFormat::Png)
        .map_err(|source| StudioError::Image {
            path: path.clone(),
            source,
        })?;

    log::info!("Drawing saved to: {}", display_path(&path).display());
    Ok(path)
}

/// Read an image from disk.
///
/// Any format the decoder recognises is accepted, PNG being the one the
/// studio itself writes.
pub fn load_png(path: &Path) -> StudioResult<RgbaImage> {
    let bytes = std::fs::read(path).map_err(|source| StudioError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let image = image::load_from_memory(&bytes).map_err(|source| StudioError::Image {
        path: path.to_path_buf(),
        source,
    })?;

    log::info!(
        "Image loaded from: {} ({}x{})",
        display_path(path).display(),
        image.width(),
        image.height()
    );
    Ok(image.to_rgba8())
}

/// Append `.png` unless the file name already ends with it (any case)
pub fn with_png_extension(path: &Path) -> PathBuf {
    let has_png = path
        .file_name()
        .map(|name| name.to_string_lossy().to_lowercase().ends_with(".png"))
        .unwrap_or(false);
    if has_png {
        return path.to_path_buf();
    }

    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".png");
    path.with_file_name(name)
}

fn display_path(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Picks up image files dropped onto the window
#[derive(Debug, Default)]
pub struct FileHandler {
    dropped_files: Vec<egui::DroppedFile>,
}

impl FileHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect newly dropped files from the UI context.
    /// Returns true if any arrived this frame.
    pub fn check_for_dropped_files(&mut self, ctx: &egui::Context) -> bool {
        let mut new_dropped_files = false;

        ctx.input(|i| {
            if !i.raw.dropped_files.is_empty() {
                self.dropped_files = i.raw.dropped_files.clone();
                new_dropped_files = true;
            }
        });

        new_dropped_files
    }

    /// Path of the first dropped image, consuming the pending drop
    pub fn take_dropped_image(&mut self) -> Option<PathBuf> {
        let files = std::mem::take(&mut self.dropped_files);
        for file in files {
            match &file.path {
                Some(path) if is_image_path(path) => return Some(path.clone()),
                Some(path) => log::warn!("Dropped file is not a supported type: {}", path.display()),
                None => log::warn!("Dropped file has no accessible path: {}", file.name),
            }
        }
        None
    }

    /// Dim the window while files are dragged over it
    pub fn preview_files_being_dropped(&self, ctx: &egui::Context) {
        use egui::{Align2, Color32, Id, LayerId, Order, TextStyle};

        if ctx.input(|i| i.raw.hovered_files.is_empty()) {
            return;
        }

        let text = ctx.input(|i| {
            let mut text = "Drop to open:\n".to_owned();
            for file in &i.raw.hovered_files {
                if let Some(path) = &file.path {
                    text += &format!("\n{}", path.display());
                } else {
                    text += "\n(Path not available)";
                }
            }
            text
        });

        let painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("file_drop_target")));
        let screen_rect = ctx.screen_rect();
        painter.rect_filled(screen_rect, 0.0, Color32::from_black_alpha(192));
        painter.text(
            screen_rect.center(),
            Align2::CENTER_CENTER,
            text,
            TextStyle::Heading.resolve(&ctx.style()),
            Color32::WHITE,
        );
    }
}

/// Check if a path looks like an image we can decode, by extension
pub fn is_image_path(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| matches!(ext.as_str(), "png" | "jpg" | "jpeg" | "gif" | "webp" | "bmp"))
}
