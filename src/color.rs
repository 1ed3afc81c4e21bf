//! Named palette, HSB gradient math and color formatting.

use egui::Color32;

/// Palette offered in the color drop-down, in display order
pub const PALETTE: [(&str, Color32); 10] = [
    ("Black", Color32::from_rgb(0, 0, 0)),
    ("Red", Color32::from_rgb(255, 0, 0)),
    ("Green", Color32::from_rgb(0, 255, 0)),
    ("Blue", Color32::from_rgb(0, 0, 255)),
    ("Yellow", Color32::from_rgb(255, 255, 0)),
    ("Orange", Color32::from_rgb(255, 200, 0)),
    ("Pink", Color32::from_rgb(255, 175, 175)),
    ("Cyan", Color32::from_rgb(0, 255, 255)),
    ("Magenta", Color32::from_rgb(255, 0, 255)),
    ("White", Color32::from_rgb(255, 255, 255)),
];

/// Look up a palette color by name, ignoring case. Unknown names give black.
pub fn color_from_name(name: &str) -> Color32 {
    PALETTE
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name.trim()))
        .map(|(_, c)| *c)
        .unwrap_or(Color32::BLACK)
}

/// Palette name of a color, if it is one of the named ones
pub fn color_name(color: Color32) -> Option<&'static str> {
    PALETTE
        .iter()
        .find(|(_, c)| c.r() == color.r() && c.g() == color.g() && c.b() == color.b())
        .map(|(n, _)| *n)
}

/// `RGB(r, g, b)` text shown after an eyedropper pick
pub fn format_rgb(color: Color32) -> String {
    format!("RGB({}, {}, {})", color.r(), color.g(), color.b())
}

/// Convert hue/saturation/brightness (all nominally 0..=1) to an opaque color.
///
/// Hue wraps around, so 1.25 behaves like 0.25.
pub fn hsb_to_color(hue: f32, saturation: f32, brightness: f32) -> Color32 {
    let channel = |v: f32| (v * 255.0 + 0.5) as u8;

    if saturation == 0.0 {
        let v = channel(brightness);
        return Color32::from_rgb(v, v, v);
    }

    let h = (hue - hue.floor()) * 6.0;
    let f = h - h.floor();
    let p = brightness * (1.0 - saturation);
    let q = brightness * (1.0 - saturation * f);
    let t = brightness * (1.0 - saturation * (1.0 - f));

    let (r, g, b) = match h as u32 {
        0 => (brightness, t, p),
        1 => (q, brightness, p),
        2 => (p, brightness, t),
        3 => (p, q, brightness),
        4 => (t, p, brightness),
        _ => (brightness, p, q),
    };
    Color32::from_rgb(channel(r), channel(g), channel(b))
}

/// Color under `(x, y)` of a `width` x `height` gradient.
///
/// Hue runs left to right at full saturation; brightness fades from the top
/// edge down to black. Returns `None` outside the gradient.
pub fn gradient_color_at(x: i32, y: i32, width: u32, height: u32) -> Option<Color32> {
    if x < 0 || y < 0 || x as u32 >= width || y as u32 >= height {
        return None;
    }
    let hue = x as f32 / width as f32;
    let brightness = 1.0 - y as f32 / height as f32;
    Some(hsb_to_color(hue, 1.0, brightness))
}
