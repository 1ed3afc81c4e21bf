use drawing_studio::color::{PALETTE, color_from_name, color_name, format_rgb, gradient_color_at, hsb_to_color};
use drawing_studio::panels::{StatusMessage, status_text};
use drawing_studio::{Tool, ToolSettings};
use egui::Color32;

#[test]
fn test_palette_names_round_trip() {
    for (name, color) in PALETTE {
        assert_eq!(color_from_name(name), color);
        assert_eq!(color_name(color), Some(name));
    }
}

#[test]
fn test_hsb_primary_hues() {
    assert_eq!(hsb_to_color(0.0, 1.0, 1.0), Color32::from_rgb(255, 0, 0));
    assert_eq!(hsb_to_color(1.0 / 3.0, 1.0, 1.0), Color32::from_rgb(0, 255, 0));
    assert_eq!(hsb_to_color(2.0 / 3.0, 1.0, 1.0), Color32::from_rgb(0, 0, 255));
    assert_eq!(hsb_to_color(0.5, 0.0, 0.0), Color32::BLACK);
}

#[test]
fn test_gradient_bounds() {
    assert_eq!(gradient_color_at(0, 0, 350, 250), Some(Color32::from_rgb(255, 0, 0)));
    assert!(gradient_color_at(349, 249, 350, 250).is_some());
    assert!(gradient_color_at(350, 0, 350, 250).is_none());
    assert!(gradient_color_at(0, -1, 350, 250).is_none());
}

#[test]
fn test_picked_color_in_status_bar() {
    let picked = Color32::from_rgb(255, 175, 175);
    let settings = ToolSettings::new(Tool::ColorPicker, picked, 2);
    assert_eq!(format_rgb(picked), "RGB(255, 175, 175)");
    assert_eq!(
        status_text(&settings, &StatusMessage::Picked(picked)),
        "Picked Color - RGB(255, 175, 175) | Tool: COLOR_PICKER | Brush Size: 2"
    );
    assert_eq!(
        status_text(&settings, &StatusMessage::Summary),
        "Tool: COLOR_PICKER | Color: Pink | Brush Size: 2"
    );
}
