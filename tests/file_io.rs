use std::path::PathBuf;

use drawing_studio::geometry::CanvasPoint;
use drawing_studio::{DrawingCanvas, InputEvent, Tool, ToolSettings};
use egui::Color32;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("drawing_studio_{}_{}", std::process::id(), name))
}

fn sample_drawing() -> DrawingCanvas {
    let mut canvas = DrawingCanvas::new(64, 48).unwrap();
    let brush = ToolSettings::new(Tool::Brush, Color32::from_rgb(255, 175, 175), 4);
    canvas.handle_event(InputEvent::PointerDown { pos: CanvasPoint::new(3, 3) }, &brush);
    canvas.handle_event(InputEvent::PointerMove { pos: CanvasPoint::new(60, 40) }, &brush);
    canvas.handle_event(InputEvent::PointerUp { pos: CanvasPoint::new(60, 40) }, &brush);

    let triangle = ToolSettings::new(Tool::Triangle, Color32::BLUE, 2);
    canvas.handle_event(InputEvent::PointerDown { pos: CanvasPoint::new(30, 5) }, &triangle);
    canvas.handle_event(InputEvent::PointerUp { pos: CanvasPoint::new(45, 30) }, &triangle);
    canvas
}

#[test]
fn test_save_then_load_is_exact() {
    let canvas = sample_drawing();
    let written = canvas.save_to(&temp_path("round_trip")).unwrap();
    assert_eq!(written.extension().and_then(|e| e.to_str()), Some("png"));

    let mut loaded = DrawingCanvas::new(64, 48).unwrap();
    loaded.load_from(&written).unwrap();
    assert!(loaded.shapes().is_empty());
    assert_eq!(loaded.composite(), canvas.composite());

    std::fs::remove_file(&written).ok();
}

#[test]
fn test_save_keeps_existing_png_extension() {
    let canvas = DrawingCanvas::new(8, 8).unwrap();
    let path = temp_path("named.png");
    let written = canvas.save_to(&path).unwrap();
    assert_eq!(written, path);
    std::fs::remove_file(&written).ok();
}

#[test]
fn test_load_is_undoable() {
    let source = sample_drawing();
    let written = source.save_to(&temp_path("undo_load")).unwrap();

    let mut canvas = DrawingCanvas::new(64, 48).unwrap();
    let blank = canvas.composite();
    canvas.load_from(&written).unwrap();
    assert!(canvas.undo());
    assert_eq!(canvas.composite(), blank);

    std::fs::remove_file(&written).ok();
}

#[test]
fn test_failed_load_leaves_canvas_unchanged() {
    let mut canvas = sample_drawing();
    let before = canvas.composite();
    let shapes = canvas.shapes().to_vec();

    let bogus = temp_path("not_an_image.png");
    std::fs::write(&bogus, b"definitely not a png").unwrap();
    assert!(canvas.load_from(&bogus).is_err());
    assert!(canvas.load_from(&temp_path("missing.png")).is_err());

    assert_eq!(canvas.composite(), before);
    assert_eq!(canvas.shapes(), shapes.as_slice());
    std::fs::remove_file(&bogus).ok();
}
