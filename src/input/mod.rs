use egui::{Context, Pos2, Rect, Response};

use crate::geometry::CanvasPoint;

/// Pointer events in canvas coordinates, in the order a gesture produces them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Primary button went down on the canvas
    PointerDown { pos: CanvasPoint },
    /// Pointer moved while the gesture's button is held
    PointerMove { pos: CanvasPoint },
    /// Primary button came back up, wherever the pointer is
    PointerUp { pos: CanvasPoint },
    /// Released at the exact spot it was pressed; follows `PointerUp`
    Click { pos: CanvasPoint },
}

impl InputEvent {
    pub fn pos(&self) -> CanvasPoint {
        match self {
            InputEvent::PointerDown { pos }
            | InputEvent::PointerMove { pos }
            | InputEvent::PointerUp { pos }
            | InputEvent::Click { pos } => *pos,
        }
    }
}

/// One frame's worth of raw pointer state
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerSample {
    /// Latest known pointer position in screen space
    pub pos: Option<Pos2>,
    pub pressed: bool,
    pub down: bool,
    pub released: bool,
    /// Whether the canvas is the topmost widget under the pointer
    pub over_canvas: bool,
}

/// Handles converting raw egui input into canvas `InputEvent`s
#[derive(Debug, Default)]
pub struct InputHandler {
    /// Where the current gesture started, if one is in progress
    press_pos: Option<CanvasPoint>,
    last_pos: Option<CanvasPoint>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while a gesture that began on the canvas is still held
    pub fn is_gesture_active(&self) -> bool {
        self.press_pos.is_some()
    }

    /// Read this frame's pointer state for the canvas widget
    pub fn process_input(&mut self, ctx: &Context, canvas: &Response) -> Vec<InputEvent> {
        let sample = ctx.input(|input| PointerSample {
            pos: input.pointer.latest_pos(),
            pressed: input.pointer.primary_pressed(),
            down: input.pointer.primary_down(),
            released: input.pointer.primary_released(),
            over_canvas: canvas.hovered(),
        });
        self.process_sample(sample, canvas.rect)
    }

    /// Turn a pointer sample into events for a canvas occupying `canvas_rect`
    pub fn process_sample(&mut self, sample: PointerSample, canvas_rect: Rect) -> Vec<InputEvent> {
        let mut events = Vec::new();
        let pos = sample.pos.map(|p| CanvasPoint::from_screen(p, canvas_rect));

        // A press only starts a gesture when it lands on the canvas itself
        if sample.pressed && self.press_pos.is_none() {
            if let (Some(p), Some(screen)) = (pos, sample.pos) {
                if sample.over_canvas && canvas_rect.contains(screen) {
                    self.press_pos = Some(p);
                    self.last_pos = Some(p);
                    events.push(InputEvent::PointerDown { pos: p });
                }
            }
        }

        let Some(press_pos) = self.press_pos else {
            return events;
        };

        if let Some(p) = pos {
            if (sample.down || sample.released) && Some(p) != self.last_pos {
                events.push(InputEvent::PointerMove { pos: p });
                self.last_pos = Some(p);
            }
        }

        if sample.released || (!sample.down && !sample.pressed) {
            let up = pos.or(self.last_pos).unwrap_or(press_pos);
            events.push(InputEvent::PointerUp { pos: up });
            if up == press_pos {
                events.push(InputEvent::Click { pos: up });
            }
            self.press_pos = None;
            self.last_pos = None;
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas() -> Rect {
        Rect::from_min_size(egui::pos2(10.0, 20.0), egui::vec2(200.0, 100.0))
    }

    fn sample(x: f32, y: f32, pressed: bool, down: bool, released: bool) -> PointerSample {
        PointerSample {
            pos: Some(egui::pos2(x, y)),
            pressed,
            down,
            released,
            over_canvas: true,
        }
    }

    #[test]
    fn test_drag_gesture() {
        let mut handler = InputHandler::new();
        let events = handler.process_sample(sample(20.0, 30.0, true, true, false), canvas());
        assert_eq!(events, vec![InputEvent::PointerDown { pos: CanvasPoint::new(10, 10) }]);
        assert!(handler.is_gesture_active());

        let events = handler.process_sample(sample(25.0, 35.0, false, true, false), canvas());
        assert_eq!(events, vec![InputEvent::PointerMove { pos: CanvasPoint::new(15, 15) }]);

        // No movement, no event
        assert!(handler.process_sample(sample(25.0, 35.0, false, true, false), canvas()).is_empty());

        let events = handler.process_sample(sample(25.0, 35.0, false, false, true), canvas());
        assert_eq!(events, vec![InputEvent::PointerUp { pos: CanvasPoint::new(15, 15) }]);
        assert!(!handler.is_gesture_active());
    }

    #[test]
    fn test_click_follows_release_at_press_point() {
        let mut handler = InputHandler::new();
        handler.process_sample(sample(50.0, 50.0, true, true, false), canvas());
        let events = handler.process_sample(sample(50.0, 50.0, false, false, true), canvas());
        let p = CanvasPoint::new(40, 30);
        assert_eq!(events, vec![InputEvent::PointerUp { pos: p }, InputEvent::Click { pos: p }]);
    }

    #[test]
    fn test_press_outside_canvas_is_ignored() {
        let mut handler = InputHandler::new();
        assert!(handler.process_sample(sample(5.0, 5.0, true, true, false), canvas()).is_empty());
        assert!(handler.process_sample(sample(50.0, 50.0, false, true, false), canvas()).is_empty());

        let mut covered = sample(50.0, 50.0, true, true, false);
        covered.over_canvas = false;
        assert!(handler.process_sample(covered, canvas()).is_empty());
    }

    #[test]
    fn test_release_outside_canvas_still_ends_gesture() {
        let mut handler = InputHandler::new();
        handler.process_sample(sample(50.0, 50.0, true, true, false), canvas());
        let events = handler.process_sample(sample(500.0, 500.0, false, false, true), canvas());
        assert_eq!(
            events,
            vec![
                InputEvent::PointerMove { pos: CanvasPoint::new(490, 480) },
                InputEvent::PointerUp { pos: CanvasPoint::new(490, 480) },
            ]
        );
    }

    #[test]
    fn test_quick_click_within_one_frame() {
        let mut handler = InputHandler::new();
        let events = handler.process_sample(sample(30.0, 40.0, true, false, true), canvas());
        let p = CanvasPoint::new(20, 20);
        assert_eq!(
            events,
            vec![
                InputEvent::PointerDown { pos: p },
                InputEvent::PointerUp { pos: p },
                InputEvent::Click { pos: p },
            ]
        );
    }
}
