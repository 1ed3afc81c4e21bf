//! The gesture state machine driving the canvas.
//!
//! Each pointer gesture walks one path through these states:
//! ```text
//!              press (brush/eraser)        move
//!          ┌──────────────────────► Painting ◄──┐
//!          │                           │   └────┘
//!          │   press (shape tool)      │ release       move
//!   Idle ──┼──────────────────────► Shaping ◄──┐
//!    ▲     │                           │   └────┘
//!    │     │   press (color picker)    │ release
//!    │     └──────────────────────► Picking
//!    │                                 │ release
//!    └─────────────────────────────────┘
//! ```
//! An eraser press that lands on a shape deletes it and stays `Idle`.
use egui::Color32;
use thiserror::Error;

use crate::geometry::CanvasPoint;
use crate::shape::ShapeKind;

/// Errors that can occur during state transitions.
#[derive(Debug, Error, PartialEq)]
pub enum StateTransitionError {
    /// The requested state transition is not allowed from the current state
    #[error("cannot transition from {from} to {to}")]
    InvalidTransition {
        from: &'static str,
        to: &'static str,
    },
}

/// The possible states of the canvas during a pointer gesture.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum EditorState {
    /// No gesture in progress
    #[default]
    Idle,
    /// Brush or eraser is writing into the raster
    Painting {
        last: CanvasPoint,
        color: Color32,
        width: u32,
    },
    /// A shape tool is dragging out a preview
    Shaping {
        kind: ShapeKind,
        start: CanvasPoint,
        current: CanvasPoint,
    },
    /// The eyedropper is held down
    Picking { at: CanvasPoint },
}

impl EditorState {
    pub fn name(&self) -> &'static str {
        match self {
            EditorState::Idle => "Idle",
            EditorState::Painting { .. } => "Painting",
            EditorState::Shaping { .. } => "Shaping",
            EditorState::Picking { .. } => "Picking",
        }
    }

    /// Validates whether a transition to the new state is allowed
    pub fn can_transition_to(&self, new_state: &EditorState) -> bool {
        match (self, new_state) {
            // From Idle, any gesture can begin
            (EditorState::Idle, _) => true,

            // Every gesture can finish or be cancelled
            (_, EditorState::Idle) => true,

            // Gestures advance within themselves
            (EditorState::Painting { .. }, EditorState::Painting { .. }) => true,
            (EditorState::Shaping { .. }, EditorState::Shaping { .. }) => true,

            _ => false,
        }
    }

    /// Move to `new_state`, rejecting transitions the state machine forbids
    pub fn transition_to(&mut self, new_state: EditorState) -> Result<(), StateTransitionError> {
        if !self.can_transition_to(&new_state) {
            return Err(StateTransitionError::InvalidTransition {
                from: self.name(),
                to: new_state.name(),
            });
        }
        if self.name() != new_state.name() {
            log::debug!("Canvas state {} -> {}", self.name(), new_state.name());
        }
        *self = new_state;
        Ok(())
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, EditorState::Idle)
    }

    pub fn is_painting(&self) -> bool {
        matches!(self, EditorState::Painting { .. })
    }

    pub fn is_shaping(&self) -> bool {
        matches!(self, EditorState::Shaping { .. })
    }

    /// Preview endpoints while a shape is being dragged
    pub fn shape_preview(&self) -> Option<(ShapeKind, CanvasPoint, CanvasPoint)> {
        match self {
            EditorState::Shaping { kind, start, current } => Some((*kind, *start, *current)),
            _ => None,
        }
    }
}
