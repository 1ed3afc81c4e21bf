use std::collections::VecDeque;

use crate::raster::RasterBuffer;
use crate::shape::Shape;

/// Maximum number of snapshots each stack keeps
pub const MAX_UNDO_STEPS: usize = 10;

/// Full copy of the canvas contents taken before a mutating gesture
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub raster: RasterBuffer,
    pub shapes: Vec<Shape>,
}

impl Snapshot {
    pub fn capture(raster: &RasterBuffer, shapes: &[Shape]) -> Self {
        Self {
            raster: raster.clone(),
            shapes: shapes.to_vec(),
        }
    }
}

/// Manages the undo and redo stacks of canvas snapshots
#[derive(Debug)]
pub struct History {
    /// Oldest snapshot at the front, most recent at the back
    undo_stack: VecDeque<Snapshot>,
    redo_stack: VecDeque<Snapshot>,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// Creates an empty history holding up to `MAX_UNDO_STEPS` snapshots
    pub fn new() -> Self {
        Self::with_capacity(MAX_UNDO_STEPS)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.clamp(1, MAX_UNDO_STEPS);
        Self {
            undo_stack: VecDeque::with_capacity(capacity),
            redo_stack: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record the state as it is before a new action.
    ///
    /// Evicts the oldest snapshot when full and discards everything that could be redone.
    pub fn save_state(&mut self, raster: &RasterBuffer, shapes: &[Shape]) {
        push_bounded(&mut self.undo_stack, Snapshot::capture(raster, shapes), self.capacity);
        self.redo_stack.clear();
        log::debug!("History saved: {} undo step(s)", self.undo_stack.len());
    }

    /// Step back one action.
    ///
    /// The current state moves onto the redo stack and the snapshot to restore
    /// is returned. Nothing changes when there is nothing to undo.
    pub fn undo(&mut self, raster: &RasterBuffer, shapes: &[Shape]) -> Option<Snapshot> {
        let previous = self.undo_stack.pop_back()?;
        push_bounded(&mut self.redo_stack, Snapshot::capture(raster, shapes), self.capacity);
        Some(previous)
    }

    /// Re-apply the most recently undone action
    pub fn redo(&mut self, raster: &RasterBuffer, shapes: &[Shape]) -> Option<Snapshot> {
        let next = self.redo_stack.pop_back()?;
        push_bounded(&mut self.undo_stack, Snapshot::capture(raster, shapes), self.capacity);
        Some(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

fn push_bounded(stack: &mut VecDeque<Snapshot>, snapshot: Snapshot, capacity: usize) {
    while stack.len() >= capacity {
        stack.pop_front();
    }
    stack.push_back(snapshot);
}
