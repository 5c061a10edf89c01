use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::viewport::{ViewBounds, Viewport};

/// Immutable copy of the five scalars that define a view.
///
/// The grid is not stored (it is recomputed on restore) and neither is the
/// colour-map selection, which lives outside the undo timeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewSnapshot {
    pub min_re: f64,
    pub max_re: f64,
    pub min_im: f64,
    pub max_im: f64,
    pub max_iterations: u32,
}

impl ViewSnapshot {
    pub fn of(viewport: &Viewport) -> Self {
        let b = viewport.bounds();
        Self {
            min_re: b.min_re(),
            max_re: b.max_re(),
            min_im: b.min_im(),
            max_im: b.max_im(),
            max_iterations: viewport.max_iterations(),
        }
    }

    /// Validate the snapshot and turn it back into a viewport.
    pub fn to_viewport(&self) -> crate::Result<Viewport> {
        let bounds = ViewBounds::new(self.min_re, self.max_re, self.min_im, self.max_im)?;
        Viewport::initial()
            .with_bounds(bounds)
            .with_max_iterations(self.max_iterations)
    }
}

/// Undo/redo stacks of [`ViewSnapshot`]s.
///
/// Undo and redo availability are independent. Recording a new step always
/// clears the redo stack; stepping with [`undo`](Self::undo) /
/// [`redo`](Self::redo) moves the current state onto the opposite stack.
#[derive(Debug, Clone, Default)]
pub struct History {
    undo: Vec<ViewSnapshot>,
    redo: Vec<ViewSnapshot>,
    limit: Option<usize>,
}

impl History {
    /// Unbounded history.
    pub fn new() -> Self {
        Self::default()
    }

    /// History keeping at most `limit` undo steps; the oldest are dropped.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit: Some(limit.max(1)),
            ..Self::default()
        }
    }

    /// Record the state as it was before a new mutation.
    pub fn record(&mut self, previous: ViewSnapshot) {
        self.undo.push(previous);
        self.redo.clear();
        if let Some(limit) = self.limit {
            if self.undo.len() > limit {
                let excess = self.undo.len() - limit;
                self.undo.drain(..excess);
            }
        }
        debug!(undo_depth = self.undo.len(), "Recorded history step");
    }

    /// Step back from `current`. Returns the state to restore, or `None` if
    /// there is nothing to undo (in which case nothing changes).
    pub fn undo(&mut self, current: ViewSnapshot) -> Option<ViewSnapshot> {
        let previous = self.undo.pop()?;
        self.redo.push(current);
        Some(previous)
    }

    /// Step forward from `current`. Leaves the rest of the redo stack intact.
    pub fn redo(&mut self, current: ViewSnapshot) -> Option<ViewSnapshot> {
        let next = self.redo.pop()?;
        self.undo.push(current);
        Some(next)
    }

    /// Forget both stacks.
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }
}
