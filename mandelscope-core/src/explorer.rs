use std::sync::Arc;

use tracing::{debug, warn};

use crate::document::Document;
use crate::engine::compute;
use crate::error::CoreError;
use crate::grid::Grid;
use crate::history::{History, ViewSnapshot};
use crate::notifier::{ChangeNotifier, ListenerError, Subscription};
use crate::viewport::{PixelRect, ViewBounds, Viewport, INITIAL_MAX_RE, INITIAL_MIN_RE};

/// Colour map selected at start-up and after a reset.
pub const DEFAULT_COLOUR_MAP: &str = "Black & White";

/// The explorer's view state: current viewport, its grid, the undo/redo
/// history and the listeners to tell about changes.
///
/// Every mutating call runs to completion before returning: validate,
/// record history, apply, recompute the whole grid, then notify. Validation
/// errors leave the state untouched.
#[derive(Debug)]
pub struct Explorer {
    width: u32,
    height: u32,
    viewport: Viewport,
    grid: Arc<Grid>,
    colour_map: String,
    history: History,
    notifier: ChangeNotifier,
}

impl Explorer {
    /// Create an explorer rendering `width × height` cells at the initial
    /// view.
    pub fn new(width: u32, height: u32) -> crate::Result<Self> {
        Self::with_history(width, height, History::new())
    }

    /// Like [`new`](Self::new) but with a caller-supplied (e.g. depth-limited)
    /// history.
    pub fn with_history(width: u32, height: u32, history: History) -> crate::Result<Self> {
        if width == 0 || height == 0 {
            return Err(CoreError::InvalidDimensions { width, height });
        }
        let viewport = Viewport::initial();
        let grid = Arc::new(Self::compute_grid(width, height, &viewport));
        Ok(Self {
            width,
            height,
            viewport,
            grid,
            colour_map: DEFAULT_COLOUR_MAP.to_string(),
            history,
            notifier: ChangeNotifier::new(),
        })
    }

    // -- Read API --

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn bounds(&self) -> ViewBounds {
        self.viewport.bounds()
    }

    pub fn max_iterations(&self) -> u32 {
        self.viewport.max_iterations()
    }

    pub fn bailout_radius_sq(&self) -> f64 {
        self.viewport.bailout_radius_sq()
    }

    /// The grid for the current viewport.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Shared handle to the current grid. Stays valid (and unchanged) after
    /// later mutations, which publish a new grid instead of editing this one.
    pub fn grid_handle(&self) -> Arc<Grid> {
        Arc::clone(&self.grid)
    }

    pub fn colour_map_name(&self) -> &str {
        &self.colour_map
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot::of(&self.viewport)
    }

    /// Zoom factor relative to the initial real-axis span.
    pub fn magnification(&self) -> f64 {
        (INITIAL_MAX_RE - INITIAL_MIN_RE) / self.bounds().real_span()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    // -- Mutations --

    /// Show the given region of the complex plane.
    pub fn set_view_window(
        &mut self,
        min_re: f64,
        max_re: f64,
        min_im: f64,
        max_im: f64,
    ) -> crate::Result<()> {
        let bounds = ViewBounds::new(min_re, max_re, min_im, max_im)?;
        debug!(min_re, max_re, min_im, max_im, "Set view window");
        self.apply(self.viewport.with_bounds(bounds))
    }

    /// Change the iteration cap.
    pub fn set_max_iterations(&mut self, max_iterations: u32) -> crate::Result<()> {
        let viewport = self.viewport.with_max_iterations(max_iterations)?;
        debug!(max_iterations, "Set max iterations");
        self.apply(viewport)
    }

    /// Translate the view by a complex-plane delta.
    pub fn pan(&mut self, d_re: f64, d_im: f64) -> crate::Result<()> {
        let bounds = self.bounds().translated(d_re, d_im)?;
        debug!(d_re, d_im, "Pan");
        self.apply(self.viewport.with_bounds(bounds))
    }

    /// Pan by a pixel drag of `(dx, dy)` on the grid. Dragging right moves the
    /// view left on the plane.
    pub fn pan_by_pixels(&mut self, dx: i32, dy: i32) -> crate::Result<()> {
        let b = self.bounds();
        let re_per_px = b.real_span() / self.width as f64;
        let im_per_px = b.imag_span() / self.height as f64;
        self.pan(-(dx as f64) * re_per_px, -(dy as f64) * im_per_px)
    }

    /// Zoom into the region covered by `rect` on a
    /// `panel_width × panel_height` display of the current view.
    pub fn zoom_to(
        &mut self,
        rect: PixelRect,
        panel_width: u32,
        panel_height: u32,
    ) -> crate::Result<()> {
        let z = self.bounds().zoomed_to(rect, panel_width, panel_height)?;
        self.set_view_window(z.min_re(), z.max_re(), z.min_im(), z.max_im())
    }

    /// Return to the initial view and colour map and forget all history.
    ///
    /// Not undoable.
    pub fn reset(&mut self) -> crate::Result<()> {
        debug!("Reset view");
        self.history.clear();
        self.viewport = Viewport::initial();
        self.colour_map = DEFAULT_COLOUR_MAP.to_string();
        self.recompute();
        self.notify()
    }

    /// Step back one history entry. Returns `false` if there was nothing to
    /// undo.
    pub fn undo(&mut self) -> crate::Result<bool> {
        let current = self.snapshot();
        let Some(previous) = self.history.undo(current) else {
            return Ok(false);
        };
        debug!(
            undo_depth = self.history.undo_depth(),
            redo_depth = self.history.redo_depth(),
            "Undo"
        );
        self.restore(previous)?;
        Ok(true)
    }

    /// Step forward one history entry. Returns `false` if there was nothing
    /// to redo.
    pub fn redo(&mut self) -> crate::Result<bool> {
        let current = self.snapshot();
        let Some(next) = self.history.redo(current) else {
            return Ok(false);
        };
        debug!(
            undo_depth = self.history.undo_depth(),
            redo_depth = self.history.redo_depth(),
            "Redo"
        );
        self.restore(next)?;
        Ok(true)
    }

    /// Select a colour map by name; `None` or an empty name selects the
    /// default. Listeners are notified but history is left alone.
    pub fn set_colour_map_name(&mut self, name: Option<&str>) -> crate::Result<()> {
        self.colour_map = match name {
            Some(n) if !n.is_empty() => n.to_string(),
            _ => DEFAULT_COLOUR_MAP.to_string(),
        };
        debug!(colour_map = %self.colour_map, "Set colour map");
        self.notify()
    }

    /// Current view and colour map as a document.
    pub fn to_document(&self) -> Document {
        Document::from_state(&self.snapshot(), &self.colour_map)
    }

    /// Apply a saved document.
    ///
    /// The document is fully parsed and validated first; on any error the
    /// explorer is unchanged. A successful load is recorded in history.
    pub fn load_document(&mut self, document: &Document) -> crate::Result<()> {
        let (snapshot, colour_map) = document.parse().inspect_err(|e| {
            warn!("Rejected document: {e}");
        })?;
        let viewport = snapshot.to_viewport()?;
        debug!(colour_map = %colour_map, "Loaded document");
        self.colour_map = colour_map;
        self.apply(viewport)
    }

    // -- Listeners --

    /// Register a change listener. See [`ChangeNotifier::subscribe`].
    pub fn subscribe<F>(&mut self, listener: F) -> Subscription
    where
        F: FnMut() -> Result<(), ListenerError> + 'static,
    {
        self.notifier.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        self.notifier.unsubscribe(subscription)
    }

    // -- Internals --

    /// Record the current state, switch to `viewport`, recompute, notify.
    fn apply(&mut self, viewport: Viewport) -> crate::Result<()> {
        let previous = self.snapshot();
        self.history.record(previous);
        self.viewport = viewport;
        self.recompute();
        self.notify()
    }

    fn restore(&mut self, snapshot: ViewSnapshot) -> crate::Result<()> {
        // Snapshots are taken from validated viewports, so this cannot fail
        // unless the history was built by hand.
        self.viewport = snapshot.to_viewport()?;
        self.recompute();
        self.notify()
    }

    fn recompute(&mut self) {
        self.grid = Arc::new(Self::compute_grid(self.width, self.height, &self.viewport));
    }

    fn compute_grid(width: u32, height: u32, viewport: &Viewport) -> Grid {
        compute(
            width,
            height,
            &viewport.bounds(),
            viewport.max_iterations(),
            viewport.bailout_radius_sq(),
        )
    }

    fn notify(&mut self) -> crate::Result<()> {
        self.notifier.notify_all().map_err(CoreError::Listener)
    }
}
