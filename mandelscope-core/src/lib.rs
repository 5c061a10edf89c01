pub mod complex;
pub mod document;
pub mod engine;
pub mod error;
pub mod explorer;
pub mod grid;
pub mod history;
pub mod notifier;
pub mod viewport;

// Re-export primary types for convenience.
pub use complex::Complex;
pub use document::Document;
pub use engine::{compute, escape_time};
pub use error::{CoreError, DocumentError};
pub use explorer::{Explorer, DEFAULT_COLOUR_MAP};
pub use grid::Grid;
pub use history::{History, ViewSnapshot};
pub use notifier::{ChangeNotifier, ListenerError, Subscription};
pub use viewport::{
    PixelRect, ViewBounds, Viewport, DEFAULT_BAILOUT_RADIUS_SQ, MAX_ITERATIONS, MIN_ITERATIONS,
};

/// Convenience result type for the core crate.
pub type Result<T> = std::result::Result<T, CoreError>;
