use std::num::{ParseFloatError, ParseIntError};

use thiserror::Error;

use crate::notifier::ListenerError;

/// Errors originating from the explorer core.
///
/// Every variant except [`CoreError::Listener`] is raised before any state
/// is touched.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(
        "invalid view window: real [{min_re}, {max_re}], imaginary [{min_im}, {max_im}] \
         (bounds must be finite with min < max on both axes)"
    )]
    InvalidBounds {
        min_re: f64,
        max_re: f64,
        min_im: f64,
        max_im: f64,
    },

    #[error("invalid max iterations: {value} (must be within {min}..={max})")]
    InvalidIterations { value: i64, min: u32, max: u32 },

    #[error("invalid dimensions: {width}×{height} (must be > 0)")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("corrupt document: {0}")]
    CorruptDocument(#[from] DocumentError),

    #[error("model listener failed: {0}")]
    Listener(#[source] ListenerError),
}

/// Shape or parse failures of a persisted [`Document`](crate::Document).
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("missing key `{0}`")]
    MissingKey(&'static str),

    #[error("key `{key}` holds `{value}`, expected a number")]
    InvalidFloat {
        key: &'static str,
        value: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("key `{key}` holds `{value}`, expected an integer")]
    InvalidInteger {
        key: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
}
