use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the command-line driver.
#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not a valid document: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unknown colour map `{0}`")]
    UnknownColourMap(String),

    #[error(transparent)]
    Core(#[from] mandelscope_core::CoreError),

    #[error(transparent)]
    Render(#[from] mandelscope_render::RenderError),
}
