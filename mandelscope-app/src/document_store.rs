//! Reading and writing saved views as JSON files.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use mandelscope_core::Document;

use crate::error::AppError;

/// Read a document from `path`. Shape is checked later by the explorer.
pub(crate) fn load(path: &Path) -> Result<Document, AppError> {
    let json = fs::read_to_string(path).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let doc = serde_json::from_str::<Document>(&json).map_err(|source| AppError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Loaded document from {}", path.display());
    Ok(doc)
}

/// Write `document` to `path`, creating parent directories as needed.
pub(crate) fn save(path: &Path, document: &Document) -> Result<(), AppError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| AppError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let json = serde_json::to_string_pretty(document).map_err(|source| AppError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Saved document to {}", path.display());
    Ok(())
}
