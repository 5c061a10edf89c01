//! Flat key/value persistence of a view and its colour-map selection.

use std::collections::BTreeMap;
use std::num::IntErrorKind;

use serde::{Deserialize, Serialize};

use crate::error::DocumentError;
use crate::history::ViewSnapshot;
use crate::viewport::{validate_max_iterations, ViewBounds};

pub const KEY_MIN_RE: &str = "minReal";
pub const KEY_MAX_RE: &str = "maxReal";
pub const KEY_MIN_IM: &str = "minImag";
pub const KEY_MAX_IM: &str = "maxImag";
pub const KEY_MAX_ITERATIONS: &str = "maxIterations";
pub const KEY_COLOUR_MAP: &str = "colorMap";

/// Every key a document must carry.
pub const REQUIRED_KEYS: [&str; 6] = [
    KEY_MIN_RE,
    KEY_MAX_RE,
    KEY_MIN_IM,
    KEY_MAX_IM,
    KEY_MAX_ITERATIONS,
    KEY_COLOUR_MAP,
];

/// A saved view: string keys mapped to string values.
///
/// Serialises as a flat JSON object. Keys other than [`REQUIRED_KEYS`] are
/// carried along and ignored on parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    entries: BTreeMap<String, String>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write the five view scalars and the colour-map name.
    ///
    /// Floats use the shortest representation that parses back to the same
    /// `f64`, so a save/parse cycle is exact.
    pub fn from_state(snapshot: &ViewSnapshot, colour_map: &str) -> Self {
        let mut doc = Self::new();
        doc.insert(KEY_MIN_RE, snapshot.min_re.to_string());
        doc.insert(KEY_MAX_RE, snapshot.max_re.to_string());
        doc.insert(KEY_MIN_IM, snapshot.min_im.to_string());
        doc.insert(KEY_MAX_IM, snapshot.max_im.to_string());
        doc.insert(KEY_MAX_ITERATIONS, snapshot.max_iterations.to_string());
        doc.insert(KEY_COLOUR_MAP, colour_map.to_string());
        doc
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Parse and validate every field.
    ///
    /// Missing or unparsable values fail with
    /// [`CoreError::CorruptDocument`](crate::CoreError::CorruptDocument);
    /// well-formed but out-of-range values fail with the same errors the
    /// explorer's setters raise.
    pub fn parse(&self) -> crate::Result<(ViewSnapshot, String)> {
        let min_re = self.float(KEY_MIN_RE)?;
        let max_re = self.float(KEY_MAX_RE)?;
        let min_im = self.float(KEY_MIN_IM)?;
        let max_im = self.float(KEY_MAX_IM)?;
        let iterations = self.integer(KEY_MAX_ITERATIONS)?;
        let colour_map = self.required(KEY_COLOUR_MAP)?.to_string();

        ViewBounds::new(min_re, max_re, min_im, max_im)?;
        let max_iterations = validate_max_iterations(iterations)?;

        let snapshot = ViewSnapshot {
            min_re,
            max_re,
            min_im,
            max_im,
            max_iterations,
        };
        Ok((snapshot, colour_map))
    }

    fn required(&self, key: &'static str) -> Result<&str, DocumentError> {
        self.get(key).ok_or(DocumentError::MissingKey(key))
    }

    fn float(&self, key: &'static str) -> Result<f64, DocumentError> {
        let value = self.required(key)?.trim();
        value.parse().map_err(|source| DocumentError::InvalidFloat {
            key,
            value: value.to_string(),
            source,
        })
    }

    /// Integers beyond `i64` saturate so that range validation, not parsing,
    /// reports them.
    fn integer(&self, key: &'static str) -> Result<i64, DocumentError> {
        let value = self.required(key)?.trim();
        match value.parse::<i64>() {
            Ok(n) => Ok(n),
            Err(e) if *e.kind() == IntErrorKind::PosOverflow => Ok(i64::MAX),
            Err(e) if *e.kind() == IntErrorKind::NegOverflow => Ok(i64::MIN),
            Err(source) => Err(DocumentError::InvalidInteger {
                key,
                value: value.to_string(),
                source,
            }),
        }
    }
}

impl FromIterator<(String, String)> for Document {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
