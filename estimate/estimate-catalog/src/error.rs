//! Error types for catalog loading and lookup.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogLoadError>;

/// Errors raised while loading or querying a catalog.
///
/// Every variant is a configuration problem. Callers should abort
/// initialisation rather than retry per request.
#[derive(Debug, Error)]
pub enum CatalogLoadError {
    /// The catalog source could not be read.
    #[error("failed to read catalog {path}: {source}")]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The catalog source is not valid catalog JSON.
    #[error("malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// An entry has an out-of-range or missing value.
    #[error("invalid catalog entry '{entry}': {reason}")]
    InvalidEntry {
        /// Entry that failed validation (e.g. `materials.PLA`).
        entry: String,
        /// What was wrong with it.
        reason: String,
    },

    /// A lookup named something the catalog does not list.
    #[error("unknown {kind}: '{name}'")]
    UnknownEntry {
        /// Kind of entry looked up (`material`, `printer`, ...).
        kind: &'static str,
        /// Name that was not found.
        name: String,
    },

    /// The catalog lists no materials.
    #[error("catalog lists no materials")]
    Empty,
}

impl CatalogLoadError {
    /// Create an `InvalidEntry` error.
    #[must_use]
    pub fn invalid_entry(entry: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidEntry {
            entry: entry.into(),
            reason: reason.into(),
        }
    }

    /// Create an `UnknownEntry` error.
    #[must_use]
    pub fn unknown(kind: &'static str, name: impl Into<String>) -> Self {
        Self::UnknownEntry {
            kind,
            name: name.into(),
        }
    }
}
