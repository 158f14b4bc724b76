// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Every failure the extractor, store and dashboard can report.
/// Nothing is retried; each variant is terminal for the triggering operation.
#[derive(Debug, Error)]
pub enum DeedError {
    #[error("header row not found (no first cell containing {marker:?})")]
    HeaderNotFound { marker: String },

    /// Row dropped by the extractor. Counted, never surfaced one by one.
    #[error("invalid record at row {row}: {reason}")]
    InvalidRecord { row: usize, reason: String },

    #[error("could not save {}: {source}", path.display())]
    PersistenceFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("a property with parcel number {0} already exists")]
    DuplicateKey(String),

    #[error("no property with parcel number {0}")]
    NotFound(String),

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("record file {}: {reason}", path.display())]
    Schema { path: PathBuf, reason: String },

    #[error("spreadsheet {}: {reason}", path.display())]
    Source { path: PathBuf, reason: String },

    #[error("nothing pending deletion")]
    NoPendingDelete,

    #[error("record file {} was not loaded ({reason}); reload it before making changes", path.display())]
    NotLoaded { path: PathBuf, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = DeedError> = std::result::Result<T, E>;
