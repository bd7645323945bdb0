//! Configuration errors
//!
//! The simulation itself never fails; only loading tuning/settings data does.

use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A tuning value is out of range (e.g. player wider than the arena).
    #[error("invalid tuning `{field}`: {reason}")]
    InvalidTuning { field: &'static str, reason: String },

    /// Malformed JSON in a config blob.
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Config file could not be read (native only).
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn tuning(field: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidTuning {
            field,
            reason: reason.into(),
        }
    }
}
