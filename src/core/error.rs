use std::path::PathBuf;
use thiserror::Error;

/// Central error type for the detector.
/// Only input-level failures end up here; a candidate loader that does not
/// fit the descriptor is a [`Decline`](crate::core::loaders::Decline), not an error.
#[derive(Debug, Error)]
pub enum DetectorError {
    // ── IO ──────────────────────────────────────────────
    #[error("IO error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    // ── JSON ────────────────────────────────────────────
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ── Maven ───────────────────────────────────────────
    #[error("Invalid Maven coordinate: {0}")]
    InvalidCoordinate(String),
}

/// Convenience alias used throughout the crate.
pub type DetectorResult<T> = Result<T, DetectorError>;

impl From<std::io::Error> for DetectorError {
    fn from(source: std::io::Error) -> Self {
        DetectorError::Io {
            path: PathBuf::new(),
            source,
        }
    }
}
