// Numan Thabit 2025
use std::path::PathBuf;

/// Errors surfaced while assembling or persisting a dashboard document.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    /// Creating the output directory or writing the document failed.
    #[error("failed to {action} {}", path.display())]
    OutputWrite {
        /// Step that failed, e.g. "create directory".
        action: &'static str,
        /// Path the step was operating on.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The document tree could not be rendered as JSON.
    #[error("failed to serialize dashboard")]
    Serialize(#[from] serde_json::Error),
    /// Threshold steps violate the band ordering rules.
    #[error("invalid thresholds: {0}")]
    InvalidThresholds(String),
}

impl DashboardError {
    pub(crate) fn output_write(
        action: &'static str,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        DashboardError::OutputWrite {
            action,
            path: path.into(),
            source,
        }
    }
}

/// Convenience alias for library results.
pub type Result<T> = std::result::Result<T, DashboardError>;
