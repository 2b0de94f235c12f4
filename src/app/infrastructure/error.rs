use thiserror::Error;

/// Failures while reading or writing a persisted record.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),
}

/// Failures reported by resume store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Invalid template: {0}")]
    InvalidTemplate(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Storage(StorageError::Json(err))
    }
}

/// Failures of the PDF export pipeline. None of these touch the resume document.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Render surface missing: {0}")]
    MissingSurface(String),

    #[error("Rasterization failed: {0}")]
    Rasterize(String),

    #[error("PDF assembly failed: {0}")]
    Assemble(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ExportError {
    /// Whether trying the export again may succeed. Permission errors will not.
    pub fn is_retryable(&self) -> bool {
        match self {
            ExportError::MissingSurface(_)
            | ExportError::Rasterize(_)
            | ExportError::Assemble(_) => true,
            ExportError::Io(e) => e.kind() != std::io::ErrorKind::PermissionDenied,
        }
    }
}

/// Top-level error for the command line front end.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Usage: {0}")]
    Usage(String),
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;
