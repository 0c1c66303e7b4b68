use thiserror::Error;

use crate::config::ConfigError;
use crate::domain::errors::DomainError;

/// Top-level error of the `order_placement` binary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Malformed command: {0}")]
    Command(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database setup failed: {0}")]
    Setup(String),
}

impl AppError {
    /// Process exit code reported for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Domain(e) if e.is_not_found() => 2,
            AppError::Domain(
                DomainError::InsufficientStock
                | DomainError::EmailAlreadyInUse
                | DomainError::ProductNameTaken,
            ) => 3,
            AppError::Domain(DomainError::InvalidInput(_)) | AppError::Command(_) => 4,
            _ => 1,
        }
    }
}

impl From<r2d2::Error> for AppError {
    fn from(e: r2d2::Error) -> Self {
        AppError::Setup(e.to_string())
    }
}
