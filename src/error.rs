//! Error handling for the career fit engine

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CareerFitError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Role not found: '{query}' does not match any role in the catalog")]
    RoleNotFound {
        query: String,
        available: Vec<String>,
    },

    #[error("Role '{0}' has no required skills")]
    DegenerateRole(String),

    #[error("Job catalog is empty")]
    EmptyCatalog,
}

pub type Result<T> = std::result::Result<T, CareerFitError>;

impl CareerFitError {
    /// Errors the caller can fix by changing the request.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            CareerFitError::InvalidInput(_)
                | CareerFitError::RoleNotFound { .. }
                | CareerFitError::UnsupportedFormat(_)
        )
    }
}
