//! Error types for OpenAPI document generation.

use thiserror::Error;

/// Errors that can occur while producing an OpenAPI document.
#[derive(Debug, Error)]
pub enum OpenApiError {
    /// The document was requested before the server finished its setup
    /// phase. Callers must wait for the readiness signal.
    #[error("Document requested before the server is ready")]
    DocumentNotReady,

    /// Failed to serialize the document to JSON.
    #[error("Failed to serialize OpenAPI document: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for OpenAPI operations.
pub type OpenApiResult<T> = Result<T, OpenApiError>;
