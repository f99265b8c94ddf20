//! Error types for the core crate.

use thiserror::Error;

/// Errors raised by the core registries.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A schema was registered without a string `$id` member.
    #[error("Schema is missing a string `$id` member")]
    MissingSchemaId,

    /// A schema was registered under an identifier that is already taken.
    #[error("Schema identifier '{id}' is already registered")]
    DuplicateSchemaId {
        /// The identifier that collided.
        id: String,
    },
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
