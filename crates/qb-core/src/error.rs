//! # AppError
//!
//! Centralized error handling for the Quillboard ecosystem.
//! Maps domain-specific failures to actionable error types.

use thiserror::Error;

/// The primary error type for all qb-core operations.
#[derive(Error, Debug)]
pub enum AppError {
    /// Validation failure (e.g., field empty after sanitization, over-length,
    /// malformed identifier). Always detected before any storage call.
    #[error("validation error: {0}")]
    Validation(String),

    /// Resource not found (e.g., update or delete addressed a missing row)
    #[error("{0} not found with ID {1}")]
    NotFound(&'static str, String),

    /// Resource already exists (e.g., insert of an already-persisted entity)
    #[error("conflict: {0}")]
    Conflict(String),

    /// Infrastructure failure in the storage collaborator; the underlying
    /// cause is preserved and surfaced unchanged.
    #[error("storage error: {0}")]
    Storage(#[source] anyhow::Error),
}

impl AppError {
    /// Wraps an arbitrary storage-side failure, keeping the cause chained.
    pub fn storage(cause: impl Into<anyhow::Error>) -> Self {
        AppError::Storage(cause.into())
    }
}

/// A specialized Result type for Quillboard logic.
pub type Result<T> = std::result::Result<T, AppError>;
