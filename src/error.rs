//! Error types for viewsitter operations.
//!
//! This module defines [`SitterError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Container mutations report failures through the injected
//!   [`Reporter`](crate::report::Reporter) and hand the same error back
//! - Container lookups never fail; absence is `None`
//! - Use `anyhow::Error` (via `SitterError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for viewsitter operations.
#[derive(Debug, Error)]
pub enum SitterError {
    /// The parser rejected the raw input.
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    /// The value does not satisfy the view contract.
    #[error("Not a view: {reason}")]
    NotAnItem { reason: String },

    /// Manifest file not found at expected location.
    #[error("Manifest not found: {path}")]
    ManifestNotFound { path: PathBuf },

    /// Manifest exists but could not be read.
    #[error("Failed to read manifest at {path}: {message}")]
    ManifestUnreadable { path: PathBuf, message: String },

    /// Failed to parse manifest file.
    #[error("Failed to parse manifest at {path}: {message}")]
    ManifestParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding error wrapper.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for viewsitter operations.
pub type Result<T> = std::result::Result<T, SitterError>;
