//! Error types for Vitrine.
//!
//! This module defines the centralized error type [`VitrineError`] and a type alias
//! [`Result`] used throughout the crate. Variants are grouped by where they come
//! from: the remote catalog, local storage, configuration, and the runtime.

use thiserror::Error;

/// The main error type for Vitrine operations.
///
/// # Examples
///
/// ```
/// use vitrine::domain::VitrineError;
///
/// fn validate_page_size(raw: &str) -> Result<usize, VitrineError> {
///     raw.parse()
///         .map_err(|_| VitrineError::Config(format!("invalid page size: {raw}")))
/// }
/// # assert!(validate_page_size("x").is_err());
/// ```
#[derive(Debug, Error)]
pub enum VitrineError {
    /// The catalog could not be retrieved.
    ///
    /// Covers transport failures (DNS, refused connection, timeout) and
    /// responses with a non-success status.
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// The catalog payload is not a JSON array of app records.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Persisted data could not be read or decoded.
    ///
    /// The recency store recovers from this locally; it is never shown to
    /// the user.
    #[error("Storage read error: {0}")]
    StorageRead(String),

    /// Writing to local storage failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or missing.
    ///
    /// The message names the offending environment variable.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Theme file could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// The background loader thread is gone or could not be reached.
    #[error("Worker communication error: {0}")]
    Worker(String),
}

/// A specialized `Result` type for Vitrine operations.
pub type Result<T> = std::result::Result<T, VitrineError>;
