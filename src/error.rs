//! Application-wide error types.
//!
//! This module defines the main error type hierarchy for the application,
//! allowing for type-safe error handling throughout the codebase.

pub use crate::config::ConfigError;

/// Main application error type.
///
/// Top-level error that wraps every failure the application can surface to
/// `main`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Logger initialization errors
    #[error("Logger error: {0}")]
    Logger(String),
}
