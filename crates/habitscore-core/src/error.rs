//! Core error types for habitscore-core.
//!
//! Scoring itself never fails: every error here comes from the edges of
//! the library, where raw input is turned into typed values or where the
//! configuration file is read and written.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for habitscore-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config directory could not be resolved
    #[error("Cannot determine configuration directory")]
    NoConfigDir,

    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Key does not exist in the configuration
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),
}

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Raw checkmark code outside the three known states
    #[error("Invalid checkmark value: {0} (expected -1, 0 or 1)")]
    InvalidCheckmarkValue(i64),

    /// Unknown checkmark state name
    #[error("Invalid checkmark state: '{0}' (expected empty, completed or failed)")]
    InvalidCheckmarkName(String),

    /// Goal outside 0..=100
    #[error("Invalid goal: {0} (expected a percentage between 0 and 100)")]
    InvalidGoal(i64),

    /// Unknown week start name
    #[error("Invalid week start: '{0}' (expected monday or sunday)")]
    InvalidWeekStart(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
