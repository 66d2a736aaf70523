//! Core error types for tasklane-core.
//!
//! Scheduling outcomes are never errors: "cannot place" is reported as data.
//! These types cover the opt-in input validation layer and configuration I/O.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for tasklane-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Input validation errors.
///
/// The engine itself trusts its inputs; callers that want hardened behavior
/// run [`Task::validate`](crate::Task::validate) and
/// [`BusinessHours::validate`](crate::BusinessHours::validate) first.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Time string is not a well-formed `HH:MM`
    #[error("Invalid time format '{value}': expected HH:MM")]
    InvalidTimeFormat { value: String },

    /// Duration is zero or not a multiple of the slot length
    #[error("Task '{task_id}' has duration {minutes} min, which is not a positive multiple of 15")]
    UnalignedDuration { task_id: String, minutes: u32 },

    /// Duration exceeds one day
    #[error("Task '{task_id}' has duration {minutes} min, longer than a full day")]
    DurationTooLong { task_id: String, minutes: u32 },

    /// Work and wait time do not add up to the duration
    #[error(
        "Task '{task_id}' splits {duration} min into {work} min work + {wait} min wait, which does not add up"
    )]
    InconsistentWorkWaitSplit {
        task_id: String,
        work: u32,
        wait: u32,
        duration: u32,
    },

    /// Business hours window is empty or inverted
    #[error("Invalid business hours: end ({end}) must be later than start ({start})")]
    InvalidBusinessHours { start: String, end: String },

    /// Two tasks share the same id
    #[error("Duplicate task id: {0}")]
    DuplicateTaskId(String),

    /// A placed task carries no start time
    #[error("Task '{0}' is marked placed but has no start time")]
    MissingStartTime(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Config directory could not be determined or created
    #[error("Cannot prepare config directory {path}: {message}")]
    DirectoryUnavailable { path: PathBuf, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
