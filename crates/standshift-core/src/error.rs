//! Error types for standshift-core.
//!
//! The engine itself has no error surface: every transition is a total
//! function over the event/state space, and out-of-context events are
//! defined as no-ops. Errors exist only at the configuration and
//! notification boundaries.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for standshift-core.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("notification error: {0}")]
    Notify(#[from] NotifyError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file exists but cannot be parsed.
    #[error("failed to parse configuration at {path}: {message}")]
    ParseFailed { path: PathBuf, message: String },

    /// The config file cannot be written.
    #[error("failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// A duration string does not match the accepted grammar.
    #[error("invalid duration '{value}': {message}")]
    InvalidDuration { value: String, message: String },
}

/// Notification delivery errors. Always non-fatal to the engine.
#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("desktop notification failed: {0}")]
    Desktop(#[from] notify_rust::error::Error),

    #[error("terminal bell failed: {0}")]
    Bell(#[from] std::io::Error),

    /// One or more notifiers in a combo failed. Every notifier was still
    /// attempted; the failures are collected here.
    #[error("{} of {} notifiers failed", .failures.len(), .attempted)]
    Combo {
        attempted: usize,
        failures: Vec<NotifyError>,
    },
}

/// Result type alias for CoreError.
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
