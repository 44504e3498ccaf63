//! Unified error types and result handling for Keepsake.
//!
//! All fallible operations in the crate return [`Result`], which wraps the
//! single [`Error`] enum. Database errors are converted automatically via
//! `#[from]`; domain errors carry enough context to be rendered directly
//! to an end user by the calling surface.

use thiserror::Error;

/// Unified error type for all Keepsake operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration loading or validation failed
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of what went wrong
        message: String,
    },

    /// A journal was looked up by id but does not exist (or is deleted)
    #[error("Journal not found: {id}")]
    JournalNotFound {
        /// The journal id that was requested
        id: i64,
    },

    /// An entry was looked up by id but does not exist (or is deleted)
    #[error("Entry not found: {id}")]
    EntryNotFound {
        /// The entry id that was requested
        id: i64,
    },

    /// A goal was looked up by id but does not exist (or is deleted)
    #[error("Goal not found: {id}")]
    GoalNotFound {
        /// The goal id that was requested
        id: i64,
    },

    /// A target was referenced by id but does not belong to the goal
    #[error("Target not found: {id}")]
    TargetNotFound {
        /// The target id that was requested
        id: i64,
    },

    /// A marketplace template was looked up by id but does not exist
    #[error("Template not found: {id}")]
    TemplateNotFound {
        /// The template id that was requested
        id: i64,
    },

    /// A numeric value was rejected (non-finite, or out of its valid range)
    #[error("Invalid value: {value}")]
    InvalidValue {
        /// The offending value
        value: f64,
    },

    /// An entry kind string did not match any known kind
    #[error("Unknown entry kind: {kind}")]
    UnknownEntryKind {
        /// The unrecognized kind string
        kind: String,
    },

    /// Database error from `SeaORM`
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience `Result` type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
