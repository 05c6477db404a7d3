//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not generation
//! rules. Rule violations are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The schema document could not be read.
    #[error("Schema not available from {source_name}: {reason}")]
    SchemaUnavailable { source_name: String, reason: String },

    /// The schema document was read but does not have the expected shape.
    #[error("Malformed schema in {source_name}: {reason}")]
    SchemaMalformed { source_name: String, reason: String },

    /// Artifact rendering failed.
    #[error("Rendering failed for {artifact}: {reason}")]
    RenderingFailed { artifact: String, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// In-memory adapter lock poisoned.
    #[error("Adapter state lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::SchemaUnavailable { source_name, .. } => vec![
                format!("Could not read: {source_name}"),
                "Check the path, or pass the schema file explicitly: crudgen generate <FILE>"
                    .into(),
                "By default crudgen reads ./table.json".into(),
            ],
            Self::SchemaMalformed { .. } => vec![
                "Expected: { \"tableName\": string, \"columns\": [{ \"name\": string, \"type\": string }] }"
                    .into(),
                "Check for missing fields or trailing commas".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Files written before the failure were left in place".into(),
            ],
            Self::LockPoisoned => vec!["Try again".into()],
            Self::RenderingFailed { .. } => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::SchemaUnavailable { .. } => ErrorCategory::NotFound,
            Self::SchemaMalformed { .. } => ErrorCategory::Validation,
            Self::RenderingFailed { .. } => ErrorCategory::Internal,
            Self::FilesystemError { .. } => ErrorCategory::Internal,
            Self::LockPoisoned => ErrorCategory::Internal,
        }
    }
}
