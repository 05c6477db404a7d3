// ============================================================================
// domain/error.rs - TABLE SCHEMA ERROR DOMAIN
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (they travel through the unified `CrudgenError`)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Table errors
    // ========================================================================
    #[error("Table name cannot be empty")]
    EmptyTableName,

    #[error("Invalid table name '{name}': {reason}")]
    InvalidTableName { name: String, reason: String },

    #[error("Table name '{name}' lowercases to the reserved word '{instance}'")]
    ReservedInstanceName { name: String, instance: String },

    #[error("Table name '{name}' lowercases to '{instance}', a parameter name in generated code")]
    ShadowedParameter { name: String, instance: String },

    // ========================================================================
    // Column errors
    // ========================================================================
    #[error("Invalid column name '{name}' at position {position}: {reason}")]
    InvalidColumnName {
        name: String,
        position: usize,
        reason: String,
    },

    #[error("Duplicate column '{name}'")]
    DuplicateColumn { name: String },

    #[error("Column '{name}' has an empty type expression")]
    EmptyColumnType { name: String },

    // ========================================================================
    // Layout errors
    // ========================================================================
    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyTableName => vec![
                "Set \"tableName\" in the schema document".into(),
                "Example: { \"tableName\": \"Product\", \"columns\": [] }".into(),
            ],
            Self::InvalidTableName { reason, .. } => vec![
                format!("Details: {reason}"),
                "Table names must start with a letter, '_' or '$'".into(),
                "Only letters, digits, '_' and '$' are allowed".into(),
            ],
            Self::ReservedInstanceName { instance, .. } => vec![
                format!("'{instance}' cannot be used as a variable name in generated code"),
                "Rename the table, e.g. add a suffix like 'Item' or 'Entry'".into(),
            ],
            Self::ShadowedParameter { instance, .. } => vec![
                format!("'{instance}' is already a method parameter in the generated service and controller"),
                "Rename the table, e.g. 'Record' instead of 'Data'".into(),
            ],
            Self::InvalidColumnName { reason, .. } => vec![
                format!("Details: {reason}"),
                "Column names follow the same rules as table names".into(),
            ],
            Self::DuplicateColumn { name } => vec![
                format!("Column '{name}' is declared more than once"),
                "Remove or rename the duplicate entry".into(),
            ],
            Self::EmptyColumnType { name } => vec![
                format!("Give column '{name}' a type, e.g. \"String\" or \"Number\""),
            ],
            Self::AbsolutePathNotAllowed { .. } => {
                vec!["See documentation for more details".into()]
            }
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::AbsolutePathNotAllowed { .. } => ErrorCategory::Internal,
            _ => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
