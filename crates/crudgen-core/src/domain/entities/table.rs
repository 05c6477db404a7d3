//! The `TableSpec` aggregate: one resource to scaffold.
//!
//! A `TableSpec` is supplied by a schema source and is read-only to the
//! generators. Column order is significant and preserved verbatim.

use std::collections::HashSet;

use crate::domain::{error::DomainError, validation::DomainValidator};

/// Description of one generated resource: a name and its ordered columns.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableSpec {
    name: String,
    columns: Vec<ColumnSpec>,
}

impl TableSpec {
    pub fn new(name: impl Into<String>, columns: Vec<ColumnSpec>) -> Self {
        Self {
            name: name.into(),
            columns,
        }
    }

    /// Add a column, consuming self.
    pub fn with_column(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.columns.push(ColumnSpec::new(name, ty));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    /// Validate identifiers before any naming is derived from them.
    ///
    /// An empty column list is valid: it produces a schema with no fields.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.is_empty() {
            return Err(DomainError::EmptyTableName);
        }

        DomainValidator::check_identifier(&self.name).map_err(|reason| {
            DomainError::InvalidTableName {
                name: self.name.clone(),
                reason,
            }
        })?;

        let instance = self.name.to_lowercase();
        if DomainValidator::is_reserved(&instance) {
            return Err(DomainError::ReservedInstanceName {
                name: self.name.clone(),
                instance,
            });
        }

        if DomainValidator::shadows_parameter(&instance) {
            return Err(DomainError::ShadowedParameter {
                name: self.name.clone(),
                instance,
            });
        }

        let mut seen = HashSet::new();
        for (position, column) in self.columns.iter().enumerate() {
            DomainValidator::check_identifier(&column.name).map_err(|reason| {
                DomainError::InvalidColumnName {
                    name: column.name.clone(),
                    position,
                    reason,
                }
            })?;

            if !seen.insert(column.name.as_str()) {
                return Err(DomainError::DuplicateColumn {
                    name: column.name.clone(),
                });
            }

            if column.ty.trim().is_empty() {
                return Err(DomainError::EmptyColumnType {
                    name: column.name.clone(),
                });
            }
        }

        Ok(())
    }
}

/// One field definition. `ty` is an opaque type expression copied verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnSpec {
    name: String,
    ty: String,
}

impl ColumnSpec {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> &str {
        &self.ty
    }
}
