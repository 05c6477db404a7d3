//! `table.json` schema source.
//!
//! # Format
//!
//! ```json
//! {
//!   "tableName": "Product",
//!   "columns": [
//!     { "name": "name",  "type": "String" },
//!     { "name": "price", "type": "Number" }
//!   ]
//! }
//! ```
//!
//! Column order is preserved. `type` is copied into the model verbatim, so any
//! mongoose type expression is accepted (`"{ type: String, required: true }"`).
//! Unknown keys are ignored.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crudgen_core::{
    application::{ApplicationError, ports::SchemaSource},
    domain::{ColumnSpec, TableSpec},
    error::CrudgenResult,
};

/// Default schema file name, looked up in the working directory.
pub const DEFAULT_SCHEMA_FILE: &str = "table.json";

// ── Document types ────────────────────────────────────────────────────────────

/// Deserialised representation of a schema document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableDocument {
    pub table_name: String,
    pub columns: Vec<ColumnDocument>,
}

/// One entry of `columns`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDocument {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

impl From<TableDocument> for TableSpec {
    fn from(doc: TableDocument) -> Self {
        let columns = doc
            .columns
            .into_iter()
            .map(|c| ColumnSpec::new(c.name, c.ty))
            .collect();
        TableSpec::new(doc.table_name, columns)
    }
}

// ── Source ────────────────────────────────────────────────────────────────────

/// Reads one table description from a JSON file.
///
/// The document is only checked for shape here; identifier rules are applied
/// by the generator.
#[derive(Debug, Clone)]
pub struct JsonSchemaFile {
    path: PathBuf,
}

impl JsonSchemaFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse a document already in memory. `source_name` is used in errors.
    pub fn parse_str(source_name: &str, json: &str) -> CrudgenResult<TableSpec> {
        let doc: TableDocument =
            serde_json::from_str(json).map_err(|e| ApplicationError::SchemaMalformed {
                source_name: source_name.to_string(),
                reason: e.to_string(),
            })?;
        Ok(doc.into())
    }
}

impl Default for JsonSchemaFile {
    fn default() -> Self {
        Self::new(DEFAULT_SCHEMA_FILE)
    }
}

impl SchemaSource for JsonSchemaFile {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    #[instrument(skip_all, fields(path = %self.path.display()))]
    fn load(&self) -> CrudgenResult<TableSpec> {
        let raw = fs::read_to_string(&self.path).map_err(|e| {
            ApplicationError::SchemaUnavailable {
                source_name: self.describe(),
                reason: e.to_string(),
            }
        })?;
        debug!(bytes = raw.len(), "Schema document read");

        Self::parse_str(&self.describe(), &raw)
    }
}
