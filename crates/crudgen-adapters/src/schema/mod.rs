//! Schema source adapters.

mod json;

pub use json::{ColumnDocument, JsonSchemaFile, TableDocument};
