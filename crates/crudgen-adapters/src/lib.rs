//! Infrastructure adapters for crudgen.
//!
//! This crate implements the ports defined in `crudgen-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod record_store;
pub mod renderer;
pub mod schema;

// Re-export commonly used adapters
pub use filesystem::{DryRunFilesystem, LocalFilesystem, MemoryFilesystem};
pub use record_store::MemoryRecordStore;
pub use renderer::ExpressRenderer;
pub use schema::JsonSchemaFile;
