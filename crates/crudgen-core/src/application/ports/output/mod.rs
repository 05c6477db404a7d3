//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `crudgen-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{Artifact, TableSpec};
use crate::error::CrudgenResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `crudgen_adapters::filesystem::LocalFilesystem` (production)
/// - `crudgen_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    ///
    /// Must succeed, without touching contents, when the directory exists.
    fn create_dir_all(&self, path: &Path) -> CrudgenResult<()>;

    /// Write content to a file, creating or truncating it.
    fn write_file(&self, path: &Path, content: &str) -> CrudgenResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for loading the table description.
///
/// Implemented by:
/// - `crudgen_adapters::schema::JsonSchemaFile` (`table.json` documents)
#[cfg_attr(test, mockall::automock)]
pub trait SchemaSource {
    /// Human-readable origin, used in logs and errors.
    fn describe(&self) -> String;

    /// Read and parse the table description.
    fn load(&self) -> CrudgenResult<TableSpec>;
}

/// Port for artifact rendering.
///
/// Implemented by:
/// - `crudgen_adapters::renderer::ExpressRenderer` (JavaScript, mongoose + express)
#[cfg_attr(test, mockall::automock)]
pub trait ArtifactRenderer: Send + Sync {
    /// Extension of the files this renderer produces, without the dot.
    fn file_extension(&self) -> &'static str;

    /// Render one artifact into source text.
    fn render(&self, artifact: &Artifact) -> CrudgenResult<String>;
}
