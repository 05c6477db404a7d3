//! Application layer for crudgen.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (GenerateService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! generation rules itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{GenerateService, GenerationReport, WrittenFile};

// Re-export port traits (for adapter implementation)
pub use ports::{ArtifactRenderer, Filesystem, SchemaSource};

pub use error::ApplicationError;
