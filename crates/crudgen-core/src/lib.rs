//! Crudgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for crudgen, a
//! generator that turns one table description into the model, service,
//! controller and route modules of a CRUD API.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            crudgen-cli (CLI)            │
//! │       (Implements Driving Ports)        │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │          Application Services           │
//! │            (GenerateService)            │
//! │          Orchestrates Use Cases         │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │ (Driven: Schema, Filesystem, Renderer)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    crudgen-adapters (Infrastructure)    │
//! │ (JsonSchemaFile, LocalFilesystem, etc)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (TableSpec, Naming, Artifact, Plan)    │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use crudgen_core::prelude::*;
//!
//! // 1. Describe the table
//! let table = TableSpec::new("Product", vec![])
//!     .with_column("name", "String")
//!     .with_column("price", "Number");
//!
//! // 2. Use application service (with injected adapters)
//! let service = GenerateService::new(renderer, filesystem);
//! service.generate(&table, &GeneratorOptions::default(), "./output")?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerateService, GenerationReport, WrittenFile,
        ports::{ArtifactRenderer, Filesystem, SchemaSource},
    };
    pub use crate::domain::{
        Artifact, ArtifactKind, ColumnSpec, DirectoryPlan, GeneratedArtifact, GeneratorOptions,
        Naming, TableSpec,
    };
    pub use crate::error::{CrudgenError, CrudgenResult, ErrorCategory};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
