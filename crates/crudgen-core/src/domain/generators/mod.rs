//! Artifact generators.
//!
//! One generator per artifact kind, all with the same shape: they read the
//! table schema (or only its [`Naming`]) plus [`GeneratorOptions`] and return an
//! [`Artifact`]. They never format identifiers and never touch the
//! filesystem.

pub mod controller;
pub mod model;
pub mod routes;
pub mod service;

use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::{Artifact, Naming, TableSpec},
    value_objects::ArtifactKind,
};

/// Feature switches shared by all generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorOptions {
    /// Add `createdAt` / `updatedAt` maintenance to the model schema.
    pub include_timestamps: bool,
    /// Add the paginated listing handler to the controller.
    pub include_pagination: bool,
    /// Page size used by the paginated handler when the request omits one.
    pub default_page_size: u64,
}

impl GeneratorOptions {
    pub const DEFAULT_PAGE_SIZE: u64 = 10;

    pub fn with_timestamps(mut self, enabled: bool) -> Self {
        self.include_timestamps = enabled;
        self
    }

    pub fn with_pagination(mut self, enabled: bool) -> Self {
        self.include_pagination = enabled;
        self
    }

    pub fn with_default_page_size(mut self, size: u64) -> Self {
        self.default_page_size = size;
        self
    }

    /// Pagination sorts on `updatedAt`, which only exists with timestamps.
    pub fn pagination_without_timestamps(&self) -> bool {
        self.include_pagination && !self.include_timestamps
    }
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            include_timestamps: false,
            include_pagination: false,
            default_page_size: Self::DEFAULT_PAGE_SIZE,
        }
    }
}

/// Build the artifact of `kind` for `table`.
pub fn generate(
    kind: ArtifactKind,
    table: &TableSpec,
    naming: &Naming,
    options: &GeneratorOptions,
) -> Artifact {
    match kind {
        ArtifactKind::Model => model::generate(table, naming, options),
        ArtifactKind::Service => service::generate(naming),
        ArtifactKind::Controller => controller::generate(naming, options),
        ArtifactKind::Routes => routes::generate(naming),
    }
}
