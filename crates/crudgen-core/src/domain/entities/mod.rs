pub mod artifact;
pub mod common;
pub mod layout;
pub mod naming;
pub mod table;

pub use crate::domain::DomainError;
pub use artifact::{Artifact, ArtifactBody, GeneratedArtifact};
pub use layout::DirectoryPlan;
pub use naming::{ModuleRef, Naming};
pub use table::{ColumnSpec, TableSpec};
