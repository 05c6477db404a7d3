use std::path::{Path, PathBuf};

use crate::domain::{
    entities::{Naming, common::RelativePath},
    error::DomainError,
    value_objects::ArtifactKind,
};

/// The four-folder layout of one table under an output root.
///
/// ```text
/// <root>/<stem>/controllers
/// <root>/<stem>/models
/// <root>/<stem>/services
/// <root>/<stem>/routes
/// ```
///
/// Pure data: creating the folders is the writer's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryPlan {
    root: PathBuf,
    table_dir: RelativePath,
}

impl DirectoryPlan {
    pub fn for_table(root: impl Into<PathBuf>, naming: &Naming) -> Result<Self, DomainError> {
        Ok(Self {
            root: root.into(),
            table_dir: RelativePath::try_new(naming.file_stem())?,
        })
    }

    /// Output root the plan was computed against.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/<stem>`
    pub fn table_root(&self) -> PathBuf {
        self.root.join(&self.table_dir)
    }

    /// `<stem>/<folder>`, relative to the output root.
    pub fn relative_dir(&self, kind: ArtifactKind) -> RelativePath {
        self.table_dir.join_folder(kind.folder())
    }

    /// Absolute (root-joined) folders, in creation order.
    pub fn directories(&self) -> Vec<PathBuf> {
        ArtifactKind::FOLDER_ORDER
            .iter()
            .map(|kind| self.resolve(&self.relative_dir(*kind)))
            .collect()
    }

    /// `<stem>/<folder>/<module stem>.<extension>`
    pub fn artifact_path(
        &self,
        kind: ArtifactKind,
        naming: &Naming,
        extension: &str,
    ) -> Result<RelativePath, DomainError> {
        self.relative_dir(kind)
            .join(format!("{}.{}", naming.module_stem(kind), extension))
    }

    /// Join a relative path onto the output root.
    pub fn resolve(&self, path: &RelativePath) -> PathBuf {
        self.root.join(path)
    }
}
