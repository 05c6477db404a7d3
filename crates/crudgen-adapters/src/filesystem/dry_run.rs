//! Dry-run filesystem: writes are staged in memory, existence checks also
//! look at the real disk, so reports know which files a real run would replace.

use std::path::Path;

use crudgen_core::{application::ports::Filesystem, error::CrudgenResult};

use super::{LocalFilesystem, MemoryFilesystem};

#[derive(Debug, Clone, Default)]
pub struct DryRunFilesystem {
    staged: MemoryFilesystem,
    disk: LocalFilesystem,
}

impl DryRunFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// What the run would have written.
    pub fn staged(&self) -> &MemoryFilesystem {
        &self.staged
    }
}

impl Filesystem for DryRunFilesystem {
    fn create_dir_all(&self, path: &Path) -> CrudgenResult<()> {
        self.staged.create_dir_all(path)
    }

    fn write_file(&self, path: &Path, content: &str) -> CrudgenResult<()> {
        self.staged.write_file(path, content)
    }

    fn exists(&self, path: &Path) -> bool {
        self.staged.exists(path) || self.disk.exists(path)
    }
}
