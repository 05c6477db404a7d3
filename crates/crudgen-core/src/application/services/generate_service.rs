//! Generate Service - main application orchestrator.
//!
//! This service coordinates the whole generation workflow:
//! 1. Validate the table and derive its naming
//! 2. Create the four-folder layout
//! 3. Generate, render and write each artifact in order
//!
//! Failures abort the run. Files already written stay in place: re-running
//! overwrites them, so no rollback is attempted.

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

use crate::{
    application::ports::{ArtifactRenderer, Filesystem, SchemaSource},
    domain::{
        ArtifactKind, DirectoryPlan, DomainValidator as validator, GeneratedArtifact,
        GeneratorOptions, Naming, TableSpec, generators,
    },
    error::CrudgenResult,
};

/// One artifact persisted by a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub kind: ArtifactKind,
    pub path: PathBuf,
    pub bytes: usize,
    /// A file already existed at `path` and was replaced.
    pub overwritten: bool,
}

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub table: String,
    pub table_root: PathBuf,
    pub directories: Vec<PathBuf>,
    pub files: Vec<WrittenFile>,
}

impl GenerationReport {
    pub fn overwritten_count(&self) -> usize {
        self.files.iter().filter(|f| f.overwritten).count()
    }
}

/// Main generation service.
pub struct GenerateService {
    renderer: Box<dyn ArtifactRenderer>,
    filesystem: Box<dyn Filesystem>,
}

impl GenerateService {
    /// Create a new generate service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use crudgen_core::application::GenerateService;
    ///
    /// let service = GenerateService::new(
    ///     renderer,   // impl ArtifactRenderer
    ///     filesystem, // impl Filesystem
    /// );
    /// ```
    pub fn new(renderer: Box<dyn ArtifactRenderer>, filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            renderer,
            filesystem,
        }
    }

    /// Load the table from `source`, then [`generate`](Self::generate).
    #[instrument(skip_all, fields(source = %source.describe()))]
    pub fn generate_from(
        &self,
        source: &dyn SchemaSource,
        options: &GeneratorOptions,
        root: impl AsRef<Path>,
    ) -> CrudgenResult<GenerationReport> {
        let table = source.load()?;
        info!(
            table = %table.name(),
            columns = table.columns().len(),
            "Schema loaded"
        );
        self.generate(&table, options, root)
    }

    /// Generate and write the four artifacts for `table` under `root`.
    #[instrument(
        skip_all,
        fields(table = %table.name(), root = %root.as_ref().display())
    )]
    pub fn generate(
        &self,
        table: &TableSpec,
        options: &GeneratorOptions,
        root: impl AsRef<Path>,
    ) -> CrudgenResult<GenerationReport> {
        // 1. Validate and derive names
        validator::validate_table(table)?;
        self.warn_on_options(options);

        let naming = Naming::derive(table);
        let plan = DirectoryPlan::for_table(root.as_ref(), &naming)?;

        // 2. Layout first: every write below lands in one of these folders
        let directories = self.prepare_directories(&plan)?;

        // 3. Generate, render, write
        let mut files = Vec::with_capacity(ArtifactKind::GENERATION_ORDER.len());
        for kind in ArtifactKind::GENERATION_ORDER {
            let artifact = self.render_artifact(kind, table, &naming, &plan, options)?;
            files.push(self.write_artifact(&plan, &artifact)?);
        }

        let report = GenerationReport {
            table: table.name().to_string(),
            table_root: plan.table_root(),
            directories,
            files,
        };

        info!(
            files = report.files.len(),
            overwritten = report.overwritten_count(),
            "Generation completed successfully"
        );
        Ok(report)
    }

    /// Render all artifacts without touching the filesystem.
    ///
    /// Paths in the result are relative to the output root.
    #[instrument(skip_all, fields(table = %table.name()))]
    pub fn preview(
        &self,
        table: &TableSpec,
        options: &GeneratorOptions,
    ) -> CrudgenResult<Vec<GeneratedArtifact>> {
        validator::validate_table(table)?;
        self.warn_on_options(options);

        let naming = Naming::derive(table);
        let plan = DirectoryPlan::for_table(".", &naming)?;

        ArtifactKind::GENERATION_ORDER
            .into_iter()
            .map(|kind| self.render_artifact(kind, table, &naming, &plan, options))
            .collect()
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn warn_on_options(&self, options: &GeneratorOptions) {
        if options.pagination_without_timestamps() {
            warn!("Pagination sorts on updatedAt, which is only maintained with timestamps enabled");
        }
    }

    /// Create the four folders. Existing folders are left untouched.
    fn prepare_directories(&self, plan: &DirectoryPlan) -> CrudgenResult<Vec<PathBuf>> {
        let directories = plan.directories();
        for dir in &directories {
            debug!(path = %dir.display(), "Ensuring directory");
            self.filesystem.create_dir_all(dir)?;
        }
        Ok(directories)
    }

    fn render_artifact(
        &self,
        kind: ArtifactKind,
        table: &TableSpec,
        naming: &Naming,
        plan: &DirectoryPlan,
        options: &GeneratorOptions,
    ) -> CrudgenResult<GeneratedArtifact> {
        let artifact = generators::generate(kind, table, naming, options);
        let content = self.renderer.render(&artifact)?;
        let relative_path = plan.artifact_path(kind, naming, self.renderer.file_extension())?;

        debug!(%kind, path = %relative_path, bytes = content.len(), "Artifact rendered");
        Ok(GeneratedArtifact {
            kind,
            relative_path,
            content,
        })
    }

    fn write_artifact(
        &self,
        plan: &DirectoryPlan,
        artifact: &GeneratedArtifact,
    ) -> CrudgenResult<WrittenFile> {
        let path = plan.resolve(&artifact.relative_path);
        let overwritten = self.filesystem.exists(&path);
        if overwritten {
            debug!(path = %path.display(), "Overwriting existing file");
        }

        self.filesystem.write_file(&path, &artifact.content)?;
        info!(kind = %artifact.kind, path = %path.display(), "Wrote artifact");

        Ok(WrittenFile {
            kind: artifact.kind,
            path,
            bytes: artifact.size(),
            overwritten,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::{
        application::{
            ApplicationError,
            ports::output::{MockArtifactRenderer, MockFilesystem, MockSchemaSource},
        },
        domain::DomainError,
        error::CrudgenError,
    };

    fn table() -> TableSpec {
        TableSpec::new("Book", vec![]).with_column("title", "String")
    }

    fn renderer() -> MockArtifactRenderer {
        let mut renderer = MockArtifactRenderer::new();
        renderer.expect_file_extension().return_const("js");
        renderer
            .expect_render()
            .returning(|artifact| Ok(format!("// {}", artifact.export_ident())));
        renderer
    }

    /// Filesystem mock that records every call in order.
    fn recording_filesystem(log: Arc<Mutex<Vec<String>>>) -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        let dirs = Arc::clone(&log);
        fs.expect_create_dir_all().returning(move |p| {
            dirs.lock().unwrap().push(format!("mkdir {}", p.display()));
            Ok(())
        });
        let writes = Arc::clone(&log);
        fs.expect_write_file().returning(move |p, _| {
            writes.lock().unwrap().push(format!("write {}", p.display()));
            Ok(())
        });
        fs.expect_exists().returning(|_| false);
        fs
    }

    #[test]
    fn directories_are_created_before_artifacts_in_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let service =
            GenerateService::new(Box::new(renderer()), Box::new(recording_filesystem(log.clone())));

        let report = service
            .generate(&table(), &GeneratorOptions::default(), "out")
            .unwrap();

        assert_eq!(
            *log.lock().unwrap(),
            vec![
                "mkdir out/Book/controllers",
                "mkdir out/Book/models",
                "mkdir out/Book/services",
                "mkdir out/Book/routes",
                "write out/Book/models/Book.js",
                "write out/Book/controllers/BookController.js",
                "write out/Book/services/BookService.js",
                "write out/Book/routes/BookRoutes.js",
            ]
        );
        assert_eq!(report.files.len(), 4);
        assert_eq!(report.table_root, PathBuf::from("out/Book"));
        assert_eq!(report.overwritten_count(), 0);
    }

    #[test]
    fn invalid_table_touches_nothing() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().never();
        fs.expect_write_file().never();

        let service = GenerateService::new(Box::new(renderer()), Box::new(fs));
        let err = service
            .generate(&TableSpec::new("bad name", vec![]), &GeneratorOptions::default(), ".")
            .unwrap_err();

        assert!(matches!(
            err,
            CrudgenError::Domain(DomainError::InvalidTableName { .. })
        ));
    }

    #[test]
    fn write_failure_aborts_remaining_artifacts() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().times(4).returning(|_| Ok(()));
        fs.expect_exists().returning(|_| false);
        // Model succeeds, controller fails, service and routes never written.
        let mut calls = 0;
        fs.expect_write_file().times(2).returning(move |p, _| {
            calls += 1;
            if calls == 2 {
                Err(ApplicationError::FilesystemError {
                    path: p.to_path_buf(),
                    reason: "disk full".into(),
                }
                .into())
            } else {
                Ok(())
            }
        });

        let service = GenerateService::new(Box::new(renderer()), Box::new(fs));
        let err = service
            .generate(&table(), &GeneratorOptions::default(), ".")
            .unwrap_err();

        assert!(matches!(
            err,
            CrudgenError::Application(ApplicationError::FilesystemError { .. })
        ));
    }

    #[test]
    fn existing_files_are_reported_as_overwritten() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|_, _| Ok(()));
        fs.expect_exists()
            .returning(|p| p.ends_with("Book.js") || p.ends_with("BookService.js"));

        let service = GenerateService::new(Box::new(renderer()), Box::new(fs));
        let report = service
            .generate(&table(), &GeneratorOptions::default(), ".")
            .unwrap();

        assert_eq!(report.overwritten_count(), 2);
    }

    #[test]
    fn schema_source_errors_propagate() {
        let mut source = MockSchemaSource::new();
        source.expect_describe().return_const("table.json".to_string());
        source.expect_load().returning(|| {
            Err(ApplicationError::SchemaUnavailable {
                source_name: "table.json".into(),
                reason: "No such file or directory".into(),
            }
            .into())
        });

        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().never();

        let service = GenerateService::new(Box::new(renderer()), Box::new(fs));
        let err = service
            .generate_from(&source, &GeneratorOptions::default(), ".")
            .unwrap_err();

        assert!(matches!(
            err,
            CrudgenError::Application(ApplicationError::SchemaUnavailable { .. })
        ));
    }

    #[test]
    fn preview_renders_without_writing() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().never();
        fs.expect_write_file().never();

        let service = GenerateService::new(Box::new(renderer()), Box::new(fs));
        let artifacts = service
            .preview(&table(), &GeneratorOptions::default())
            .unwrap();

        let paths: Vec<_> = artifacts
            .iter()
            .map(|a| a.relative_path.to_string())
            .collect();
        assert_eq!(
            paths,
            vec![
                "Book/models/Book.js",
                "Book/controllers/BookController.js",
                "Book/services/BookService.js",
                "Book/routes/BookRoutes.js",
            ]
        );
        assert_eq!(artifacts[2].content, "// BookService");
    }
}
