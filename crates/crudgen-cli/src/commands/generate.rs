//! Implementation of the `crudgen generate` command.
//!
//! Responsibility: merge CLI flags over configuration, wire the adapters into
//! the core generate service, and display results. No generation rules live
//! here.

use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, info, instrument};

use crudgen_adapters::{
    DryRunFilesystem, ExpressRenderer, JsonSchemaFile, LocalFilesystem, MemoryFilesystem,
};
use crudgen_core::{
    application::{GenerateService, GenerationReport, ports::SchemaSource},
    domain::{GeneratorOptions, TableSpec},
};

use crate::{
    cli::GenerateArgs,
    config::{AppConfig, GeneratorConfig},
    error::CliResult,
    output::OutputManager,
};

/// Effective settings for one run: flags over configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateSettings {
    pub schema: PathBuf,
    pub output_root: PathBuf,
    pub options: GeneratorOptions,
}

impl GenerateSettings {
    pub fn resolve(args: &GenerateArgs, config: &GeneratorConfig) -> Self {
        let configured = config.options();
        let options = configured
            .with_timestamps(args.timestamps_flag().unwrap_or(configured.include_timestamps))
            .with_pagination(args.pagination_flag().unwrap_or(configured.include_pagination))
            .with_default_page_size(args.page_size.unwrap_or(configured.default_page_size));

        Self {
            schema: args.schema.clone().unwrap_or_else(|| config.schema.clone()),
            output_root: args
                .output
                .clone()
                .unwrap_or_else(|| config.output_root.clone()),
            options,
        }
    }
}

/// JSON shape of a run, for `--output-format json`.
#[derive(Debug, Serialize)]
struct RunSummary<'a> {
    table: &'a str,
    root: String,
    dry_run: bool,
    files: Vec<FileSummary>,
}

#[derive(Debug, Serialize)]
struct FileSummary {
    kind: String,
    path: String,
    bytes: usize,
    overwritten: bool,
}

/// Execute the `crudgen generate` command.
///
/// 1. Resolve schema path, output root and options
/// 2. Load the table from the schema document
/// 3. `--print`: render and print, write nothing
/// 4. Otherwise run the generator against the real filesystem, or stage the
///    writes in memory for `--dry-run`
/// 5. Report written files
#[instrument(skip_all)]
pub fn execute(args: GenerateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    // 1. Resolve settings
    let settings = GenerateSettings::resolve(&args, &config.generator);
    debug!(?settings, "Generate settings resolved");

    if settings.options.pagination_without_timestamps() {
        output.warning(
            "Pagination sorts on updatedAt, which is only maintained with --timestamps",
        )?;
    }

    // 2. Load schema
    let source = JsonSchemaFile::new(&settings.schema);
    let table = source.load()?;
    info!(table = %table.name(), source = %source.describe(), "Table loaded");

    // 3. Print only
    if args.print {
        return print_sources(&table, &settings, &output);
    }

    // 4. Generate
    let report = if args.dry_run {
        let service = GenerateService::new(
            Box::new(ExpressRenderer::new()),
            Box::new(DryRunFilesystem::new()),
        );
        service.generate(&table, &settings.options, &settings.output_root)?
    } else {
        let service = GenerateService::new(
            Box::new(ExpressRenderer::new()),
            Box::new(LocalFilesystem::new()),
        );
        output.header(&format!("Generating '{}'...", table.name()))?;
        service.generate(&table, &settings.options, &settings.output_root)?
    };

    // 5. Report
    report_run(&report, args.dry_run, &output)
}

fn print_sources(
    table: &TableSpec,
    settings: &GenerateSettings,
    output: &OutputManager,
) -> CliResult<()> {
    let service = GenerateService::new(
        Box::new(ExpressRenderer::new()),
        Box::new(MemoryFilesystem::new()),
    );
    let artifacts = service.preview(table, &settings.options)?;

    for (i, artifact) in artifacts.iter().enumerate() {
        if i > 0 {
            output.raw("\n")?;
        }
        output.raw(&format!("// {}\n", artifact.relative_path))?;
        output.raw(&artifact.content)?;
    }
    Ok(())
}

fn report_run(report: &GenerationReport, dry_run: bool, output: &OutputManager) -> CliResult<()> {
    if output.is_json() {
        let summary = RunSummary {
            table: &report.table,
            root: report.table_root.display().to_string(),
            dry_run,
            files: report
                .files
                .iter()
                .map(|f| FileSummary {
                    kind: f.kind.to_string(),
                    path: f.path.display().to_string(),
                    bytes: f.bytes,
                    overwritten: f.overwritten,
                })
                .collect(),
        };
        output.json(&summary)?;
        return Ok(());
    }

    if dry_run {
        output.info(&format!(
            "Dry run: would write '{}' at {}",
            report.table,
            report.table_root.display()
        ))?;
        for file in &report.files {
            let note = if file.overwritten { " (would overwrite)" } else { "" };
            output.print(&format!("  {}{note}", file.path.display()))?;
        }
        return Ok(());
    }

    for file in &report.files {
        let note = if file.overwritten { " (overwritten)" } else { "" };
        output.print(&format!("  {}{note}", file.path.display()))?;
    }
    output.success(&format!(
        "Resource '{}' generated in {}",
        report.table,
        report.table_root.display()
    ))?;
    if report.overwritten_count() > 0 {
        output.warning(&format!(
            "{} existing file(s) were replaced",
            report.overwritten_count()
        ))?;
    }

    Ok(())
}
