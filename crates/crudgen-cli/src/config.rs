//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `CRUDGEN_<SECTION>__<KEY>`, e.g.
//!    `CRUDGEN_GENERATOR__INCLUDE_TIMESTAMPS=true`
//! 3. Config file: `--config FILE`, or else the global file plus
//!    `.crudgen.toml` in the current directory
//! 4. Built-in defaults (always present)

use std::path::PathBuf;

use anyhow::{Context, ensure};
use config::{Config, Environment, File, FileFormat, Source};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crudgen_core::domain::GeneratorOptions;

/// Per-directory config file, layered over the global one.
pub const LOCAL_CONFIG_FILE: &str = ".crudgen.toml";

const ENV_PREFIX: &str = "CRUDGEN";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Generation defaults.
    pub generator: GeneratorConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Schema document read when `generate` gets no path.
    pub schema: PathBuf,
    /// Directory receiving `<tableName>/`.
    pub output_root: PathBuf,
    pub include_timestamps: bool,
    pub include_pagination: bool,
    pub default_page_size: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        let options = GeneratorOptions::default();
        Self {
            schema: PathBuf::from("table.json"),
            output_root: PathBuf::from("."),
            include_timestamps: options.include_timestamps,
            include_pagination: options.include_pagination,
            default_page_size: options.default_page_size,
        }
    }
}

impl GeneratorConfig {
    /// Generator switches as configured, before CLI overrides.
    pub fn options(&self) -> GeneratorOptions {
        GeneratorOptions::default()
            .with_timestamps(self.include_timestamps)
            .with_pagination(self.include_pagination)
            .with_default_page_size(self.default_page_size)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `auto`, `human`, `plain` or `json`.
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then file(s), then environment.
    ///
    /// A file passed with `--config` must exist; the default locations are
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let defaults =
            Config::try_from(&Self::default()).context("Failed to build default configuration")?;
        let mut builder = Config::builder().add_source(defaults);

        match config_file {
            Some(path) => {
                debug!(path = %path.display(), "Using explicit config file");
                builder = builder.add_source(toml_file(path.clone(), true));
            }
            None => {
                builder = builder
                    .add_source(toml_file(Self::config_path(), false))
                    .add_source(toml_file(PathBuf::from(LOCAL_CONFIG_FILE), false));
            }
        }

        let config: Self = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            self.generator.default_page_size > 0,
            "generator.default_page_size must be at least 1"
        );
        ensure!(
            crate::cli::OutputFormat::from_setting(&self.output.format).is_some(),
            "output.format must be one of auto, human, plain, json (got '{}')",
            self.output.format
        );
        Ok(())
    }

    /// Path to the global configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.crudgen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "crudgen", "crudgen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }
}

fn toml_file(path: PathBuf, required: bool) -> impl Source + Send + Sync + 'static {
    File::from(path).format(FileFormat::Toml).required(required)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_match_generator_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.generator.schema, PathBuf::from("table.json"));
        assert_eq!(cfg.generator.options(), GeneratorOptions::default());
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn explicit_file_overrides_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("crudgen.toml");
        std::fs::write(
            &path,
            "[generator]\ninclude_pagination = true\ndefault_page_size = 25\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();

        assert!(cfg.generator.include_pagination);
        assert_eq!(cfg.generator.default_page_size, 25);
        // untouched keys keep their defaults
        assert_eq!(cfg.generator.schema, PathBuf::from("table.json"));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        assert!(AppConfig::load(Some(&tmp.path().join("nope.toml"))).is_err());
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("crudgen.toml");
        std::fs::write(&path, "[generator]\ndefault_page_size = 0\n").unwrap();

        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn config_path_is_not_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}
