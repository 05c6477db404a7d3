//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

/// Binary name used in help text and completion scripts.
pub const BIN_NAME: &str = "crudgen";

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "crudgen",
    bin_name = "crudgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} CRUD resource scaffolding from a table schema",
    long_about = "Crudgen reads a table description (table.json) and generates the \
                  model, service, controller and route modules of a CRUD resource.",
    after_help = "EXAMPLES:\n\
        \x20 crudgen generate\n\
        \x20 crudgen generate schemas/product.json -o src/resources --timestamps\n\
        \x20 crudgen generate --pagination --page-size 25 --dry-run\n\
        \x20 crudgen completions bash > /usr/share/bash-completion/completions/crudgen",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate the four modules of a CRUD resource.
    #[command(
        visible_aliases = ["gen", "g"],
        about = "Generate a CRUD resource from a table schema",
        after_help = "EXAMPLES:\n\
            \x20 crudgen generate                      # reads ./table.json\n\
            \x20 crudgen generate product.json -o api  # writes api/<tableName>/...\n\
            \x20 crudgen generate --print              # print sources, write nothing"
    )]
    Generate(GenerateArgs),

    /// Initialise a crudgen configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 crudgen init           # global config\n\
            \x20 crudgen init --local   # .crudgen.toml in CWD\n\
            \x20 crudgen init --force   # overwrite existing"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 crudgen completions bash > ~/.local/share/bash-completion/completions/crudgen\n\
            \x20 crudgen completions zsh  > ~/.zfunc/_crudgen\n\
            \x20 crudgen completions fish > ~/.config/fish/completions/crudgen.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the crudgen configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 crudgen config get generator.default_page_size\n\
            \x20 crudgen config list\n\
            \x20 crudgen config path"
    )]
    Config(ConfigCommands),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `crudgen generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Schema document. Defaults to `generator.schema` (`table.json`).
    #[arg(value_name = "SCHEMA", help = "Table schema file (default: table.json)")]
    pub schema: Option<PathBuf>,

    /// Directory receiving `<tableName>/`.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Output root (default: current directory)"
    )]
    pub output: Option<PathBuf>,

    /// Maintain `createdAt` / `updatedAt` on the model.
    #[arg(
        long = "timestamps",
        overrides_with = "no_timestamps",
        help = "Add mongoose timestamps to the model"
    )]
    pub timestamps: bool,

    /// Turn timestamps off even when configuration enables them.
    #[arg(
        long = "no-timestamps",
        overrides_with = "timestamps",
        help = "Omit timestamps, overriding configuration"
    )]
    pub no_timestamps: bool,

    /// Add the paginated listing handler to the controller.
    #[arg(
        long = "pagination",
        overrides_with = "no_pagination",
        help = "Add a paginated listing handler"
    )]
    pub pagination: bool,

    /// Turn pagination off even when configuration enables it.
    #[arg(
        long = "no-pagination",
        overrides_with = "pagination",
        help = "Omit the paginated handler, overriding configuration"
    )]
    pub no_pagination: bool,

    /// Page size used when a request does not send one.
    #[arg(
        long = "page-size",
        value_name = "N",
        value_parser = clap::value_parser!(u64).range(1..),
        help = "Default page size for the paginated handler"
    )]
    pub page_size: Option<u64>,

    /// Report what would be written without touching the disk.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,

    /// Print the rendered sources to stdout instead of writing them.
    #[arg(long = "print", conflicts_with = "dry_run", help = "Print generated sources")]
    pub print: bool,
}

impl GenerateArgs {
    /// `Some(true)` for `--timestamps`, `Some(false)` for `--no-timestamps`.
    pub fn timestamps_flag(&self) -> Option<bool> {
        switch(self.timestamps, self.no_timestamps)
    }

    /// `Some(true)` for `--pagination`, `Some(false)` for `--no-pagination`.
    pub fn pagination_flag(&self) -> Option<bool> {
        switch(self.pagination, self.no_pagination)
    }
}

/// The last of `--x` / `--no-x` wins; clap clears the other one.
fn switch(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (false, true) => Some(false),
        (false, false) => None,
    }
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `crudgen init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.crudgen.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `crudgen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `crudgen config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `generator.include_timestamps`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the global configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_generate_defaults() {
        let cli = Cli::parse_from(["crudgen", "generate"]);
        let Commands::Generate(args) = cli.command else {
            panic!("expected Generate command");
        };
        assert!(args.schema.is_none());
        assert!(args.output.is_none());
        assert!(!args.timestamps && !args.pagination);
        assert!(args.page_size.is_none());
    }

    #[test]
    fn generate_aliases() {
        for alias in ["gen", "g"] {
            let cli = Cli::parse_from(["crudgen", alias, "schema.json", "-o", "out"]);
            let Commands::Generate(args) = cli.command else {
                panic!("expected Generate command");
            };
            assert_eq!(args.schema, Some(PathBuf::from("schema.json")));
            assert_eq!(args.output, Some(PathBuf::from("out")));
        }
    }

    #[test]
    fn page_size_must_be_positive() {
        assert!(Cli::try_parse_from(["crudgen", "generate", "--page-size", "0"]).is_err());
        assert!(Cli::try_parse_from(["crudgen", "generate", "--page-size", "5"]).is_ok());
    }

    #[test]
    fn print_and_dry_run_conflict() {
        let result = Cli::try_parse_from(["crudgen", "generate", "--print", "--dry-run"]);
        assert!(result.is_err());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["crudgen", "--quiet", "--verbose", "generate"]);
        assert!(result.is_err());
    }
}
