//! CLI argument definitions
//!
//! All Clap derive structs for `skunkd` command-line parsing.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use skunkd_core::catalog::Category;
use skunkd_docs::charts::DEFAULT_PLOTLY_SRC;

use crate::observability::LogFormat;

/// Default catalog export location.
pub const DEFAULT_CATALOG_INPUT: &str = ".claude/capabilities-catalog.json";

/// Default catalog page location.
pub const DEFAULT_CATALOG_OUTPUT: &str = ".claude/capabilities-catalog.html";

/// Default chart output directory.
pub const DEFAULT_STATS_DIR: &str = "docs/stats";

// ============================================================================
// Root CLI
// ============================================================================

/// Capabilities catalog builder and cribbage statistics chart generator.
#[derive(Parser, Debug)]
#[command(name = "skunkd", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output control.
    #[arg(long, default_value = "auto", global = true, env = "SKUNKD_COLOR")]
    pub color: ColorChoice,

    /// Log output format.
    #[arg(long, default_value = "human", global = true, env = "SKUNKD_LOG_FORMAT")]
    pub log_format: LogFormat,
}

// ============================================================================
// Top-Level Commands
// ============================================================================

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build, validate, or query the capabilities catalog.
    Catalog(CatalogCommand),

    /// Generate or list the scoring statistics charts.
    Charts(ChartsCommand),

    /// Generate shell completion scripts.
    Completions(CompletionsArgs),

    /// Display version information.
    Version(VersionArgs),
}

// ============================================================================
// Catalog Command
// ============================================================================

/// Catalog commands.
#[derive(Args, Debug)]
pub struct CatalogCommand {
    /// Catalog subcommand.
    #[command(subcommand)]
    pub subcommand: CatalogSubcommand,
}

/// Catalog subcommands.
#[derive(Subcommand, Debug)]
pub enum CatalogSubcommand {
    /// Render the catalog JSON into a standalone HTML page.
    Build(CatalogBuildArgs),

    /// Check the catalog JSON for problems without writing anything.
    Validate(CatalogValidateArgs),

    /// Search and filter the catalog from the terminal.
    Query(CatalogQueryArgs),
}

/// Catalog input path, shared by every catalog subcommand.
#[derive(Args, Debug)]
pub struct CatalogInput {
    /// Path to the catalog JSON export.
    #[arg(
        short,
        long,
        default_value = DEFAULT_CATALOG_INPUT,
        env = "SKUNKD_CATALOG_INPUT"
    )]
    pub input: PathBuf,
}

/// Arguments for `catalog build`.
#[derive(Args, Debug)]
pub struct CatalogBuildArgs {
    #[command(flatten)]
    pub source: CatalogInput,

    /// Where to write the HTML page.
    #[arg(
        short,
        long,
        default_value = DEFAULT_CATALOG_OUTPUT,
        env = "SKUNKD_CATALOG_OUTPUT"
    )]
    pub output: PathBuf,
}

/// Arguments for `catalog validate`.
#[derive(Args, Debug)]
pub struct CatalogValidateArgs {
    #[command(flatten)]
    pub source: CatalogInput,

    /// Treat warnings as errors.
    #[arg(long)]
    pub strict: bool,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

/// Arguments for `catalog query`.
#[derive(Args, Debug)]
pub struct CatalogQueryArgs {
    #[command(flatten)]
    pub source: CatalogInput,

    /// Case-insensitive substring matched against name, description,
    /// server, and namespace.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Keep only these categories (repeatable).
    #[arg(short, long = "category")]
    pub categories: Vec<Category>,

    /// Keep only records from these servers (repeatable).
    #[arg(long = "server")]
    pub servers: Vec<String>,

    /// Keep only records in these namespaces (repeatable).
    #[arg(long = "namespace")]
    pub namespaces: Vec<String>,

    /// Print the matching records' copy strings joined on one line.
    #[arg(long)]
    pub copy: bool,

    /// Output format.
    #[arg(short, long, default_value = "human", conflicts_with = "copy")]
    pub format: OutputFormat,
}

// ============================================================================
// Charts Command
// ============================================================================

/// Chart commands.
#[derive(Args, Debug)]
pub struct ChartsCommand {
    /// Charts subcommand.
    #[command(subcommand)]
    pub subcommand: ChartsSubcommand,
}

/// Charts subcommands.
#[derive(Subcommand, Debug)]
pub enum ChartsSubcommand {
    /// Write the chart HTML files.
    Generate(ChartsGenerateArgs),

    /// List the available charts.
    List(ChartsListArgs),
}

/// Arguments for `charts generate`.
#[derive(Args, Debug)]
pub struct ChartsGenerateArgs {
    /// Directory to write chart files into.
    #[arg(
        short,
        long,
        default_value = DEFAULT_STATS_DIR,
        env = "SKUNKD_STATS_DIR"
    )]
    pub out_dir: PathBuf,

    /// Plotly.js script URL referenced by every chart page.
    #[arg(long, default_value = DEFAULT_PLOTLY_SRC, env = "SKUNKD_PLOTLY_SRC")]
    pub plotly_src: String,

    /// Generate only these charts (repeatable; see `charts list`).
    #[arg(long)]
    pub only: Vec<String>,
}

/// Arguments for `charts list`.
#[derive(Args, Debug)]
pub struct ChartsListArgs {
    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// Completions / Version
// ============================================================================

/// Arguments for shell completion generation.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell for completion script.
    pub shell: Shell,
}

/// Arguments for version display.
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

/// Output format for structured output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

/// Shell type for completion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell.
    Bash,
    /// Zsh shell.
    Zsh,
    /// Fish shell.
    Fish,
    /// `PowerShell`.
    #[value(name = "powershell")]
    PowerShell,
    /// Elvish shell.
    Elvish,
}

// ============================================================================
// Tests
// ============================================================================
