//! CLI argument definitions for the sales consolidator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "morsel",
    version,
    about = "Consolidate Pink Morsel sales extracts into one CSV",
    long_about = "Consolidate regional sales extracts into a single CSV.\n\n\
                  Each input file may use its own delimiter and column names; \
                  columns are reconciled through a synonym table and only \
                  Pink Morsel rows are kept."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Consolidate every matching input file into the output CSV.
    Run(RunArgs),

    /// List the accepted column names for each canonical field.
    Synonyms(SynonymsArgs),
}

#[derive(Parser, Default)]
pub struct RunArgs {
    /// Directory scanned for input files (default: data).
    #[arg(long = "input-dir", value_name = "DIR")]
    pub input_dir: Option<PathBuf>,

    /// Glob pattern relative to the input directory (default: *.csv).
    #[arg(long = "pattern", value_name = "GLOB")]
    pub pattern: Option<String>,

    /// Destination of the consolidated CSV (default: formatted_data.csv).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Write a JSON run report with per-file outcomes.
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// TOML configuration file.
    #[arg(long = "config", short = 'c', value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Process every file but do not write the output CSV.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser, Default)]
pub struct SynonymsArgs {
    /// TOML configuration file whose `[synonyms]` table extends the defaults.
    #[arg(long = "config", short = 'c', value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
