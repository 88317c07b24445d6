//! CLI argument definitions for the area tree resolver.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "areatree",
    version,
    about = "Area hierarchy resolver - cascading levels and breadcrumbs from flat node lists",
    long_about = "Resolve a tenant's flat area node list into cascading selection levels.\n\n\
                  Checks data integrity (duplicate codes, orphans, cycles, type mismatches),\n\
                  prints the levels for a selection, and rebuilds selections from a stored leaf."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

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

    /// Prefix pretty and compact log lines with timestamps.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Build indices and report integrity findings.
    Check(DatasetArgs),

    /// Print the cascading levels for a selection.
    Levels(LevelsArgs),

    /// Rebuild the selection path from a stored leaf code.
    Path(PathArgs),
}

#[derive(Parser)]
pub struct DatasetArgs {
    /// Dataset JSON file with `types`, `nodes` and optional `options`.
    #[arg(value_name = "DATASET")]
    pub dataset: PathBuf,

    /// Override the sibling type policy from the dataset options.
    #[arg(long = "sibling-types", value_enum)]
    pub sibling_types: Option<SiblingTypesArg>,

    /// Skip embedded type stub reconciliation.
    #[arg(long = "ignore-type-stubs")]
    pub ignore_type_stubs: bool,

    /// Show localized names where available.
    #[arg(long = "local-names")]
    pub local_names: bool,
}

#[derive(Parser)]
pub struct LevelsArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// Select a code at the next depth. Repeat to walk down the tree.
    #[arg(long = "select", value_name = "CODE")]
    pub select: Vec<String>,

    /// Auto-select levels that have a single option.
    #[arg(long = "auto-advance")]
    pub auto_advance: bool,

    /// Print levels and breadcrumb as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct PathArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// Stored leaf code.
    #[arg(value_name = "LEAF")]
    pub leaf: String,

    /// Print the breadcrumb as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SiblingTypesArg {
    Reject,
    Warn,
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
