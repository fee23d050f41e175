//! CLI argument definitions for osm-tabular.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "osm-tabular",
    version,
    about = "Convert OpenStreetMap XML into CSV tables",
    long_about = "Convert an OpenStreetMap XML export into five CSV tables \
                  (nodes, node tags, ways, way nodes, way tags).\n\n\
                  Abbreviated street types in display names are \
                  rewritten to their canonical form (Blvd -> Boulevard)."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert an OSM file into the five CSV tables.
    Process(ProcessArgs),

    /// Report street names with unexpected street types.
    Audit(AuditArgs),
}

#[derive(Parser)]
pub struct ProcessArgs {
    /// OpenStreetMap XML export to read.
    #[arg(value_name = "OSM_FILE")]
    pub input: PathBuf,

    /// Directory receiving the CSV files (default: current directory).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Write records without checking them against the schema.
    #[arg(long = "skip-validation")]
    pub skip_validation: bool,

    /// TOML file replacing the built-in abbreviation table and vocabulary.
    ///
    /// Falls back to the OSM_TABULAR_MAPPING environment variable.
    #[arg(long = "mapping", value_name = "FILE")]
    pub mapping: Option<PathBuf>,
}

#[derive(Parser)]
pub struct AuditArgs {
    /// OpenStreetMap XML export to read.
    #[arg(value_name = "OSM_FILE")]
    pub input: PathBuf,

    /// TOML file replacing the built-in abbreviation table and vocabulary.
    #[arg(long = "mapping", value_name = "FILE")]
    pub mapping: Option<PathBuf>,
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
