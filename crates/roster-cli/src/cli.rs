//! CLI argument definitions for the roster importer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "roster-import",
    version,
    about = "Roster Importer - Map attendee CSV exports onto event templates",
    long_about = "Map attendee roster CSV exports onto event column templates.\n\n\
                  Matches roster headers to template columns by normalized name,\n\
                  fills unmatched required columns from defaults, normalizes date\n\
                  values, and writes an import-ready CSV."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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
    /// Import a roster CSV against a template and write the mapped output.
    Import(ImportArgs),

    /// List the templates available in a template store.
    Templates(TemplatesArgs),
}

#[derive(Parser)]
pub struct ImportArgs {
    /// Path to the roster CSV export (comma or tab delimited).
    #[arg(value_name = "ROSTER")]
    pub roster: PathBuf,

    /// Path to the template store JSON file.
    #[arg(long = "templates", value_name = "FILE")]
    pub templates: PathBuf,

    /// Identifier of the template to import against.
    #[arg(long = "template-id", value_name = "ID")]
    pub template_id: u64,

    /// Default values for unmatched columns, as a JSON object or @file.
    ///
    /// Example: --fields '{"Shirt Size":"M"}' or --fields @defaults.json
    #[arg(long = "fields", value_name = "JSON")]
    pub fields: Option<String>,

    /// Output path for the mapped CSV (default: import-<timestamp>.csv).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Validate and report without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct TemplatesArgs {
    /// Path to the template store JSON file.
    #[arg(long = "templates", value_name = "FILE")]
    pub templates: PathBuf,
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
