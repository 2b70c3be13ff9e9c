//! CLI argument definitions for the league standings generator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "crosspoints",
    version,
    about = "Cyclo-cross league standings generator",
    long_about = "Generate season standings from per-round result sheets.\n\n\
                  Reads CSV result exports grouped into one directory per round,\n\
                  normalizes rider and team spellings across the season, and\n\
                  writes HTML and JSON standings tables."
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
    /// Process a season folder and generate standings tables.
    Standings(StandingsArgs),

    /// List the race categories and their sheet filename keywords.
    Categories,
}

#[derive(Parser)]
pub struct StandingsArgs {
    /// Path to the season folder containing one numbered directory per round.
    #[arg(value_name = "SEASON_DIR")]
    pub season_dir: PathBuf,

    /// Output directory for generated files (default: <SEASON_DIR>/standings).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Output format to generate.
    #[arg(long = "format", value_enum, default_value = "html")]
    pub format: OutputFormatArg,

    /// Read and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

/// CLI report format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Html,
    Json,
    Both,
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
