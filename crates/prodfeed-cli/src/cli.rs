//! CLI argument definitions for the product feed importer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "prodfeed",
    version,
    about = "Product Feed Importer - Load supplier CSV feeds into the product store",
    long_about = "Import supplier product data from CSV feeds.\n\n\
                  Each row is mapped, translated, and validated before being written\n\
                  to the JSON-lines product store. Every run ends with a report of\n\
                  successes, remarks, errors, and summary counts."
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

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Import a product CSV feed into the store.
    Import(ImportArgs),

    /// Show the feed's column-to-field mapping and field constraints.
    Mapping,
}

#[derive(Parser)]
pub struct ImportArgs {
    /// Path to the product CSV feed.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Run every import step except persistence.
    #[arg(short = 't', long = "test")]
    pub test: bool,

    /// Product store file accepted records are appended to.
    #[arg(long = "store", value_name = "PATH", default_value = "products.jsonl")]
    pub store: PathBuf,

    /// Report output format.
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: ReportFormatArg,
}

/// Report output choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormatArg {
    Text,
    Json,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
