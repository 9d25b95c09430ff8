//! CLI argument definitions for bids-qc.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "bids-qc",
    version,
    about = "BIDS validation wrapper - run the bids-validator and tabulate its findings",
    long_about = "Run the external bids-validator over a BIDS dataset, either as a\n\
                  whole or one subject at a time, and flatten its JSON report into\n\
                  a TSV issue table with a JSON data-dictionary side-car."
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

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate a BIDS dataset and tabulate the issues.
    Validate(ValidateArgs),

    /// Describe the columns of the exported issue table.
    Fields,
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Path to the BIDS dataset root.
    #[arg(value_name = "BIDS_DIR")]
    pub bids_dir: PathBuf,

    /// Prefix for output files (<PREFIX>_validation.tsv and .json).
    /// When omitted, results are only printed to the terminal.
    #[arg(long = "output-prefix", value_name = "PREFIX")]
    pub output_prefix: Option<PathBuf>,

    /// Validate one subject at a time instead of the whole dataset.
    ///
    /// Each subject's files are staged together with the dataset's root-level
    /// files into a temporary single-subject dataset, and the validator runs
    /// once per subject. Useful for datasets the validator cannot process in
    /// one pass.
    #[arg(long = "sequential")]
    pub sequential: bool,

    /// Skip NIfTI header consistency checks in the external validator.
    #[arg(long = "ignore-nifti-headers")]
    pub ignore_nifti_headers: bool,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
