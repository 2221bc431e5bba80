//! Command-line interface definition
//!
//! Argument parsing for the `textcheck` binary: one subcommand per tool,
//! plus logging options.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Command-line arguments for textcheck
#[derive(Debug, Parser)]
#[command(name = "textcheck")]
#[command(about = "Small text-checking tools: expression validation, entry-log analysis, phrase search")]
#[command(version)]
pub struct Args {
    /// Log level for diagnostics on stderr
    #[arg(
        long,
        default_value = "warn",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

/// The tool to run
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate one arithmetic expression read from stdin
    ///
    /// Prints "correct" or "incorrect" and always exits 0.
    Expr,

    /// Find the busiest interval in an entry-log file
    Busiest {
        /// Journal file: record count, then one "H1:M1 H2:M2" line per visit
        #[arg(default_value = "input.txt")]
        input: PathBuf,
        /// Report file: peak occupancy and its longest interval
        #[arg(default_value = "output.txt")]
        output: PathBuf,
    },

    /// Mark phrase occurrences in a text file
    Find {
        /// Input file: phrase on the first line, text after it
        #[arg(default_value = "input.txt")]
        input: PathBuf,
        /// Output file: the text with '@' before every match
        #[arg(default_value = "output.txt")]
        output: PathBuf,
    },
}
