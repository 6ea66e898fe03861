use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "sloc")]
#[command(author, version, about = "Count source lines of code by language")]
#[command(long_about = "Walks a directory tree and counts code, comment, mixed and blank \
    lines for every file in a recognised language.\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    1 - Runtime error (unreadable file or directory)\n  \
    2 - Configuration error (bad config file or pattern)")]
pub struct Cli {
    /// Directory (or file) to count
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Only count files whose path matches this regular expression
    #[arg(short, long)]
    pub include: Option<String>,

    /// Skip files and directories whose path matches this regular expression
    #[arg(short, long)]
    pub exclude: Option<String>,

    /// Output format [possible values: table, csv, json]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long, conflicts_with = "no_config")]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long)]
    pub no_config: bool,

    /// Count files on all cores
    #[arg(long)]
    pub parallel: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors and hide the progress bar
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Default log filter directive for the chosen verbosity.
    #[must_use]
    pub const fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
