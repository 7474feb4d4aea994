//! CLI argument definitions for the comment thread replayer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "thread-replay",
    version,
    about = "Replay comment thread actions and print the resulting tree",
    long_about = "Apply a JSON script of add/edit/delete/reply actions to a comment forest.\n\n\
                  Rejected actions (blank text, unknown ids) leave the forest unchanged\n\
                  and are listed in the summary."
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
    /// Apply an action script and print the final forest.
    Replay(ReplayArgs),

    /// Print a stored JSON forest as an outline.
    Outline(OutlineArgs),
}

#[derive(Parser)]
pub struct ReplayArgs {
    /// JSON array of actions, e.g. `[{"op": "add", "text": "hi"}]`.
    #[arg(value_name = "SCRIPT")]
    pub script: PathBuf,

    /// JSON forest to start from instead of an empty thread.
    #[arg(long = "seed", value_name = "FILE")]
    pub seed: Option<PathBuf>,

    /// How to print the final forest.
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormatArg,

    /// Exit with status 1 if any action was rejected.
    #[arg(long = "strict")]
    pub strict: bool,

    /// Skip the summary tables on stderr.
    #[arg(long = "quiet-summary")]
    pub quiet_summary: bool,
}

#[derive(Parser)]
pub struct OutlineArgs {
    /// JSON forest file.
    #[arg(value_name = "FOREST")]
    pub forest: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Text,
    Json,
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
