//! CLI argument definitions using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Streamlog - route messages to named log streams
#[derive(Parser, Debug)]
#[command(
    name = "streamlog",
    author,
    version,
    about = "Route text messages to named log streams",
    long_about = "Binds named log streams to output sinks (console, tracing log, file, null)\n\
                  from a configuration file and dispatches messages by stream name.\n\n\
                  Messages sent to a stream with no binding are silently discarded."
)]
pub struct Cli {
    /// Increase logging verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true, env = "STREAMLOG_VERBOSE")]
    pub verbose: u8,

    /// Suppress all diagnostics except warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Diagnostic log format (diagnostics go to stderr)
    #[arg(
        long,
        value_enum,
        default_value = "compact",
        global = true,
        env = "STREAMLOG_LOG_FORMAT"
    )]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Bind a console sink to "cout" and print two messages through it
    Demo,

    /// Print a message (or stdin lines) to a stream
    Print(PrintArgs),

    /// Validate configuration file without printing anything
    Validate(ValidateArgs),

    /// Display configured sinks and stream bindings
    Info(InfoArgs),
}

/// Arguments for the `print` command
#[derive(Parser, Debug, Clone)]
pub struct PrintArgs {
    /// Path to configuration file (TOML or JSON)
    #[arg(
        short,
        long,
        default_value = "streamlog.toml",
        env = "STREAMLOG_CONFIG"
    )]
    pub config: PathBuf,

    /// Stream to print to
    pub stream: String,

    /// Message words, joined with single spaces; read stdin lines when omitted
    pub message: Vec<String>,

    /// Print per-stream dispatch counts to stderr when done
    #[arg(long)]
    pub summary: bool,

    /// Metrics server port (0 = disabled)
    #[arg(long, default_value = "0", env = "STREAMLOG_METRICS_PORT")]
    pub metrics_port: u16,
}

/// Arguments for the `validate` command
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Path to configuration file to validate
    #[arg(short, long, default_value = "streamlog.toml")]
    pub config: PathBuf,

    /// Output validation result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `info` command
#[derive(Parser, Debug)]
pub struct InfoArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "streamlog.toml")]
    pub config: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Show sink parameters
    #[arg(long)]
    pub params: bool,
}

/// Log output format
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum LogFormat {
    /// JSON structured logging
    Json,
    /// Human-readable pretty format
    Pretty,
    /// Compact single-line format
    #[default]
    Compact,
}

impl From<LogFormat> for observability::LogFormat {
    fn from(format: LogFormat) -> Self {
        match format {
            LogFormat::Json => Self::Json,
            LogFormat::Pretty => Self::Pretty,
            LogFormat::Compact => Self::Compact,
        }
    }
}
