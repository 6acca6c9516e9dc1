use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for ai-review.
#[derive(Parser, Debug, PartialEq, Clone)]
#[command(version, about, long_about = None, args_conflicts_with_subcommands = true)]
pub struct Args {
    /// Lint report to get suggestions for.
    pub lint_report: Option<PathBuf>,

    /// Formatting report to get suggestions for.
    pub format_report: Option<PathBuf>,

    /// Generation endpoint, overriding the configured one.
    #[arg(short, long)]
    pub endpoint: Option<String>,

    /// Where to write the review comment, overriding the configured path.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Do not print progress.
    #[arg(short, long)]
    pub quiet: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands for ai-review.
#[derive(Subcommand, Debug, PartialEq, Clone)]
pub enum Commands {
    /// Manage configuration options.
    Config {
        /// Set the generation endpoint URL.
        #[arg(long)]
        set_endpoint: Option<String>,

        /// Set the path of the generated comment.
        #[arg(long)]
        set_output_path: Option<String>,

        /// Set the token budget per suggestion.
        #[arg(long)]
        set_max_tokens: Option<u32>,

        /// Set the log level (debug, info, warn, error).
        #[arg(long)]
        set_log_level: Option<String>,

        /// Set the request timeout in seconds.
        #[arg(long)]
        set_timeout_secs: Option<u64>,

        /// Set the largest report size in bytes that will be sent.
        #[arg(long)]
        set_max_report_size: Option<u64>,
    },
}
