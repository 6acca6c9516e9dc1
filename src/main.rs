mod api;
mod cli;
mod commands;
mod errors;
mod file_processing;
mod models;
mod utils;

#[cfg(test)]
mod test_support;

use crate::utils::logger;
use api::client::SuggestionClient;
use clap::Parser;
use cli::args::{Args, Commands};
use cli::display::CliDisplayManager;
use commands::ConfigChanges;
use errors::AppError;
use std::path::PathBuf;
use std::time::Instant;
use utils::config::{read_config, validate_endpoint};

/// The main entry point of the application
#[tokio::main]
async fn main() -> Result<(), AppError> {
    run(Args::parse()).await
}

/// Runs one invocation. Argument problems are reported before any report is
/// read or any request is sent.
async fn run(args: Args) -> Result<(), AppError> {
    let start_time = Instant::now();

    if let Some(command) = args.command {
        return handle_subcommand(command);
    }

    let lint_report = args.lint_report.ok_or(AppError::MissingReport("lint"))?;
    let format_report = args.format_report.ok_or(AppError::MissingReport("format"))?;

    if let Some(endpoint) = &args.endpoint {
        validate_endpoint(endpoint)?;
    }

    let config = read_config()?;
    logger::setup_logger(&config);

    let output_path = args
        .output
        .unwrap_or_else(|| PathBuf::from(&config.output_path));
    let client = SuggestionClient::from_config(&config, args.endpoint)?;

    let mut display_manager = CliDisplayManager::new(args.quiet);
    display_manager.print_header();

    commands::compose_comment(
        &client,
        &lint_report,
        &format_report,
        &output_path,
        &mut display_manager,
    )
    .await?;

    display_manager.print_footer(start_time.elapsed());
    Ok(())
}

fn handle_subcommand(command: Commands) -> Result<(), AppError> {
    match command {
        Commands::Config {
            set_endpoint,
            set_output_path,
            set_max_tokens,
            set_log_level,
            set_timeout_secs,
            set_max_report_size,
        } => commands::handle_config_subcommand(ConfigChanges {
            endpoint: set_endpoint,
            output_path: set_output_path,
            max_tokens: set_max_tokens,
            log_level: set_log_level,
            timeout_secs: set_timeout_secs,
            max_report_size: set_max_report_size,
        }),
    }
}
