use crate::api::client::SuggestionClient;
use crate::cli::display::CliDisplayManager;
use crate::errors::AppError;
use crate::file_processing::writer;
use crate::models::ReportKind;
use crate::utils::config::{
    get_config_path, load_config_from, validate_config, write_config_to, Config,
};
use std::path::Path;

/// Fetches the lint and format suggestions, in that order, then writes the
/// combined comment. Nothing is written unless both requests succeed.
pub async fn compose_comment(
    client: &SuggestionClient,
    lint_report: &Path,
    format_report: &Path,
    output_path: &Path,
    display: &mut CliDisplayManager,
) -> Result<(), AppError> {
    let lint_suggestion =
        fetch_with_progress(client, ReportKind::Lint, 1, lint_report, display).await?;
    let format_suggestion =
        fetch_with_progress(client, ReportKind::Format, 2, format_report, display).await?;

    display.print_saving_start();
    let comment = writer::render_comment(&lint_suggestion, &format_suggestion);
    writer::write_comment(output_path, &comment).await?;
    display.print_saving_success(output_path);

    Ok(())
}

async fn fetch_with_progress(
    client: &SuggestionClient,
    kind: ReportKind,
    step: usize,
    report_path: &Path,
    display: &mut CliDisplayManager,
) -> Result<String, AppError> {
    display.print_fetch_start(kind, step, report_path);
    display.start_spinner(kind);

    log::debug!(
        "Requesting {} suggestion for {} from {}",
        kind.display_name(),
        report_path.display(),
        client.endpoint()
    );
    let result = client.fetch(report_path).await;
    display.stop_spinner();

    let suggestion = result?;
    display.print_fetch_success(kind, &suggestion);
    Ok(suggestion)
}

/// Values passed to the config subcommand; `None` leaves a setting unchanged.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ConfigChanges {
    pub endpoint: Option<String>,
    pub output_path: Option<String>,
    pub max_tokens: Option<u32>,
    pub log_level: Option<String>,
    pub timeout_secs: Option<u64>,
    pub max_report_size: Option<u64>,
}

/// Handles the config subcommand
pub fn handle_config_subcommand(changes: ConfigChanges) -> Result<(), AppError> {
    update_config_file(&get_config_path()?, changes)
}

/// Applies `changes` to the file at `config_path`. The file is validated only
/// after the changes, so an invalid value on disk can be corrected.
fn update_config_file(config_path: &Path, changes: ConfigChanges) -> Result<(), AppError> {
    let mut config = load_config_from(config_path)?;
    apply_config_changes(&mut config, changes);
    validate_config(&config)?;
    write_config_to(config_path, &config)
}

fn apply_config_changes(config: &mut Config, changes: ConfigChanges) {
    if let Some(endpoint) = changes.endpoint {
        println!("Endpoint set to {}", endpoint);
        config.endpoint = endpoint;
    }

    if let Some(output_path) = changes.output_path {
        println!("Output path set to {}", output_path);
        config.output_path = output_path;
    }

    if let Some(max_tokens) = changes.max_tokens {
        config.max_tokens = max_tokens;
        println!("Max tokens set to {}", max_tokens);
    }

    if let Some(log_level) = changes.log_level {
        println!("Log level set to {}", log_level);
        config.log_level = log_level;
    }

    if let Some(timeout_secs) = changes.timeout_secs {
        config.timeout_secs = Some(timeout_secs);
        println!("Timeout set to {}s", timeout_secs);
    }

    if let Some(max_report_size) = changes.max_report_size {
        config.max_report_size = Some(max_report_size);
        println!("Max report size set to {} bytes", max_report_size);
    }
}
