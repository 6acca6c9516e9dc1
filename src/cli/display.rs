use crate::models::ReportKind;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

/// Manages CLI display and output formatting.
pub struct CliDisplayManager {
    spinner: Option<ProgressBar>,
    quiet: bool,
}

impl CliDisplayManager {
    /// Creates a new `CliDisplayManager`. A quiet manager prints nothing.
    pub fn new(quiet: bool) -> Self {
        CliDisplayManager {
            spinner: None,
            quiet,
        }
    }

    /// Prints the application header.
    pub fn print_header(&self) {
        if self.quiet {
            return;
        }
        let title = format!("│  🔍 ai-review v{:<6}│", env!("CARGO_PKG_VERSION"));
        println!("\n{}", "╭──────────────────────╮".bright_magenta());
        println!("{}", title.bright_magenta().bold());
        println!("{}\n", "╰──────────────────────╯".bright_magenta());
    }

    /// Prints the start of a suggestion request.
    pub fn print_fetch_start(&self, kind: ReportKind, step: usize, report_path: &Path) {
        self.print_section(
            "⚓",
            &format!("[{}/3] Requesting {} suggestion", step, kind.display_name()),
            &format!("Report: {}", report_path.display()),
        );
    }

    /// Prints a success message for a received suggestion.
    pub fn print_fetch_success(&self, kind: ReportKind, suggestion: &str) {
        self.print_info(&format!(
            "Received {} suggestion ({} chars)",
            kind.display_name(),
            suggestion.chars().count()
        ));
    }

    /// Prints the start of writing the comment.
    pub fn print_saving_start(&self) {
        self.print_section("💾", "[3/3] Writing Comment", "");
    }

    /// Prints a success message for the written comment.
    pub fn print_saving_success(&self, output_path: &Path) {
        self.print_info(&format!("Saved comment to '{}'", output_path.display()));
    }

    /// Prints the application footer.
    pub fn print_footer(&self, duration: Duration) {
        if self.quiet {
            return;
        }
        println!();
        println!(
            "{}",
            format!("⚡ Completed in {:.2?}", duration)
                .bright_white()
                .dimmed(),
        );
        println!();
    }

    /// Starts a spinner while waiting on the endpoint.
    pub fn start_spinner(&mut self, kind: ReportKind) {
        if self.quiet {
            return;
        }
        let spinner = ProgressBar::new_spinner();
        let template = format!(
            "   {} {{spinner}} {}",
            "→".bright_white(),
            format!("Waiting for {} suggestion", kind.display_name())
                .italic()
                .bright_white()
        );
        if let Ok(style) = ProgressStyle::with_template(&template) {
            spinner.set_style(style.tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]));
        }
        spinner.enable_steady_tick(Duration::from_millis(80));
        self.spinner = Some(spinner);
    }

    /// Stops the spinner.
    pub fn stop_spinner(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }

    /// Helper function to print a section header.
    fn print_section(&self, icon: &str, title: &str, description: &str) {
        if self.quiet {
            return;
        }
        println!("{} {}", icon.bright_yellow(), title.bright_cyan().bold());
        if !description.is_empty() {
            println!(
                "   {} {}",
                "→".bright_white(),
                description.italic().bright_white()
            );
        }
    }

    /// Helper function to print an informational message.
    fn print_info(&self, message: &str) {
        if self.quiet {
            return;
        }
        println!(
            "   {} {}",
            "→".bright_white(),
            message.italic().bright_white()
        );
    }
}
