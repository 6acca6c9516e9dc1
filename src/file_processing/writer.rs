use crate::errors::AppError;
use crate::models::ReportKind;
use std::path::Path;
use tokio::fs;

/// Title line of every review comment.
pub const COMMENT_TITLE: &str = "### AI代码审核与补全建议";

/// Renders the Markdown review comment from the two suggestions.
pub fn render_comment(lint_suggestion: &str, format_suggestion: &str) -> String {
    let mut comment = String::new();
    comment.push_str(COMMENT_TITLE);
    comment.push('\n');
    comment.push_str(ReportKind::Lint.section_label());
    comment.push('\n');
    comment.push_str(lint_suggestion);
    comment.push_str("\n\n");
    comment.push_str(ReportKind::Format.section_label());
    comment.push('\n');
    comment.push_str(format_suggestion);
    comment
}

/// Writes the comment, replacing any previous file. The parent directory must exist.
pub async fn write_comment(path: &Path, comment: &str) -> Result<(), AppError> {
    fs::write(path, comment)
        .await
        .map_err(|e| AppError::WriteComment(path.to_path_buf(), e))?;

    log::info!("Wrote {} bytes to {}", comment.len(), path.display());
    Ok(())
}
