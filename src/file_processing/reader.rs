use crate::errors::AppError;
use std::path::Path;
use tokio::fs;

/// Reads a whole report file as text.
///
/// `max_size` is only enforced when configured; by default the read is unbounded.
pub async fn read_report(path: &Path, max_size: Option<u64>) -> Result<String, AppError> {
    if let Some(limit) = max_size {
        let metadata = fs::metadata(path)
            .await
            .map_err(|e| AppError::ReadReport(path.to_path_buf(), e))?;
        if metadata.len() > limit {
            return Err(AppError::ReportTooLarge {
                path: path.to_path_buf(),
                size: metadata.len(),
                limit,
            });
        }
    }

    let contents = fs::read_to_string(path)
        .await
        .map_err(|e| AppError::ReadReport(path.to_path_buf(), e))?;

    log::debug!("Read {} bytes from {}", contents.len(), path.display());
    Ok(contents)
}
