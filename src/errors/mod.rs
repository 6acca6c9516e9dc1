use crate::api::errors::SuggestionError;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum AppError {
    IoError(std::io::Error),
    Suggestion(SuggestionError),
    TomlError(toml::de::Error),
    ReadReport(PathBuf, std::io::Error),
    ReportTooLarge { path: PathBuf, size: u64, limit: u64 },
    WriteComment(PathBuf, std::io::Error),
    MissingReport(&'static str),
    InvalidInput(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::IoError(e) => write!(f, "IO error: {}", e),
            AppError::Suggestion(e) => write!(f, "Suggestion request error: {}", e),
            AppError::TomlError(e) => write!(f, "TOML parsing error: {}", e),
            AppError::ReadReport(path, e) => {
                write!(f, "Failed to read report {}: {}", path.display(), e)
            }
            AppError::ReportTooLarge { path, size, limit } => write!(
                f,
                "Report too large: {} ({} bytes, max {} bytes)",
                path.display(),
                size,
                limit
            ),
            AppError::WriteComment(path, e) => {
                write!(f, "Failed to write comment {}: {}", path.display(), e)
            }
            AppError::MissingReport(kind) => write!(f, "A {} report path is required", kind),
            AppError::InvalidInput(e) => write!(f, "Invalid input: {}", e),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::IoError(err)
    }
}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::TomlError(err)
    }
}

impl From<SuggestionError> for AppError {
    fn from(err: SuggestionError) -> Self {
        AppError::Suggestion(err)
    }
}
