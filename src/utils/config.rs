// src/utils/config.rs

use crate::api::config::{DEFAULT_ENDPOINT, DEFAULT_MAX_TOKENS};
use crate::errors::AppError;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::{env, fs};

/// Default location of the generated review comment.
pub const DEFAULT_OUTPUT_PATH: &str = ".github/ai_comment.md";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub endpoint: String,
    pub output_path: String,
    pub max_tokens: u32,
    pub log_level: String,
    pub timeout_secs: Option<u64>,
    pub max_report_size: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            log_level: "off".to_string(),
            timeout_secs: None,
            max_report_size: None,
        }
    }
}

pub fn get_config_path() -> Result<PathBuf, AppError> {
    let mut path = get_executable_dir()?;
    path.push("config.toml");
    Ok(path)
}

/// Validate config to prevent obviously wrong or missing values.
pub fn validate_config(config: &Config) -> Result<(), AppError> {
    validate_endpoint(&config.endpoint)?;
    if config.max_tokens == 0 {
        return Err(AppError::InvalidInput(
            "max_tokens cannot be zero".to_string(),
        ));
    }
    if config.timeout_secs == Some(0) {
        return Err(AppError::InvalidInput(
            "timeout_secs cannot be zero".to_string(),
        ));
    }
    if config.output_path.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "output_path cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Accepts only absolute http(s) URLs.
pub fn validate_endpoint(endpoint: &str) -> Result<(), AppError> {
    let url = Url::parse(endpoint)
        .map_err(|e| AppError::InvalidInput(format!("Invalid endpoint {}: {}", endpoint, e)))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(AppError::InvalidInput(format!(
            "Endpoint must use http or https, got {}",
            scheme
        ))),
    }
}

/// Read config from the file beside the executable, creating a default one if none exists.
pub fn read_config() -> Result<Config, AppError> {
    read_config_from(&get_config_path()?)
}

pub fn read_config_from(config_path: &Path) -> Result<Config, AppError> {
    let config = load_config_from(config_path)?;
    validate_config(&config)?;
    Ok(config)
}

/// Like [`read_config_from`] but without validation, so a broken file can still be edited.
pub fn load_config_from(config_path: &Path) -> Result<Config, AppError> {
    if !config_path.exists() {
        // Installs in read-only locations still run with defaults.
        let config = Config::default();
        if let Err(e) = write_config_to(config_path, &config) {
            log::warn!("Could not create {}: {}", config_path.display(), e);
        }
        return Ok(config);
    }
    let config_str = fs::read_to_string(config_path)?;
    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
}

pub fn write_config_to(config_path: &Path, config: &Config) -> Result<(), AppError> {
    let config_str = toml::to_string(config)
        .map_err(|e| AppError::InvalidInput(format!("Failed to serialize config: {}", e)))?;
    fs::write(config_path, config_str)?;
    Ok(())
}

fn get_executable_dir() -> Result<PathBuf, AppError> {
    let exe = env::current_exe()?;
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        AppError::InvalidInput(format!("Executable has no parent directory: {}", exe.display()))
    })
}
