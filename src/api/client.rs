// src/api/client.rs

use super::{config, errors::SuggestionError};
use crate::errors::AppError;
use crate::file_processing::reader;
use crate::models::generate::{GenerateRequest, GenerateResponse};
use crate::utils::config::Config;
use reqwest::Client;
use std::path::Path;
use std::time::Duration;

/// Client for the local text-generation endpoint.
pub struct SuggestionClient {
    client: Client,
    endpoint: String,
    max_tokens: u32,
    max_report_size: Option<u64>,
}

impl SuggestionClient {
    /// Creates a client for `endpoint` with the default token budget and no timeout.
    #[cfg(test)]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            max_tokens: config::DEFAULT_MAX_TOKENS,
            max_report_size: None,
        }
    }

    /// Creates a client from the loaded config. `endpoint` overrides `config.endpoint`.
    pub fn from_config(config: &Config, endpoint: Option<String>) -> Result<Self, SuggestionError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: endpoint.unwrap_or_else(|| config.endpoint.clone()),
            max_tokens: config.max_tokens,
            max_report_size: config.max_report_size,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Reads a report file and returns the endpoint's suggestion for it.
    pub async fn fetch(&self, report_path: &Path) -> Result<String, AppError> {
        let report = reader::read_report(report_path, self.max_report_size).await?;
        let suggestion = self.request_suggestion(&report).await?;
        Ok(suggestion)
    }

    /// Sends one report's text to the endpoint.
    pub async fn request_suggestion(&self, report: &str) -> Result<String, SuggestionError> {
        let request = GenerateRequest {
            prompt: config::build_prompt(report),
            max_tokens: self.max_tokens,
        };

        log::debug!(
            "POST {} (prompt {} bytes, max_tokens {})",
            self.endpoint,
            request.prompt.len(),
            request.max_tokens
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(SuggestionError::StatusError { status, body });
        }

        let raw_response = response.text().await?;
        let parsed = GenerateResponse::from_body(&raw_response)?;

        log::info!("Received suggestion ({} bytes)", parsed.result.len());
        Ok(parsed.result)
    }
}
