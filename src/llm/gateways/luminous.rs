//! Gateway for the hosted Luminous API.
//!
//! This module provides a gateway for interacting with the Luminous model API,
//! covering text completions and semantic embeddings.

use crate::error::{Result, SemblanceError};
use crate::llm::gateway::{CompletionConfig, LlmGateway, SemanticRepresentation};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info};

/// Configuration for connecting to the Luminous API.
#[derive(Debug, Clone)]
pub struct LuminousConfig {
    pub api_token: String,
    pub base_url: String,
    pub timeout: Option<std::time::Duration>,
}

impl Default for LuminousConfig {
    fn default() -> Self {
        Self {
            api_token: std::env::var("AA_TOKEN").unwrap_or_default(),
            base_url: std::env::var("AA_API_ENDPOINT")
                .unwrap_or_else(|_| "https://api.aleph-alpha.com".to_string()),
            timeout: None,
        }
    }
}

/// Gateway for the hosted Luminous model service.
///
/// Supports text completion and semantic embeddings in symmetric and
/// asymmetric (query/document) representations.
pub struct LuminousGateway {
    client: Client,
    config: LuminousConfig,
}

impl LuminousGateway {
    /// Create a new Luminous gateway with default configuration.
    pub fn new() -> Self {
        Self::with_config(LuminousConfig::default())
    }

    /// Create a new Luminous gateway with custom configuration.
    pub fn with_config(config: LuminousConfig) -> Self {
        let mut client_builder = Client::builder();

        if let Some(timeout) = config.timeout {
            client_builder = client_builder.timeout(timeout);
        }

        let client = client_builder.build().unwrap();

        Self { client, config }
    }

    /// Create gateway with custom API token.
    pub fn with_api_token(api_token: impl Into<String>) -> Self {
        Self::with_config(LuminousConfig {
            api_token: api_token.into(),
            ..Default::default()
        })
    }

    /// Create gateway with custom API token and base URL.
    pub fn with_api_token_and_base_url(
        api_token: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self::with_config(LuminousConfig {
            api_token: api_token.into(),
            base_url: base_url.into(),
            ..Default::default()
        })
    }

    fn bearer_token(&self) -> Result<&str> {
        if self.config.api_token.is_empty() {
            return Err(SemblanceError::ConfigError(
                "missing API token (set AA_TOKEN or use with_api_token)".to_string(),
            ));
        }
        Ok(&self.config.api_token)
    }
}

impl Default for LuminousGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LlmGateway for LuminousGateway {
    async fn semantic_embed(
        &self,
        model: &str,
        text: &str,
        representation: SemanticRepresentation,
    ) -> Result<Vec<f32>> {
        debug!("Calculating semantic embedding with model: {}", model);

        let token = self.bearer_token()?;
        let body = serde_json::json!({
            "model": model,
            "prompt": text,
            "representation": representation,
        });

        let response = self
            .client
            .post(format!("{}/semantic_embed", self.config.base_url))
            .header("Authorization", format!("Bearer {}", token))
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(SemblanceError::ApiError(format!(
                "Semantic embedding request failed ({}): {}",
                status, error_text
            )));
        }

        let response_body: Value = response.json().await?;

        let embedding = response_body["embedding"]
            .as_array()
            .ok_or_else(|| {
                SemblanceError::GatewayError("Invalid embedding response".to_string())
            })?
            .iter()
            .filter_map(|v| v.as_f64().map(|f| f as f32))
            .collect();

        Ok(embedding)
    }

    async fn complete(
        &self,
        model: &str,
        prompt: &str,
        config: &CompletionConfig,
    ) -> Result<String> {
        info!("Delegating to Luminous for completion");
        debug!("Model: {}, Prompt length: {}", model, prompt.len());

        let token = self.bearer_token()?;
        let body = serde_json::json!({
            "model": model,
            "prompt": prompt,
            "maximum_tokens": config.maximum_tokens,
            "temperature": config.temperature,
            "stop_sequences": config.stop_sequences,
        });

        let response = self
            .client
            .post(format!("{}/complete", self.config.base_url))
            .header("Authorization", format!("Bearer {}", token))
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(SemblanceError::ApiError(format!(
                "Completion request failed ({}): {}",
                status, error_text
            )));
        }

        let response_body: Value = response.json().await?;

        let completion = response_body["completions"][0]["completion"]
            .as_str()
            .ok_or_else(|| {
                SemblanceError::GatewayError("No completion in response".to_string())
            })?;

        Ok(completion.to_string())
    }
}
