use anyhow::{Context, Result};
use rig::providers::openai;

/// An OpenAI-compatible inference endpoint.
#[derive(Debug, Clone)]
pub struct Endpoint {
    pub url: String,
    pub model: String,
}

impl Endpoint {
    /// Read an endpoint from the environment, falling back to defaults.
    pub fn from_env(url_var: &str, model_var: &str, default_url: &str, default_model: &str) -> Self {
        Self {
            url: std::env::var(url_var).unwrap_or_else(|_| default_url.into()),
            model: std::env::var(model_var).unwrap_or_else(|_| default_model.into()),
        }
    }
}

/// Build a completions client for an OpenAI-compatible endpoint.
pub fn completions_client(url: &str, api_key: &str) -> Result<openai::CompletionsClient> {
    openai::CompletionsClient::builder()
        .api_key(api_key)
        .base_url(url)
        .build()
        .with_context(|| format!("failed to build completions client for {url}"))
}
