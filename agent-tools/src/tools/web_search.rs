//! Web search tool backed by the Serper API.

use std::time::Duration;

use rig::completion::ToolDefinition;
use rig::tool::Tool;
use serde::Deserialize;
use tracing::debug;

use super::ToolError;

const SERPER_URL: &str = "https://google.serper.dev/search";
const DEFAULT_NUM_RESULTS: u32 = 8;
const REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Deserialize)]
pub struct SearchInput {
    /// The search query.
    pub query: String,
    /// Number of results to request (default 8).
    pub num_results: Option<u32>,
}

/// Search the web via Serper and return formatted organic results.
pub struct WebSearchTool {
    api_key: String,
    http: reqwest::Client,
}

impl WebSearchTool {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            http: reqwest::Client::new(),
        }
    }

    /// Build the tool from `SERPER_API_KEY`.
    pub fn from_env() -> Result<Self, ToolError> {
        Ok(Self::new(super::require_env("SERPER_API_KEY")?))
    }
}

impl Tool for WebSearchTool {
    const NAME: &'static str = "web_search";
    type Error = ToolError;
    type Args = SearchInput;
    type Output = String;

    async fn definition(&self, _prompt: String) -> ToolDefinition {
        ToolDefinition {
            name: "web_search".into(),
            description: "Search the web for recent information (news, funding, \
                          competitors, market data). Returns numbered results with \
                          title, link, snippet, and date."
                .into(),
            parameters: serde_json::json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "The search query"
                    },
                    "num_results": {
                        "type": "integer",
                        "description": "Number of results to return (default 8)"
                    }
                },
                "required": ["query"]
            }),
        }
    }

    async fn call(&self, args: Self::Args) -> Result<Self::Output, Self::Error> {
        let num = args.num_results.unwrap_or(DEFAULT_NUM_RESULTS);
        debug!(query = %args.query, num, "web search");

        let response = self
            .http
            .post(SERPER_URL)
            .header("X-API-KEY", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&serde_json::json!({ "q": args.query, "num": num }))
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ToolError::Upstream {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }

        let body: serde_json::Value = response.json().await?;
        let organic = body
            .get("organic")
            .and_then(|v| v.as_array())
            .map(Vec::as_slice)
            .unwrap_or_default();

        Ok(format_results(&args.query, organic))
    }
}

/// Render organic search results as numbered title/link/snippet/date blocks.
fn format_results(query: &str, results: &[serde_json::Value]) -> String {
    if results.is_empty() {
        return format!("Search: {query}\nNo results found");
    }

    let entries: Vec<String> = results
        .iter()
        .enumerate()
        .map(|(i, r)| {
            let field = |key: &str| r.get(key).and_then(|v| v.as_str()).unwrap_or("");
            let title = r
                .get("title")
                .and_then(|v| v.as_str())
                .unwrap_or("No title");
            format!(
                "{}. {}\n   {}\n   {}\n   {}",
                i + 1,
                title,
                field("link"),
                field("snippet"),
                field("date"),
            )
        })
        .collect();

    format!(
        "Search: {query}\n{}\n\n{}",
        "=".repeat(50),
        entries.join("\n")
    )
}
