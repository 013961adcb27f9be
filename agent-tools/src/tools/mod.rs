//! Rig-compatible tools shared by the agent demos.
//!
//! Each tool implements `rig::tool::Tool` and can be attached to agents
//! via `AgentBuilder::tool()`. Both talk to external HTTP APIs; neither
//! holds state beyond its credentials and a reqwest client.

pub mod send_email;
pub mod web_search;

pub use send_email::SendEmailTool;
pub use web_search::WebSearchTool;

/// Errors that can occur during tool execution.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("missing API credential: set {var}")]
    MissingApiKey { var: &'static str },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("upstream returned {status}: {body}")]
    Upstream { status: u16, body: String },
}

/// Read a required credential from the environment.
pub(crate) fn require_env(var: &'static str) -> Result<String, ToolError> {
    std::env::var(var).map_err(|_| ToolError::MissingApiKey { var })
}
