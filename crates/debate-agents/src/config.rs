use agent_tools::Endpoint;
use anyhow::{Context, Result};

const DEFAULT_MAX_RESEARCH_TURNS: usize = 20;

/// Top-level debate configuration, read from the environment.
#[derive(Debug, Clone)]
pub struct DebateConfig {
    /// OpenAI-compatible endpoint serving all three agents.
    pub endpoint: Endpoint,
    pub api_key: String,
    /// Effort cap: the maximum tool-use iterations each research agent
    /// may spend before it must answer. An iteration bound, not a
    /// wall-clock timeout.
    pub max_research_turns: usize,
}

impl DebateConfig {
    pub fn from_env() -> Result<Self> {
        let endpoint = Endpoint::from_env(
            "DEBATE_LLM_URL",
            "DEBATE_LLM_MODEL",
            "https://api.openai.com/v1",
            "gpt-4o-mini",
        );
        let api_key = std::env::var("OPENAI_API_KEY").context("OPENAI_API_KEY must be set")?;
        let max_research_turns = std::env::var("DEBATE_MAX_RESEARCH_TURNS")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|v| *v > 0)
            .unwrap_or(DEFAULT_MAX_RESEARCH_TURNS);

        Ok(Self {
            endpoint,
            api_key,
            max_research_turns,
        })
    }
}
