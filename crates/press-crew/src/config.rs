use std::path::PathBuf;

use agent_tools::Endpoint;
use anyhow::{Context, Result};

const DEFAULT_MAX_STAGE_TURNS: usize = 15;

/// Content pipeline configuration, read from the environment.
///
/// The SendGrid credentials (`SENDGRID_API_KEY`, `SENDGRID_FROM_EMAIL`,
/// `SENDGRID_TO_EMAIL`) are read by the email tool itself when the
/// delivery agent is built.
#[derive(Debug, Clone)]
pub struct PressConfig {
    pub endpoint: Endpoint,
    pub api_key: String,
    /// Where `blog_post.md` and `email_campaign.md` land.
    pub output_dir: PathBuf,
    /// Effort cap for the tool-using stages (research, delivery).
    pub max_stage_turns: usize,
}

impl PressConfig {
    pub fn from_env() -> Result<Self> {
        let endpoint = Endpoint::from_env(
            "PRESS_LLM_URL",
            "PRESS_LLM_MODEL",
            "https://api.openai.com/v1",
            "gpt-4o-mini",
        );
        let api_key = std::env::var("OPENAI_API_KEY").context("OPENAI_API_KEY must be set")?;
        let output_dir = std::env::var("PRESS_OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("output"));
        let max_stage_turns = std::env::var("PRESS_MAX_STAGE_TURNS")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|v| *v > 0)
            .unwrap_or(DEFAULT_MAX_STAGE_TURNS);

        Ok(Self {
            endpoint,
            api_key,
            output_dir,
            max_stage_turns,
        })
    }
}
