//! Agent builders for the three debate roles.
//!
//! Each role is built via a free function returning
//! `Agent<openai::completion::CompletionModel>`. `AgentFactory` ties them
//! together from a `DebateConfig`, and `AgentPanel` exposes them through
//! the orchestrator's `DebatePanel` seam.

pub mod committee;
pub mod optimist;
pub mod skeptic;

use agent_tools::{completions_client, WebSearchTool};
use anyhow::Result;
use async_trait::async_trait;
use rig::agent::Agent;
use rig::completion::Prompt;
use rig::providers::openai;

use crate::config::DebateConfig;
use crate::orchestrator::DebatePanel;

/// Type alias for agents built from OpenAI-compatible endpoints.
pub type OaiAgent = Agent<openai::completion::CompletionModel>;

/// Factory that builds all debate agents from a `DebateConfig`.
pub struct AgentFactory {
    client: openai::CompletionsClient,
    config: DebateConfig,
}

impl AgentFactory {
    pub fn new(config: &DebateConfig) -> Result<Self> {
        let client = completions_client(&config.endpoint.url, &config.api_key)?;
        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Build The Bull (bull-case researcher) with the given effort cap.
    ///
    /// Research agents are built per invocation so the cap parameter
    /// takes effect on every run.
    pub fn build_optimist(&self, max_turns: usize) -> Result<OaiAgent> {
        Ok(optimist::build_optimist(
            &self.client,
            &self.config.endpoint.model,
            WebSearchTool::from_env()?,
            max_turns,
        ))
    }

    /// Build The Bear (bear-case researcher) with the given effort cap.
    pub fn build_skeptic(&self, max_turns: usize) -> Result<OaiAgent> {
        Ok(skeptic::build_skeptic(
            &self.client,
            &self.config.endpoint.model,
            WebSearchTool::from_env()?,
            max_turns,
        ))
    }

    /// Build the Investment Committee Chair. No tools, no effort cap.
    pub fn build_committee(&self) -> OaiAgent {
        committee::build_committee(&self.client, &self.config.endpoint.model)
    }
}

/// `DebatePanel` implementation backed by rig agents.
pub struct AgentPanel {
    factory: AgentFactory,
}

impl AgentPanel {
    pub fn new(factory: AgentFactory) -> Self {
        Self { factory }
    }
}

#[async_trait]
impl DebatePanel for AgentPanel {
    async fn research_bull(&self, prompt: &str, max_turns: usize) -> Result<String> {
        let agent = self.factory.build_optimist(max_turns)?;
        Ok(agent.prompt(prompt).await?)
    }

    async fn research_bear(&self, prompt: &str, max_turns: usize) -> Result<String> {
        let agent = self.factory.build_skeptic(max_turns)?;
        Ok(agent.prompt(prompt).await?)
    }

    async fn deliberate(&self, prompt: &str) -> Result<String> {
        let agent = self.factory.build_committee();
        Ok(agent.prompt(prompt).await?)
    }
}
