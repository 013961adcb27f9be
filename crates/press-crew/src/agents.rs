//! Agent builders for the four crew roles.

use agent_tools::{completions_client, SendEmailTool, WebSearchTool};
use anyhow::Result;
use async_trait::async_trait;
use rig::agent::Agent;
use rig::client::CompletionClient;
use rig::completion::Prompt;
use rig::providers::openai;

use crate::config::PressConfig;
use crate::pipeline::ContentCrew;
use crate::prompts;

/// Type alias for agents built from OpenAI-compatible endpoints.
pub type OaiAgent = Agent<openai::completion::CompletionModel>;

/// Factory that builds the four crew agents from a `PressConfig`.
pub struct CrewFactory {
    client: openai::CompletionsClient,
    config: PressConfig,
}

impl CrewFactory {
    pub fn new(config: &PressConfig) -> Result<Self> {
        let client = completions_client(&config.endpoint.url, &config.api_key)?;
        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// The Insight Researcher, with web search attached.
    pub fn build_researcher(&self) -> Result<OaiAgent> {
        Ok(self
            .client
            .agent(&self.config.endpoint.model)
            .name("insight_researcher")
            .description("Researches current developments on a topic")
            .preamble(prompts::RESEARCHER_PREAMBLE)
            .temperature(0.3)
            .tool(WebSearchTool::from_env()?)
            .default_max_turns(self.config.max_stage_turns)
            .build())
    }

    /// The Content Architect. No tools.
    pub fn build_architect(&self) -> OaiAgent {
        self.client
            .agent(&self.config.endpoint.model)
            .name("content_architect")
            .description("Turns a research brief into a structured outline")
            .preamble(prompts::ARCHITECT_PREAMBLE)
            .temperature(0.4)
            .build()
    }

    /// The Creative Storyteller. No tools, warmer sampling.
    pub fn build_storyteller(&self) -> OaiAgent {
        self.client
            .agent(&self.config.endpoint.model)
            .name("creative_storyteller")
            .description("Writes the full blog post from an outline")
            .preamble(prompts::STORYTELLER_PREAMBLE)
            .temperature(0.7)
            .build()
    }

    /// The Delivery Specialist, with the email tool attached.
    pub fn build_delivery(&self) -> Result<OaiAgent> {
        Ok(self
            .client
            .agent(&self.config.endpoint.model)
            .name("delivery_specialist")
            .description("Packages the post as an email campaign and sends it")
            .preamble(prompts::DELIVERY_PREAMBLE)
            .temperature(0.3)
            .tool(SendEmailTool::from_env()?)
            .default_max_turns(self.config.max_stage_turns)
            .build())
    }
}

/// `ContentCrew` implementation backed by rig agents.
pub struct RigCrew {
    factory: CrewFactory,
}

impl RigCrew {
    pub fn new(factory: CrewFactory) -> Self {
        Self { factory }
    }
}

#[async_trait]
impl ContentCrew for RigCrew {
    async fn research(&self, prompt: &str) -> Result<String> {
        let agent = self.factory.build_researcher()?;
        Ok(agent.prompt(prompt).await?)
    }

    async fn outline(&self, prompt: &str) -> Result<String> {
        let agent = self.factory.build_architect();
        Ok(agent.prompt(prompt).await?)
    }

    async fn draft(&self, prompt: &str) -> Result<String> {
        let agent = self.factory.build_storyteller();
        Ok(agent.prompt(prompt).await?)
    }

    async fn deliver(&self, prompt: &str) -> Result<String> {
        let agent = self.factory.build_delivery()?;
        Ok(agent.prompt(prompt).await?)
    }
}
