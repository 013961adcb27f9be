//! The four-stage content pipeline: research, outline, write, deliver.
//!
//! Stages run strictly sequentially; each stage's prompt embeds the
//! previous stage's artifact. A failed or empty stage stops the pipeline
//! (fail-closed, no retry), so later stages never see a half-formed
//! input.

use std::path::Path;

use anyhow::Result;
use async_trait::async_trait;
use tracing::info;

use crate::error::PipelineError;
use crate::prompts;

/// The seam between the pipeline and the agent runtime. Each method runs
/// one stage's agent and returns its raw final response.
#[async_trait]
pub trait ContentCrew: Send + Sync {
    async fn research(&self, prompt: &str) -> Result<String>;
    async fn outline(&self, prompt: &str) -> Result<String>;
    async fn draft(&self, prompt: &str) -> Result<String>;
    async fn deliver(&self, prompt: &str) -> Result<String>;
}

/// All four artifacts of a completed pipeline run.
#[derive(Debug, Clone)]
pub struct ContentRun {
    pub research_brief: String,
    pub content_outline: String,
    pub blog_post: String,
    pub email_campaign: String,
}

impl ContentRun {
    /// Write the publishable artifacts (`blog_post.md`,
    /// `email_campaign.md`) into `dir`, creating it if needed.
    pub fn write_to(&self, dir: &Path) -> Result<(), PipelineError> {
        std::fs::create_dir_all(dir)?;
        std::fs::write(dir.join("blog_post.md"), &self.blog_post)?;
        std::fs::write(dir.join("email_campaign.md"), &self.email_campaign)?;
        Ok(())
    }
}

/// Run the full pipeline for one topic.
pub async fn run_pipeline<C: ContentCrew + ?Sized>(
    crew: &C,
    topic: &str,
) -> Result<ContentRun, PipelineError> {
    info!(topic, "starting content pipeline");

    let research_brief =
        stage_output("research", crew.research(&prompts::research_prompt(topic)).await)?;
    info!(chars = research_brief.len(), "research brief complete");

    let content_outline = stage_output(
        "outline",
        crew.outline(&prompts::outline_prompt(topic, &research_brief)).await,
    )?;
    let blog_post = stage_output(
        "writing",
        crew.draft(&prompts::writing_prompt(topic, &content_outline)).await,
    )?;
    info!(chars = blog_post.len(), "blog post complete");

    let email_campaign = stage_output(
        "delivery",
        crew.deliver(&prompts::email_prompt(topic, &blog_post)).await,
    )?;
    info!("email campaign delivered");

    Ok(ContentRun {
        research_brief,
        content_outline,
        blog_post,
        email_campaign,
    })
}

fn stage_output(stage: &'static str, result: Result<String>) -> Result<String, PipelineError> {
    let text = result.map_err(|source| PipelineError::Stage { stage, source })?;
    if text.trim().is_empty() {
        return Err(PipelineError::EmptyArtifact { stage });
    }
    Ok(text)
}
