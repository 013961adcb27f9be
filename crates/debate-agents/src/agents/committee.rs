//! The Investment Committee Chair: synthesis agent.

use rig::client::CompletionClient;
use rig::providers::openai;

use super::OaiAgent;
use crate::models::FinalDecision;
use crate::prompts;

/// Build the committee chair.
///
/// NO tools: the committee only sees the two completed cases passed via
/// prompt. Its output is validated against the decision guard, so the
/// preamble spells the guard out.
pub fn build_committee(client: &openai::CompletionsClient, model: &str) -> OaiAgent {
    client
        .agent(model)
        .name("committee")
        .description("Investment committee chair: synthesizes both cases into a verdict")
        .preamble(&prompts::with_output_schema::<FinalDecision>(
            prompts::COMMITTEE_PREAMBLE,
        ))
        .temperature(0.1)
        .build()
}
