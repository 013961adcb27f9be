//! The Bear: bear-case research agent.

use agent_tools::WebSearchTool;
use rig::client::CompletionClient;
use rig::providers::openai;

use super::OaiAgent;
use crate::models::BearCase;
use crate::prompts;

/// Build The Bear with the web-search tool attached.
pub fn build_skeptic(
    client: &openai::CompletionsClient,
    model: &str,
    search: WebSearchTool,
    max_turns: usize,
) -> OaiAgent {
    client
        .agent(model)
        .name("skeptic")
        .description("Bear-case researcher: documents every risk in the deal")
        .preamble(&prompts::with_output_schema::<BearCase>(
            prompts::SKEPTIC_PREAMBLE,
        ))
        .temperature(0.3)
        .tool(search)
        .default_max_turns(max_turns)
        .build()
}
