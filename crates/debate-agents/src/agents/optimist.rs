//! The Bull: bull-case research agent.

use agent_tools::WebSearchTool;
use rig::client::CompletionClient;
use rig::providers::openai;

use super::OaiAgent;
use crate::models::BullCase;
use crate::prompts;

/// Build The Bull with the web-search tool attached.
///
/// `max_turns` bounds the internal research iterations, not wall-clock
/// time.
pub fn build_optimist(
    client: &openai::CompletionsClient,
    model: &str,
    search: WebSearchTool,
    max_turns: usize,
) -> OaiAgent {
    client
        .agent(model)
        .name("optimist")
        .description("Bull-case researcher: builds the strongest case for investing")
        .preamble(&prompts::with_output_schema::<BullCase>(
            prompts::OPTIMIST_PREAMBLE,
        ))
        .temperature(0.3)
        .tool(search)
        .default_max_turns(max_turns)
        .build()
}
