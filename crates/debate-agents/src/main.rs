use anyhow::Result;
use clap::Parser;
use tracing::info;

use debate_agents::agents::{AgentFactory, AgentPanel};
use debate_agents::config::DebateConfig;
use debate_agents::{format, orchestrator};

/// Multi-agent startup analyzer: bull vs. bear debate with a final verdict.
#[derive(Parser)]
#[command(name = "debate-agents")]
struct Cli {
    /// Startup name to analyze.
    #[arg(short, long)]
    startup: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    let config = DebateConfig::from_env()?;
    info!(
        endpoint = %config.endpoint.url,
        model = %config.endpoint.model,
        "debate orchestrator starting"
    );

    let panel = AgentPanel::new(AgentFactory::new(&config)?);
    let outcome = orchestrator::run_debate(&panel, &cli.startup, config.max_research_turns).await?;

    println!("{}", "=".repeat(60));
    println!("{}", format::format_verdict(&outcome.decision));
    println!("{}", format::format_bull_case(&outcome.bull));
    println!("{}", format::format_bear_case(&outcome.bear));

    Ok(())
}
