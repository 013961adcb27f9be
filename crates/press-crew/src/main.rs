use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use press_crew::agents::{CrewFactory, RigCrew};
use press_crew::config::PressConfig;
use press_crew::pipeline;

/// Content crew: research a topic, write a blog post, send the campaign.
#[derive(Parser)]
#[command(name = "press-crew")]
struct Cli {
    /// Topic to cover.
    #[arg(short, long, default_value = "LiDar Technology in Autonomous Vehicles")]
    topic: String,

    /// Where to write blog_post.md and email_campaign.md
    /// (overrides PRESS_OUTPUT_DIR).
    #[arg(long)]
    output_dir: Option<PathBuf>,
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
    let mut config = PressConfig::from_env()?;
    if let Some(dir) = cli.output_dir {
        config.output_dir = dir;
    }
    info!(
        endpoint = %config.endpoint.url,
        model = %config.endpoint.model,
        topic = %cli.topic,
        "content pipeline starting"
    );

    let crew = RigCrew::new(CrewFactory::new(&config)?);
    let run = pipeline::run_pipeline(&crew, &cli.topic).await?;
    run.write_to(&config.output_dir)?;
    info!(dir = %config.output_dir.display(), "artifacts written");

    Ok(())
}
