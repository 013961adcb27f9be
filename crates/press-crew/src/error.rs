use thiserror::Error;

/// Errors for the content pipeline. A stage failure stops the pipeline;
/// later stages never run against a missing or empty artifact.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The agent runtime failed while running a stage.
    #[error("stage `{stage}` failed")]
    Stage {
        stage: &'static str,
        #[source]
        source: anyhow::Error,
    },

    /// A stage completed but produced nothing usable.
    #[error("stage `{stage}` produced an empty artifact")]
    EmptyArtifact { stage: &'static str },

    /// Writing the output files failed.
    #[error("failed to write pipeline output")]
    Io(#[from] std::io::Error),
}
