//! Error taxonomy for the debate pipeline.
//!
//! All three variants propagate out of `run_debate` unchanged: the
//! orchestrator performs no retry and substitutes no degraded artifact.
//! A half-formed recommendation is worse than none.

use thiserror::Error;

/// Unified error type for debate orchestration.
#[derive(Debug, Error)]
pub enum DebateError {
    /// A produced value failed required-field, type, range, or
    /// list-length checks. Fatal to that producer's contribution.
    #[error("{artifact} failed schema validation: {reason}")]
    SchemaValidation {
        artifact: &'static str,
        reason: String,
    },

    /// A structurally valid final decision violated a cross-field rule
    /// (INVEST with unresolved risks, or a weight split that does not
    /// sum to 100). Fatal to that synthesis attempt; never auto-corrected.
    #[error("decision guard violation: {0}")]
    GuardViolation(String),

    /// The agent runtime failed before yielding a value (network, auth,
    /// rate limit, or effort cap exhausted).
    #[error("producer `{role}` failed")]
    Producer {
        role: &'static str,
        #[source]
        source: anyhow::Error,
    },
}

impl DebateError {
    pub(crate) fn schema(artifact: &'static str, reason: impl std::fmt::Display) -> Self {
        Self::SchemaValidation {
            artifact,
            reason: reason.to_string(),
        }
    }

    pub(crate) fn producer(role: &'static str, source: anyhow::Error) -> Self {
        Self::Producer { role, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_error_names_the_artifact() {
        let err = DebateError::schema("bear case", "market_risks: too short");
        assert!(err.to_string().contains("bear case"));
        assert!(err.to_string().contains("too short"));
    }

    #[test]
    fn producer_error_keeps_the_source() {
        let err = DebateError::producer("optimist", anyhow::anyhow!("rate limited"));
        let source = std::error::Error::source(&err).map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("rate limited"));
    }
}
