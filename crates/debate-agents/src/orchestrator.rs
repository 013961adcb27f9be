//! Debate orchestration: run the bull and bear research concurrently,
//! then hand both completed cases to the investment committee.
//!
//! The protocol is a fork-join of width two followed by one sequential
//! dependent step. There is no retry and no fallback: any producer or
//! validation failure propagates out of `run_debate` and the run yields
//! no artifacts at all.

use anyhow::Result;
use async_trait::async_trait;
use tracing::info;

use crate::error::DebateError;
use crate::models::{BearCase, BullCase, FinalDecision};

/// The seam between the orchestrator and the agent runtime.
///
/// Implementations return each producer's raw final response; parsing and
/// validation happen in `run_debate`, so a misbehaving producer can never
/// smuggle an invalid artifact past the schemas.
#[async_trait]
pub trait DebatePanel: Send + Sync {
    /// Research the bull case, bounded by `max_turns` tool-use iterations.
    async fn research_bull(&self, prompt: &str, max_turns: usize) -> Result<String>;
    /// Research the bear case, bounded by `max_turns` tool-use iterations.
    async fn research_bear(&self, prompt: &str, max_turns: usize) -> Result<String>;
    /// Synthesize the final decision from both completed cases.
    async fn deliberate(&self, prompt: &str) -> Result<String>;
}

/// The three artifacts produced by a successful debate run.
#[derive(Debug, Clone)]
pub struct DebateOutcome {
    pub decision: FinalDecision,
    pub bull: BullCase,
    pub bear: BearCase,
}

/// Run the full debate for one startup.
///
/// The two research branches run concurrently on the calling task via
/// `tokio::try_join!`, which returns on the first error and drops the
/// in-flight sibling: a failed branch cancels the other, and the
/// committee is never consulted. Completion order between the branches is
/// unconstrained; the committee runs strictly after both have finished.
pub async fn run_debate<P: DebatePanel + ?Sized>(
    panel: &P,
    startup: &str,
    max_research_turns: usize,
) -> Result<DebateOutcome, DebateError> {
    info!(startup, max_research_turns, "starting debate");

    let bull_branch = async {
        let raw = panel
            .research_bull(&bull_prompt(startup), max_research_turns)
            .await
            .map_err(|e| DebateError::producer("optimist", e))?;
        BullCase::parse(&raw)
    };
    let bear_branch = async {
        let raw = panel
            .research_bear(&bear_prompt(startup), max_research_turns)
            .await
            .map_err(|e| DebateError::producer("skeptic", e))?;
        BearCase::parse(&raw)
    };
    let (bull, bear) = tokio::try_join!(bull_branch, bear_branch)?;
    info!(
        confidence = bull.confidence_score,
        risk_severity = bear.risk_severity_score,
        "both cases complete, committee deliberating"
    );

    let raw = panel
        .deliberate(&committee_prompt(startup, &bull, &bear))
        .await
        .map_err(|e| DebateError::producer("committee", e))?;
    let decision = FinalDecision::parse(&raw)?;
    info!(decision = %decision.decision, "committee has ruled");

    Ok(DebateOutcome {
        decision,
        bull,
        bear,
    })
}

fn bull_prompt(startup: &str) -> String {
    format!("Analyze startup: {startup}. Build the strongest bull case for investment.")
}

fn bear_prompt(startup: &str) -> String {
    format!("Analyze startup: {startup}. Build the most thorough bear case with all risks.")
}

/// Committee input: both completed cases as pretty JSON plus a reminder
/// of the guard the decision will be validated against.
fn committee_prompt(startup: &str, bull: &BullCase, bear: &BearCase) -> String {
    let bull_json = serde_json::to_string_pretty(bull).unwrap_or_default();
    let bear_json = serde_json::to_string_pretty(bear).unwrap_or_default();
    format!(
        "# Startup: {startup}\n\n\
         ## BULL CASE (from The Bull)\n{bull_json}\n\n\
         ## BEAR CASE (from The Bear)\n{bear_json}\n\n\
         Based on both cases, make your final investment decision.\n\
         Remember: you CANNOT recommend INVEST while unresolved_risks is non-empty."
    )
}
