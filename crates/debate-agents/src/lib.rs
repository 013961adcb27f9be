//! Bull vs. bear startup debate over rig agents.
//!
//! Two research agents build opposing cases for a startup concurrently;
//! an investment committee agent then synthesizes both into a final
//! decision. The decision is validated by a cross-field guard that
//! rejects any INVEST verdict carrying unresolved risks, so a
//! self-contradictory recommendation can never leave the pipeline.

pub mod agents;
pub mod config;
pub mod error;
pub mod format;
pub mod models;
pub mod orchestrator;
pub mod prompts;

pub use error::DebateError;
pub use models::{BearCase, BullCase, FinalDecision, InvestmentDecision, RiskMitigation};
pub use orchestrator::{run_debate, DebateOutcome, DebatePanel};
