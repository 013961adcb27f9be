//! Typed debate artifacts and their validation.
//!
//! The orchestrator must parse every raw producer response into one of
//! these contracts before consuming it. Malformed responses are rejected
//! (fail-closed); no repair is attempted. `FinalDecision` additionally
//! carries the cross-field guard that keeps an internally contradictory
//! recommendation from ever existing as a value.

use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::DebateError;

/// The optimistic investment thesis: reasons to invest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, Validate)]
pub struct BullCase {
    pub startup_name: String,
    /// What the startup does, in one sentence.
    pub one_liner: String,
    /// TAM/SAM analysis and market size.
    pub market_opportunity: String,
    /// Why they win against competitors.
    pub competitive_moat: String,
    /// Key growth drivers. At least three.
    #[validate(length(min = 3))]
    pub growth_catalysts: Vec<String>,
    /// Revenue, users, partnerships. May be empty for pre-traction companies.
    pub traction_highlights: Vec<String>,
    pub team_strengths: Vec<String>,
    /// Similar successful acquisitions or IPOs.
    pub comparable_exits: Vec<String>,
    /// Investment confidence, 1 (none) to 10 (table-pounding).
    #[validate(range(min = 1, max = 10))]
    pub confidence_score: u8,
    /// The bull case in two or three sentences.
    pub investment_thesis_summary: String,
}

/// The skeptical risk analysis: reasons NOT to invest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, Validate)]
pub struct BearCase {
    pub startup_name: String,
    /// Market saturation, timing, and size risks. At least two.
    #[validate(length(min = 2))]
    pub market_risks: Vec<String>,
    /// Team, operations, and scaling challenges. At least two.
    #[validate(length(min = 2))]
    pub execution_risks: Vec<String>,
    /// Who could kill this company.
    pub competitive_threats: Vec<String>,
    /// Burn rate, unit economics, funding risks.
    pub financial_concerns: Vec<String>,
    #[serde(default)]
    pub regulatory_risks: Option<Vec<String>>,
    #[serde(default)]
    pub technology_risks: Option<Vec<String>>,
    /// The top critical weaknesses. At least three.
    #[validate(length(min = 3))]
    pub key_weaknesses: Vec<String>,
    /// The most likely way this startup fails.
    pub kill_scenario: String,
    /// Overall risk level, 1 (benign) to 10 (radioactive).
    #[validate(range(min = 1, max = 10))]
    pub risk_severity_score: u8,
}

/// Committee verdict variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvestmentDecision {
    Invest,
    Pass,
    FollowUp,
}

impl std::fmt::Display for InvestmentDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invest => write!(f, "INVEST"),
            Self::Pass => write!(f, "PASS"),
            Self::FollowUp => write!(f, "FOLLOW_UP"),
        }
    }
}

/// A single risk and how it is mitigated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RiskMitigation {
    pub risk: String,
    pub mitigation: String,
}

/// Investment committee verdict.
///
/// An INVEST decision with unmitigated risks cannot be constructed: the
/// guard rejects it at validation time instead of trusting the synthesis
/// producer to self-police.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, Validate)]
pub struct FinalDecision {
    pub startup_name: String,
    pub decision: InvestmentDecision,
    /// The synthesized reasoning for the decision.
    pub investment_thesis: String,
    /// Risks from the bear case that remain unmitigated. Must be empty
    /// for an INVEST decision.
    #[serde(default)]
    pub unresolved_risks: Vec<String>,
    #[serde(default)]
    pub risk_mitigations: Vec<RiskMitigation>,
    /// Weight given to the bull case, 0-100.
    #[validate(range(min = 0, max = 100))]
    pub bull_case_weight: u8,
    /// Weight given to the bear case, 0-100. The two weights must sum
    /// to exactly 100.
    #[validate(range(min = 0, max = 100))]
    pub bear_case_weight: u8,
    /// e.g. "$500K seed check".
    #[serde(default)]
    pub recommended_check_size: Option<String>,
    /// What to verify before writing the check.
    #[serde(default)]
    pub key_due_diligence: Option<Vec<String>>,
    /// Questions for the founders.
    #[serde(default)]
    pub follow_up_questions: Option<Vec<String>>,
}

impl BullCase {
    /// Parse a raw producer response into a validated bull case.
    pub fn parse(raw: &str) -> Result<Self, DebateError> {
        let case: Self = from_json_block(raw, "bull case")?;
        case.ensure_valid()?;
        Ok(case)
    }

    /// Field-level validation (list minimums, score range).
    pub fn ensure_valid(&self) -> Result<(), DebateError> {
        self.validate()
            .map_err(|e| DebateError::schema("bull case", e))
    }
}

impl BearCase {
    /// Parse a raw producer response into a validated bear case.
    pub fn parse(raw: &str) -> Result<Self, DebateError> {
        let case: Self = from_json_block(raw, "bear case")?;
        case.ensure_valid()?;
        Ok(case)
    }

    /// Field-level validation (list minimums, score range).
    pub fn ensure_valid(&self) -> Result<(), DebateError> {
        self.validate()
            .map_err(|e| DebateError::schema("bear case", e))
    }
}

impl FinalDecision {
    /// Parse a raw producer response into a validated, guarded decision.
    pub fn parse(raw: &str) -> Result<Self, DebateError> {
        let decision: Self = from_json_block(raw, "final decision")?;
        decision.ensure_valid()?;
        Ok(decision)
    }

    /// Field-level validation followed by the cross-field guard.
    ///
    /// The guard only runs once every field is individually well-formed,
    /// so `SchemaValidation` and `GuardViolation` never mix.
    pub fn ensure_valid(&self) -> Result<(), DebateError> {
        self.validate()
            .map_err(|e| DebateError::schema("final decision", e))?;
        self.guard()
    }

    /// Cross-field consistency rules, reported on the first rule that
    /// fails: INVEST-with-unresolved-risks, then the weight split.
    fn guard(&self) -> Result<(), DebateError> {
        if self.decision == InvestmentDecision::Invest && !self.unresolved_risks.is_empty() {
            return Err(DebateError::GuardViolation(format!(
                "cannot recommend INVEST with {} unresolved risks: {:?}; \
                 mitigate them in risk_mitigations or change the decision to PASS/FOLLOW_UP",
                self.unresolved_risks.len(),
                self.unresolved_risks,
            )));
        }
        let total = u16::from(self.bull_case_weight) + u16::from(self.bear_case_weight);
        if total != 100 {
            return Err(DebateError::GuardViolation(format!(
                "bull case weight ({}%) + bear case weight ({}%) must equal 100%",
                self.bull_case_weight, self.bear_case_weight,
            )));
        }
        Ok(())
    }
}

fn from_json_block<T: DeserializeOwned>(raw: &str, artifact: &'static str) -> Result<T, DebateError> {
    let json = extract_json_block(raw).unwrap_or(raw);
    serde_json::from_str(json).map_err(|e| DebateError::schema(artifact, e))
}

/// Try to extract a JSON object from a response that may contain
/// surrounding prose: a ```json fenced block first, then the outermost
/// brace pair.
fn extract_json_block(text: &str) -> Option<&str> {
    if let Some(start) = text.find("```json") {
        let body = start + "```json".len();
        if let Some(end) = text[body..].find("```") {
            return Some(text[body..body + end].trim());
        }
    }

    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bull_fixture() -> BullCase {
        BullCase {
            startup_name: "Acme Robotics".into(),
            one_liner: "Robotic picking for mid-size warehouses".into(),
            market_opportunity: "$30B warehouse automation TAM".into(),
            competitive_moat: "Proprietary grasping models".into(),
            growth_catalysts: vec![
                "Labor shortages".into(),
                "Falling hardware costs".into(),
                "3PL partnerships".into(),
            ],
            traction_highlights: vec!["$4M ARR".into()],
            team_strengths: vec!["Ex-Kiva founding engineers".into()],
            comparable_exits: vec!["Kiva Systems ($775M)".into()],
            confidence_score: 8,
            investment_thesis_summary: "Strong team in an accelerating market.".into(),
        }
    }

    fn bear_fixture() -> BearCase {
        BearCase {
            startup_name: "Acme Robotics".into(),
            market_risks: vec!["Crowded space".into(), "Long sales cycles".into()],
            execution_risks: vec!["Hardware margins".into(), "Field support costs".into()],
            competitive_threats: vec!["Amazon in-housing".into()],
            financial_concerns: vec!["18 months of runway".into()],
            regulatory_risks: None,
            technology_risks: None,
            key_weaknesses: vec![
                "Capital intensity".into(),
                "Customer concentration".into(),
                "No recurring software revenue".into(),
            ],
            kill_scenario: "A price war with better-funded incumbents.".into(),
            risk_severity_score: 6,
        }
    }

    fn decision_fixture(
        decision: InvestmentDecision,
        unresolved_risks: Vec<String>,
        bull_case_weight: u8,
        bear_case_weight: u8,
    ) -> FinalDecision {
        FinalDecision {
            startup_name: "Acme Robotics".into(),
            decision,
            investment_thesis: "The market pull outweighs the execution risk.".into(),
            unresolved_risks,
            risk_mitigations: vec![],
            bull_case_weight,
            bear_case_weight,
            recommended_check_size: None,
            key_due_diligence: None,
            follow_up_questions: None,
        }
    }

    // -- FinalDecision guard --

    #[test]
    fn invest_with_unresolved_risks_is_rejected() {
        let d = decision_fixture(
            InvestmentDecision::Invest,
            vec!["Customer concentration".into()],
            70,
            30,
        );
        let err = d.ensure_valid().unwrap_err();
        assert!(matches!(err, DebateError::GuardViolation(_)));
        assert!(err.to_string().contains("unresolved risks"));
    }

    #[test]
    fn invest_with_no_unresolved_risks_is_accepted() {
        let d = decision_fixture(InvestmentDecision::Invest, vec![], 70, 30);
        d.ensure_valid().unwrap();
    }

    #[test]
    fn pass_permits_unresolved_risks() {
        let d = decision_fixture(
            InvestmentDecision::Pass,
            vec!["Market too crowded".into()],
            40,
            60,
        );
        d.ensure_valid().unwrap();
    }

    #[test]
    fn weights_must_sum_to_exactly_100() {
        for (bull, bear) in [(0, 0), (100, 100), (40, 59), (50, 51), (99, 0)] {
            let d = decision_fixture(InvestmentDecision::Pass, vec![], bull, bear);
            let err = d.ensure_valid().unwrap_err();
            assert!(
                matches!(err, DebateError::GuardViolation(_)),
                "{bull}/{bear} should violate the weight-sum rule"
            );
        }
        for (bull, bear) in [(0, 100), (100, 0), (40, 60)] {
            let d = decision_fixture(InvestmentDecision::FollowUp, vec![], bull, bear);
            d.ensure_valid().unwrap();
        }
    }

    #[test]
    fn unresolved_risk_rule_is_reported_before_weight_rule() {
        let d = decision_fixture(InvestmentDecision::Invest, vec!["Churn".into()], 90, 30);
        let err = d.ensure_valid().unwrap_err();
        assert!(err.to_string().contains("unresolved risks"));
    }

    #[test]
    fn out_of_range_weight_is_a_schema_error_not_a_guard_error() {
        let d = decision_fixture(InvestmentDecision::Pass, vec![], 120, 20);
        let err = d.ensure_valid().unwrap_err();
        assert!(matches!(err, DebateError::SchemaValidation { .. }));
    }

    #[test]
    fn parse_round_trips_fields_exactly() {
        let expected = FinalDecision {
            recommended_check_size: Some("$500K seed check".into()),
            key_due_diligence: Some(vec!["Verify ARR".into()]),
            risk_mitigations: vec![RiskMitigation {
                risk: "Customer concentration".into(),
                mitigation: "Pipeline spread across 12 logos".into(),
            }],
            ..decision_fixture(InvestmentDecision::Invest, vec![], 70, 30)
        };
        let raw = serde_json::to_string(&expected).unwrap();
        let parsed = FinalDecision::parse(&raw).unwrap();
        assert_eq!(parsed, expected);
    }

    // -- BullCase --

    #[test]
    fn bull_case_needs_three_growth_catalysts() {
        let mut bull = bull_fixture();
        bull.growth_catalysts.truncate(2);
        let err = bull.ensure_valid().unwrap_err();
        assert!(matches!(err, DebateError::SchemaValidation { .. }));

        bull_fixture().ensure_valid().unwrap();
    }

    #[test]
    fn bull_confidence_score_is_bounded() {
        let mut bull = bull_fixture();
        bull.confidence_score = 0;
        assert!(bull.ensure_valid().is_err());
        bull.confidence_score = 11;
        assert!(bull.ensure_valid().is_err());
        bull.confidence_score = 10;
        bull.ensure_valid().unwrap();
    }

    #[test]
    fn bull_traction_may_be_empty() {
        let mut bull = bull_fixture();
        bull.traction_highlights.clear();
        bull.ensure_valid().unwrap();
    }

    // -- BearCase --

    #[test]
    fn bear_case_list_minimums() {
        for mutate in [
            (|b: &mut BearCase| b.market_risks.truncate(1)) as fn(&mut BearCase),
            |b| b.execution_risks.truncate(1),
            |b| b.key_weaknesses.truncate(2),
        ] {
            let mut bear = bear_fixture();
            mutate(&mut bear);
            let err = bear.ensure_valid().unwrap_err();
            assert!(matches!(err, DebateError::SchemaValidation { .. }));
        }

        // Exactly at the thresholds is fine.
        bear_fixture().ensure_valid().unwrap();
    }

    #[test]
    fn bear_optional_risk_lists_accepted_when_present() {
        let mut bear = bear_fixture();
        bear.regulatory_risks = Some(vec!["Workplace safety certification".into()]);
        bear.technology_risks = Some(vec![]);
        bear.ensure_valid().unwrap();
    }

    // -- Parsing --

    #[test]
    fn parse_accepts_fenced_json() {
        let raw = format!(
            "Here is my analysis:\n```json\n{}\n```\nLet me know.",
            serde_json::to_string_pretty(&bull_fixture()).unwrap()
        );
        let parsed = BullCase::parse(&raw).unwrap();
        assert_eq!(parsed, bull_fixture());
    }

    #[test]
    fn parse_accepts_bare_json_with_surrounding_prose() {
        let raw = format!(
            "Analysis follows. {} That is all.",
            serde_json::to_string(&bear_fixture()).unwrap()
        );
        assert_eq!(BearCase::parse(&raw).unwrap(), bear_fixture());
    }

    #[test]
    fn parse_fails_closed_on_prose() {
        let err = FinalDecision::parse("I think we should invest!").unwrap_err();
        assert!(matches!(
            err,
            DebateError::SchemaValidation {
                artifact: "final decision",
                ..
            }
        ));
    }

    #[test]
    fn parse_fails_closed_on_missing_fields() {
        let err = BullCase::parse(r#"{"startup_name": "Acme Robotics"}"#).unwrap_err();
        assert!(matches!(err, DebateError::SchemaValidation { .. }));
    }

    #[test]
    fn decision_enum_uses_screaming_snake_case() {
        assert_eq!(
            serde_json::to_string(&InvestmentDecision::FollowUp).unwrap(),
            "\"FOLLOW_UP\""
        );
        let parsed: InvestmentDecision = serde_json::from_str("\"INVEST\"").unwrap();
        assert_eq!(parsed, InvestmentDecision::Invest);
    }

    #[test]
    fn missing_defaults_deserialize_empty() {
        let raw = serde_json::json!({
            "startup_name": "Acme Robotics",
            "decision": "PASS",
            "investment_thesis": "Too early.",
            "bull_case_weight": 30,
            "bear_case_weight": 70
        })
        .to_string();
        let parsed = FinalDecision::parse(&raw).unwrap();
        assert!(parsed.unresolved_risks.is_empty());
        assert!(parsed.risk_mitigations.is_empty());
        assert!(parsed.recommended_check_size.is_none());
    }

    #[test]
    fn extract_json_block_variants() {
        assert_eq!(
            extract_json_block("pre ```json\n{\"a\": 1}\n``` post"),
            Some("{\"a\": 1}")
        );
        assert_eq!(extract_json_block("x {\"a\": 1} y"), Some("{\"a\": 1}"));
        assert_eq!(extract_json_block("no json here"), None);
    }
}
