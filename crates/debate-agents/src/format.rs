//! Human-readable rendering of the three debate artifacts.
//!
//! Pure string builders: no validation, no state. Unset optional fields
//! and empty lists render nothing.

use crate::models::{BearCase, BullCase, FinalDecision};

/// Format the final decision as markdown.
pub fn format_verdict(decision: &FinalDecision) -> String {
    let mut out = format!(
        "## FINAL VERDICT: {}\n\n\
         **Investment Thesis:**\n{}\n\n\
         **Weighting:** Bull {}% / Bear {}%\n",
        decision.decision,
        decision.investment_thesis,
        decision.bull_case_weight,
        decision.bear_case_weight,
    );

    if !decision.risk_mitigations.is_empty() {
        out.push_str("\n**Risk Mitigations:**\n");
        for rm in &decision.risk_mitigations {
            out.push_str(&format!("- {}: {}\n", rm.risk, rm.mitigation));
        }
    }

    push_section(&mut out, "Unresolved Risks", &decision.unresolved_risks);

    if let Some(check_size) = &decision.recommended_check_size {
        out.push_str(&format!("\n**Recommended Check Size:** {check_size}\n"));
    }
    if let Some(items) = &decision.key_due_diligence {
        push_section(&mut out, "Key Due Diligence", items);
    }
    if let Some(questions) = &decision.follow_up_questions {
        push_section(&mut out, "Follow-up Questions", questions);
    }

    out
}

/// Format the bull case as markdown.
pub fn format_bull_case(bull: &BullCase) -> String {
    let mut out = format!(
        "## BULL CASE: {}\n\n\
         **{}**\n\n\
         ### Market Opportunity\n{}\n\n\
         ### Competitive Moat\n{}\n",
        bull.startup_name, bull.one_liner, bull.market_opportunity, bull.competitive_moat,
    );

    push_header_section(&mut out, "Growth Catalysts", &bull.growth_catalysts);
    push_header_section(&mut out, "Traction", &bull.traction_highlights);
    push_header_section(&mut out, "Team Strengths", &bull.team_strengths);
    push_header_section(&mut out, "Comparable Exits", &bull.comparable_exits);

    out.push_str(&format!(
        "\n**Confidence Score: {}/10**\n\n**Thesis:** {}\n",
        bull.confidence_score, bull.investment_thesis_summary,
    ));
    out
}

/// Format the bear case as markdown.
pub fn format_bear_case(bear: &BearCase) -> String {
    let mut out = format!("## BEAR CASE: {}\n", bear.startup_name);

    push_header_section(&mut out, "Market Risks", &bear.market_risks);
    push_header_section(&mut out, "Execution Risks", &bear.execution_risks);
    push_header_section(&mut out, "Competitive Threats", &bear.competitive_threats);
    push_header_section(&mut out, "Financial Concerns", &bear.financial_concerns);
    if let Some(risks) = &bear.regulatory_risks {
        push_header_section(&mut out, "Regulatory Risks", risks);
    }
    if let Some(risks) = &bear.technology_risks {
        push_header_section(&mut out, "Technology Risks", risks);
    }
    push_header_section(&mut out, "Key Weaknesses", &bear.key_weaknesses);

    out.push_str(&format!(
        "\n### Kill Scenario\n{}\n\n**Risk Severity Score: {}/10**\n",
        bear.kill_scenario, bear.risk_severity_score,
    ));
    out
}

fn push_section(out: &mut String, title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    out.push_str(&format!("\n**{title}:**\n"));
    for item in items {
        out.push_str(&format!("- {item}\n"));
    }
}

fn push_header_section(out: &mut String, title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    out.push_str(&format!("\n### {title}\n"));
    for item in items {
        out.push_str(&format!("- {item}\n"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{InvestmentDecision, RiskMitigation};

    fn verdict_fixture() -> FinalDecision {
        FinalDecision {
            startup_name: "Acme Robotics".into(),
            decision: InvestmentDecision::Pass,
            investment_thesis: "Too much capital intensity for the stage.".into(),
            unresolved_risks: vec!["Customer concentration".into()],
            risk_mitigations: vec![],
            bull_case_weight: 40,
            bear_case_weight: 60,
            recommended_check_size: None,
            key_due_diligence: None,
            follow_up_questions: None,
        }
    }

    #[test]
    fn verdict_renders_decision_and_weights() {
        let out = format_verdict(&verdict_fixture());
        assert!(out.contains("FINAL VERDICT: PASS"));
        assert!(out.contains("Bull 40% / Bear 60%"));
        assert!(out.contains("- Customer concentration"));
    }

    #[test]
    fn verdict_omits_unset_optional_sections() {
        let out = format_verdict(&verdict_fixture());
        assert!(!out.contains("Recommended Check Size"));
        assert!(!out.contains("Key Due Diligence"));
        assert!(!out.contains("Follow-up Questions"));
        assert!(!out.contains("Risk Mitigations"));
    }

    #[test]
    fn verdict_renders_optional_sections_when_present() {
        let mut decision = verdict_fixture();
        decision.risk_mitigations = vec![RiskMitigation {
            risk: "Churn".into(),
            mitigation: "Multi-year contracts".into(),
        }];
        decision.recommended_check_size = Some("$500K".into());
        decision.follow_up_questions = Some(vec!["What is net revenue retention?".into()]);
        let out = format_verdict(&decision);
        assert!(out.contains("- Churn: Multi-year contracts"));
        assert!(out.contains("**Recommended Check Size:** $500K"));
        assert!(out.contains("- What is net revenue retention?"));
    }

    #[test]
    fn bear_case_optional_risk_sections() {
        let bear = BearCase {
            startup_name: "Acme Robotics".into(),
            market_risks: vec!["Crowded".into(), "Slow cycles".into()],
            execution_risks: vec!["Margins".into(), "Support".into()],
            competitive_threats: vec![],
            financial_concerns: vec![],
            regulatory_risks: Some(vec!["Safety certification".into()]),
            technology_risks: None,
            key_weaknesses: vec!["A".into(), "B".into(), "C".into()],
            kill_scenario: "Price war.".into(),
            risk_severity_score: 6,
        };
        let out = format_bear_case(&bear);
        assert!(out.contains("### Regulatory Risks"));
        assert!(!out.contains("### Technology Risks"));
        assert!(!out.contains("### Competitive Threats"));
        assert!(out.contains("Risk Severity Score: 6/10"));
    }
}
