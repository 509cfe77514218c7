//! # Recommendation Logic
//!
//! Deterministic rule cascade turning the aggregated comparison figures into
//! an ordered list of textual findings and a single winner tag. No learning,
//! no external state; identical inputs always produce identical findings.
//!
//! Thresholds:
//! - area savings > 5 % is "significant", > 0 % "moderate", otherwise RSC
//!   wins on material
//! - any positive per-box cost saving is reported with its annualized value
//! - the style with the lower TCO total wins (tie goes to RSC as the
//!   incumbent; no winner when neither TCO was computed)
//! - more than 10 changeovers per week earns a caution about magazine
//!   handling on wrap-around machines
//! - the final verdict recommends Wrap-Around only when it wins on TCO,
//!   saves more than 3 % area, and saves cost per box

use serde::{Deserialize, Serialize};

/// Area saving above this is called significant (%)
const AREA_SIGNIFICANT_PCT: f64 = 5.0;

/// Area saving required for an outright recommendation (%)
const AREA_RECOMMEND_PCT: f64 = 3.0;

/// Weekly changeovers above this trigger the handling caution
const CHANGEOVER_CAUTION_PER_WEEK: f64 = 10.0;

/// Aggregated figures the rule cascade consumes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecommendationInput {
    /// Blank-area saving of Wrap-Around vs RSC (%)
    pub area_savings_pct: f64,
    /// Per-box cost saving of Wrap-Around vs RSC
    pub cost_savings_per_box: f64,
    /// Cartons per year
    pub production_volume: f64,
    /// RSC annual TCO total
    pub rsc_tco_total: f64,
    /// Wrap-Around annual TCO total
    pub wa_tco_total: f64,
    /// Format changeovers per week
    pub weekly_changeovers: f64,
}

/// Winner tag of the comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Winner {
    /// RSC has the lower or equal TCO
    Rsc,
    /// Wrap-Around has the strictly lower TCO
    WrapAround,
    /// Neither TCO was computed
    None,
}

impl std::fmt::Display for Winner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Winner::Rsc => "RSC",
            Winner::WrapAround => "Wrap-Around",
            Winner::None => "None",
        };
        write!(f, "{}", name)
    }
}

/// Ordered findings plus the winner tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Textual findings, in cascade order
    pub findings: Vec<String>,
    /// Overall winner on TCO
    pub winner: Winner,
}

/// Run the rule cascade.
pub fn recommend(input: &RecommendationInput) -> Recommendation {
    let mut findings = Vec::new();

    // Material / area band
    if input.area_savings_pct > AREA_SIGNIFICANT_PCT {
        findings.push(format!(
            "Significant material saving: Wrap-Around uses {:.1} % less board per carton.",
            input.area_savings_pct
        ));
    } else if input.area_savings_pct > 0.0 {
        findings.push(format!(
            "Moderate material saving: Wrap-Around uses {:.1} % less board per carton.",
            input.area_savings_pct
        ));
    } else {
        findings.push(format!(
            "RSC wins on material: it uses {:.1} % less board for these dimensions.",
            -input.area_savings_pct
        ));
    }

    // Per-box cost, annualized
    if input.cost_savings_per_box > 0.0 {
        findings.push(format!(
            "Wrap-Around is {:.4} cheaper per box ({:.0} per year at {:.0} cartons).",
            input.cost_savings_per_box,
            input.cost_savings_per_box * input.production_volume,
            input.production_volume
        ));
    }

    // TCO winner
    let winner = if input.rsc_tco_total <= 0.0 && input.wa_tco_total <= 0.0 {
        Winner::None
    } else if input.wa_tco_total < input.rsc_tco_total {
        Winner::WrapAround
    } else {
        Winner::Rsc
    };
    match winner {
        Winner::WrapAround => findings.push(format!(
            "Wrap-Around has the lower annual TCO: {:.0} vs {:.0}.",
            input.wa_tco_total, input.rsc_tco_total
        )),
        Winner::Rsc => findings.push(format!(
            "RSC has the lower annual TCO: {:.0} vs {:.0}.",
            input.rsc_tco_total, input.wa_tco_total
        )),
        Winner::None => findings.push("No TCO figures available for either style.".to_string()),
    }

    // Frequent format changes are harder on wrap-around magazines
    if input.weekly_changeovers > CHANGEOVER_CAUTION_PER_WEEK {
        findings.push(format!(
            "Caution: {:.0} changeovers per week - check magazine handling and \
             changeover times on the wrap-around line.",
            input.weekly_changeovers
        ));
    }

    // Final verdict
    if winner == Winner::WrapAround
        && input.area_savings_pct > AREA_RECOMMEND_PCT
        && input.cost_savings_per_box > 0.0
    {
        findings.push(
            "Verdict: Wrap-Around is recommended for this application.".to_string(),
        );
    } else {
        findings.push(
            "Verdict: no clear winner - a detailed review of this application is needed."
                .to_string(),
        );
    }

    Recommendation { findings, winner }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wa_favoring_input() -> RecommendationInput {
        RecommendationInput {
            area_savings_pct: 12.0,
            cost_savings_per_box: 0.05,
            production_volume: 500_000.0,
            rsc_tco_total: 480_000.0,
            wa_tco_total: 450_000.0,
            weekly_changeovers: 4.0,
        }
    }

    #[test]
    fn test_wa_recommended() {
        let rec = recommend(&wa_favoring_input());
        assert_eq!(rec.winner, Winner::WrapAround);
        assert!(rec.findings[0].contains("Significant"));
        assert!(rec
            .findings
            .last()
            .unwrap()
            .contains("Wrap-Around is recommended"));
    }

    #[test]
    fn test_moderate_band() {
        let mut input = wa_favoring_input();
        input.area_savings_pct = 4.0;
        let rec = recommend(&input);
        assert!(rec.findings[0].contains("Moderate"));
        // 4 % > 3 % and cost positive and WA wins TCO: still recommended
        assert!(rec.findings.last().unwrap().contains("recommended"));
    }

    #[test]
    fn test_rsc_wins_on_material() {
        let mut input = wa_favoring_input();
        input.area_savings_pct = -2.0;
        input.cost_savings_per_box = -0.01;
        input.wa_tco_total = 500_000.0;
        let rec = recommend(&input);
        assert_eq!(rec.winner, Winner::Rsc);
        assert!(rec.findings[0].contains("RSC wins on material"));
        assert!(rec.findings.last().unwrap().contains("detailed review"));
    }

    #[test]
    fn test_tco_tie_goes_to_rsc() {
        let mut input = wa_favoring_input();
        input.wa_tco_total = input.rsc_tco_total;
        let rec = recommend(&input);
        assert_eq!(rec.winner, Winner::Rsc);
    }

    #[test]
    fn test_no_tco_means_no_winner() {
        let mut input = wa_favoring_input();
        input.rsc_tco_total = 0.0;
        input.wa_tco_total = 0.0;
        let rec = recommend(&input);
        assert_eq!(rec.winner, Winner::None);
        assert!(rec.findings.last().unwrap().contains("detailed review"));
    }

    #[test]
    fn test_changeover_caution() {
        let mut input = wa_favoring_input();
        input.weekly_changeovers = 15.0;
        let rec = recommend(&input);
        assert!(rec.findings.iter().any(|f| f.contains("Caution")));

        input.weekly_changeovers = 10.0;
        let rec = recommend(&input);
        assert!(!rec.findings.iter().any(|f| f.contains("Caution")));
    }

    #[test]
    fn test_area_band_boundary() {
        // Exactly 3 % area saving is not enough for the outright verdict
        let mut input = wa_favoring_input();
        input.area_savings_pct = 3.0;
        let rec = recommend(&input);
        assert!(rec.findings.last().unwrap().contains("detailed review"));
    }

    #[test]
    fn test_deterministic() {
        let input = wa_favoring_input();
        assert_eq!(recommend(&input), recommend(&input));
    }

    #[test]
    fn test_serialization() {
        let rec = recommend(&wa_favoring_input());
        let json = serde_json::to_string(&rec).unwrap();
        let roundtrip: Recommendation = serde_json::from_str(&json).unwrap();
        assert_eq!(rec, roundtrip);
    }
}
