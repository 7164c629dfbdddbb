// ═══════════════════════════════════════════════════════════════════
// Model Tests — RiskTolerance, Allocation, WizardPage, Goal, records
// ═══════════════════════════════════════════════════════════════════

use microinvest_core::models::allocation::{Allocation, AllocationEntry};
use microinvest_core::models::goal::{Goal, GoalPriority};
use microinvest_core::models::plan::{PlanInput, INVESTMENT_GOALS};
use microinvest_core::models::records::{GoalStatus, PortfolioRecord};
use microinvest_core::models::risk::RiskTolerance;
use microinvest_core::models::wizard::WizardPage;
use uuid::Uuid;

fn entry(symbol: &str, pct: f64, ret: f64, risk: RiskTolerance) -> AllocationEntry {
    AllocationEntry::new(symbol, symbol, pct, ret, risk)
}

// ═══════════════════════════════════════════════════════════════════
//  RiskTolerance
// ═══════════════════════════════════════════════════════════════════

mod risk_tolerance {
    use super::*;

    #[test]
    fn from_label_exact() {
        assert_eq!(RiskTolerance::from_label("low"), Some(RiskTolerance::Low));
        assert_eq!(RiskTolerance::from_label("medium"), Some(RiskTolerance::Medium));
        assert_eq!(RiskTolerance::from_label("high"), Some(RiskTolerance::High));
    }

    #[test]
    fn from_label_case_insensitive() {
        assert_eq!(RiskTolerance::from_label("LOW"), Some(RiskTolerance::Low));
        assert_eq!(RiskTolerance::from_label("Medium"), Some(RiskTolerance::Medium));
        assert_eq!(RiskTolerance::from_label("hIgH"), Some(RiskTolerance::High));
    }

    #[test]
    fn from_label_trims_whitespace() {
        assert_eq!(RiskTolerance::from_label("  high  "), Some(RiskTolerance::High));
    }

    #[test]
    fn from_label_unknown_is_none() {
        assert_eq!(RiskTolerance::from_label("aggressive"), None);
        assert_eq!(RiskTolerance::from_label(""), None);
        assert_eq!(RiskTolerance::from_label("lowest"), None);
    }

    #[test]
    fn display_lowercase() {
        assert_eq!(RiskTolerance::Low.to_string(), "low");
        assert_eq!(RiskTolerance::Medium.to_string(), "medium");
        assert_eq!(RiskTolerance::High.to_string(), "high");
    }

    #[test]
    fn all_is_ordered_lowest_first() {
        assert_eq!(
            RiskTolerance::ALL,
            [RiskTolerance::Low, RiskTolerance::Medium, RiskTolerance::High]
        );
    }

    #[test]
    fn serde_roundtrip_json() {
        for rt in RiskTolerance::ALL {
            let json = serde_json::to_string(&rt).unwrap();
            let back: RiskTolerance = serde_json::from_str(&json).unwrap();
            assert_eq!(rt, back);
        }
    }

    #[test]
    fn serde_uses_lowercase() {
        assert_eq!(serde_json::to_string(&RiskTolerance::High).unwrap(), "\"high\"");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Allocation
// ═══════════════════════════════════════════════════════════════════

mod allocation {
    use super::*;

    fn sample() -> Allocation {
        Allocation {
            entries: vec![
                entry("AAA", 60.0, 10.0, RiskTolerance::Medium),
                entry("BBB", 40.0, 5.0, RiskTolerance::Low),
            ],
            total_expected_return_percent: 8.5,
            risk_score: 5,
        }
    }

    #[test]
    fn blended_return_is_allocation_weighted() {
        // 0.6 * 10 + 0.4 * 5 = 8
        let a = sample();
        assert!((a.blended_return_percent() - 8.0).abs() < 1e-9);
    }

    #[test]
    fn blended_return_differs_from_fixed_template_figure() {
        // The stored figure is fixed template data, not a recomputation.
        let a = sample();
        assert!((a.total_expected_return_percent - a.blended_return_percent()).abs() > 0.1);
    }

    #[test]
    fn total_allocation_sums_entries() {
        assert!((sample().total_allocation_percent() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn dominant_risk_prefers_high() {
        let a = Allocation {
            entries: vec![
                entry("AAA", 90.0, 4.0, RiskTolerance::Low),
                entry("BBB", 10.0, 15.0, RiskTolerance::High),
            ],
            total_expected_return_percent: 5.0,
            risk_score: 4,
        };
        assert_eq!(a.dominant_risk_level(), RiskTolerance::High);
    }

    #[test]
    fn dominant_risk_medium_when_no_high() {
        assert_eq!(sample().dominant_risk_level(), RiskTolerance::Medium);
    }

    #[test]
    fn dominant_risk_low_when_all_low() {
        let a = Allocation {
            entries: vec![entry("AAA", 100.0, 4.0, RiskTolerance::Low)],
            total_expected_return_percent: 4.0,
            risk_score: 1,
        };
        assert_eq!(a.dominant_risk_level(), RiskTolerance::Low);
    }

    #[test]
    fn serde_roundtrip_json() {
        let a = sample();
        let json = serde_json::to_string(&a).unwrap();
        let back: Allocation = serde_json::from_str(&json).unwrap();
        assert_eq!(a, back);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  WizardPage
// ═══════════════════════════════════════════════════════════════════

mod wizard {
    use super::*;

    #[test]
    fn default_is_welcome() {
        assert_eq!(WizardPage::default(), WizardPage::Welcome);
    }

    #[test]
    fn advance_is_linear() {
        assert_eq!(WizardPage::Welcome.advance(), WizardPage::Questionnaire);
        assert_eq!(WizardPage::Questionnaire.advance(), WizardPage::Results);
    }

    #[test]
    fn results_is_terminal() {
        assert_eq!(WizardPage::Results.advance(), WizardPage::Results);
    }

    #[test]
    fn back_is_linear() {
        assert_eq!(WizardPage::Results.back(), WizardPage::Questionnaire);
        assert_eq!(WizardPage::Questionnaire.back(), WizardPage::Welcome);
        assert_eq!(WizardPage::Welcome.back(), WizardPage::Welcome);
    }

    #[test]
    fn display_labels() {
        assert_eq!(WizardPage::Welcome.to_string(), "welcome");
        assert_eq!(WizardPage::Questionnaire.to_string(), "questionnaire");
        assert_eq!(WizardPage::Results.to_string(), "results");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Goal
// ═══════════════════════════════════════════════════════════════════

mod goal {
    use super::*;

    #[test]
    fn new_defaults() {
        let g = Goal::new("Emergency Fund", 1000.0, 12);
        assert_eq!(g.name, "Emergency Fund");
        assert_eq!(g.target_amount, 1000.0);
        assert_eq!(g.target_horizon_months, 12);
        assert_eq!(g.priority, GoalPriority::Medium);
        assert!(g.target_date.is_none());
        assert!(g.description.is_none());
    }

    #[test]
    fn new_goals_get_distinct_ids() {
        let a = Goal::new("A", 1.0, 1);
        let b = Goal::new("B", 1.0, 1);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn priority_display() {
        assert_eq!(GoalPriority::High.to_string(), "High");
        assert_eq!(GoalPriority::Medium.to_string(), "Medium");
        assert_eq!(GoalPriority::Low.to_string(), "Low");
    }

    #[test]
    fn serde_roundtrip_json() {
        let g = Goal::new("Laptop", 1500.0, 6);
        let json = serde_json::to_string(&g).unwrap();
        let back: Goal = serde_json::from_str(&json).unwrap();
        assert_eq!(g, back);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Plan input & persistence records
// ═══════════════════════════════════════════════════════════════════

mod plan_and_records {
    use super::*;

    #[test]
    fn six_fixed_goal_labels() {
        assert_eq!(INVESTMENT_GOALS.len(), 6);
        assert!(INVESTMENT_GOALS.contains(&"Build Emergency Fund"));
        assert!(INVESTMENT_GOALS.contains(&"Graduation Goal"));
    }

    #[test]
    fn plan_input_serde_roundtrip() {
        let input = PlanInput {
            monthly_budget: 50.0,
            risk_tolerance: "medium".into(),
            investment_goal: "Build Emergency Fund".into(),
            time_horizon: "1-year".into(),
        };
        let json = serde_json::to_string(&input).unwrap();
        let back: PlanInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, back);
    }

    #[test]
    fn goal_status_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&GoalStatus::Active).unwrap(), "\"active\"");
        assert_eq!(serde_json::to_string(&GoalStatus::Achieved).unwrap(), "\"achieved\"");
        assert_eq!(serde_json::to_string(&GoalStatus::Abandoned).unwrap(), "\"abandoned\"");
    }

    #[test]
    fn portfolio_record_serde_roundtrip() {
        let record = PortfolioRecord {
            user_id: Uuid::new_v4(),
            monthly_budget: 50.0,
            risk_tolerance: "medium".into(),
            investment_goal: "Save for Travel".into(),
            time_horizon: "1-year".into(),
            allocation: vec![entry("VOO", 100.0, 10.5, RiskTolerance::Medium)],
            expected_return: 10.5,
            risk_score: 5,
            projected_value: 628,
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: PortfolioRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }

    #[test]
    fn portfolio_record_uses_store_column_names() {
        let record = PortfolioRecord {
            user_id: Uuid::nil(),
            monthly_budget: 25.0,
            risk_tolerance: "low".into(),
            investment_goal: "Save for Textbooks".into(),
            time_horizon: "6-months".into(),
            allocation: vec![],
            expected_return: 7.8,
            risk_score: 3,
            projected_value: 152,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"monthly_budget\""));
        assert!(json.contains("\"risk_tolerance\""));
        assert!(json.contains("\"projected_value\""));
    }
}
