// ═══════════════════════════════════════════════════════════════════
// Error Tests — CoreError variants, Display formatting, From impls
// ═══════════════════════════════════════════════════════════════════

use microinvest_core::errors::CoreError;

// ── Display formatting ──────────────────────────────────────────────

mod display {
    use super::*;

    #[test]
    fn non_positive_goal() {
        let err = CoreError::NonPositiveGoal(-5.0);
        assert_eq!(err.to_string(), "Goal amount must be positive, got -5");
    }

    #[test]
    fn non_positive_goal_zero() {
        let err = CoreError::NonPositiveGoal(0.0);
        assert_eq!(err.to_string(), "Goal amount must be positive, got 0");
    }

    #[test]
    fn zero_horizon() {
        let err = CoreError::ZeroHorizon;
        assert_eq!(err.to_string(), "Horizon must be at least one month");
    }

    #[test]
    fn non_finite_input() {
        let err = CoreError::NonFiniteInput("monthly_budget = NaN".into());
        assert_eq!(err.to_string(), "Non-finite input: monthly_budget = NaN");
    }

    #[test]
    fn validation_error() {
        let err = CoreError::ValidationError("budget too small".into());
        assert_eq!(err.to_string(), "Validation failed: budget too small");
    }

    #[test]
    fn validation_error_empty_message() {
        let err = CoreError::ValidationError(String::new());
        assert_eq!(err.to_string(), "Validation failed: ");
    }

    #[test]
    fn no_recommendation() {
        let err = CoreError::NoRecommendation;
        assert_eq!(
            err.to_string(),
            "No recommendation available — submit the questionnaire first"
        );
    }

    #[test]
    fn goal_not_found() {
        let err = CoreError::GoalNotFound("abc-123".into());
        assert_eq!(err.to_string(), "Goal not found: abc-123");
    }

    #[test]
    fn serialization() {
        let err = CoreError::Serialization("unexpected EOF".into());
        assert_eq!(err.to_string(), "Serialization error: unexpected EOF");
    }

    #[test]
    fn export_failed() {
        let err = CoreError::ExportFailed("page size must be at least one line".into());
        assert_eq!(
            err.to_string(),
            "Export failed: page size must be at least one line"
        );
    }
}

// ── From impls ──────────────────────────────────────────────────────

mod conversions {
    use super::*;

    #[test]
    fn serde_json_error_becomes_serialization() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: CoreError = json_err.into();
        assert!(matches!(err, CoreError::Serialization(_)));
    }
}

// ── Trait object compatibility ──────────────────────────────────────

mod traits {
    use super::*;

    #[test]
    fn implements_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(CoreError::ZeroHorizon);
        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn debug_formatting_names_the_variant() {
        let err = CoreError::NonPositiveGoal(0.0);
        assert!(format!("{err:?}").contains("NonPositiveGoal"));
    }
}
