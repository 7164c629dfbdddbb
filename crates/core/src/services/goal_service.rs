use crate::errors::CoreError;
use crate::models::goal::GoalAnalysis;

/// Compares a projected value against a savings goal: progress,
/// shortfall/surplus, and the contribution or duration needed to close
/// the gap. Uses the exact same monthly-rate convention as the
/// projection, since `required_monthly` is that formula's algebraic
/// inverse.
pub struct GoalService;

impl GoalService {
    pub fn new() -> Self {
        Self
    }

    /// Analyze a goal against a projected value.
    ///
    /// Degenerate inputs signal distinct errors instead of silently
    /// producing infinities: a non-positive goal amount or a zero-month
    /// horizon is rejected up front, and a zero projected value yields
    /// `required_months: None` rather than dividing by zero.
    pub fn analyze_goal(
        &self,
        projected_value: f64,
        goal_amount: f64,
        horizon_months: u32,
        annual_return_percent: f64,
    ) -> Result<GoalAnalysis, CoreError> {
        for (name, v) in [
            ("projected_value", projected_value),
            ("goal_amount", goal_amount),
            ("annual_return_percent", annual_return_percent),
        ] {
            if !v.is_finite() {
                return Err(CoreError::NonFiniteInput(format!("{name} = {v}")));
            }
        }
        if goal_amount <= 0.0 {
            return Err(CoreError::NonPositiveGoal(goal_amount));
        }
        if horizon_months == 0 {
            return Err(CoreError::ZeroHorizon);
        }
        if projected_value < 0.0 {
            return Err(CoreError::ValidationError(format!(
                "projected value must not be negative, got {projected_value}"
            )));
        }

        let progress_percent = (projected_value / goal_amount * 100.0).min(100.0);
        let shortfall = (goal_amount - projected_value).max(0.0);
        let surplus = (projected_value - goal_amount).max(0.0);

        // Inverse of FV = c * ((1+r)^n - 1) / r, solved for c.
        let r = annual_return_percent / 100.0 / 12.0;
        let required_monthly = if r == 0.0 {
            goal_amount / f64::from(horizon_months)
        } else {
            goal_amount * r / ((1.0 + r).powi(horizon_months as i32) - 1.0)
        };

        // Linear scaling of the horizon, NOT a re-solve of the
        // compounding formula. Understates the time needed when returns
        // are positive; the exact answer would need a logarithmic
        // inverse that this estimate deliberately skips.
        let required_months = if projected_value > 0.0 {
            Some((goal_amount / projected_value * f64::from(horizon_months)).ceil() as u32)
        } else {
            None
        };

        Ok(GoalAnalysis {
            progress_percent,
            shortfall,
            surplus,
            required_monthly,
            required_months,
        })
    }
}

impl Default for GoalService {
    fn default() -> Self {
        Self::new()
    }
}
