use serde::{Deserialize, Serialize};

use super::allocation::Allocation;

/// Minimum accepted monthly budget, in whole currency units.
pub const MIN_MONTHLY_BUDGET: f64 = 10.0;

/// The fixed set of investment-goal labels offered by the questionnaire.
/// The engine treats the label as opaque display text; it only carries it
/// through to the recommendation and the persistence records.
pub const INVESTMENT_GOALS: [&str; 6] = [
    "Build Emergency Fund",
    "Save for Laptop/Electronics",
    "Build Long-term Wealth",
    "Save for Textbooks",
    "Save for Travel",
    "Graduation Goal",
];

/// What the questionnaire form hands to the engine.
///
/// Labels are deliberately loose strings: an unrecognized risk tolerance
/// or time horizon falls back to a documented default instead of failing,
/// so a typo in the form layer never breaks the flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanInput {
    /// Monthly amount the user wants to invest (>= 10)
    pub monthly_budget: f64,

    /// "low", "medium", or "high" (anything else selects the default template)
    pub risk_tolerance: String,

    /// One of `INVESTMENT_GOALS` (carried through, not interpreted)
    pub investment_goal: String,

    /// "3-months", "6-months", "1-year", "2-years", or "5-years"
    /// (anything else maps to 12 months)
    pub time_horizon: String,
}

/// What the engine hands back to the presentation layer after a
/// questionnaire submission. Created fresh per submission, held only in
/// transient session state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// The selected portfolio template
    pub investments: Allocation,

    /// Fixed blended expected annual return of the template, in percent
    pub total_expected_return: f64,

    /// Fixed integer risk score of the template
    pub risk_score: u8,

    /// Monthly contribution the projection was computed with
    pub monthly_amount: f64,

    /// Headline projected value at the end of the horizon, in whole
    /// currency units (future value of an ordinary annuity, rounded)
    pub projected_value: i64,

    /// Number of months the projection covers
    pub horizon_months: u32,

    /// The time-horizon label as displayed (e.g., "1-year")
    pub timeframe: String,

    /// The investment-goal label as displayed
    pub investment_goal: String,

    /// The risk-tolerance label as submitted (kept for the persistence
    /// record; the selected template is authoritative for computation)
    pub risk_tolerance: String,
}
