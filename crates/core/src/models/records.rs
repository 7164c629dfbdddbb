use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::allocation::AllocationEntry;

/// Lifecycle status of a persisted goal row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    Active,
    Achieved,
    Abandoned,
}

/// Row shape for the external store's `portfolios` table.
///
/// The core only BUILDS these rows (field names match the store's
/// columns); writing them is a fire-and-forget concern of the external
/// collaborator. Access there is scoped per `user_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioRecord {
    /// Opaque owner identity the store scopes access by
    pub user_id: Uuid,

    pub monthly_budget: f64,
    pub risk_tolerance: String,
    pub investment_goal: String,
    pub time_horizon: String,

    /// Structured allocation list, as recommended
    pub allocation: Vec<AllocationEntry>,

    /// Fixed blended expected annual return, percent
    pub expected_return: f64,

    /// Fixed integer risk score
    pub risk_score: u8,

    /// Headline projected value, whole currency units
    pub projected_value: i64,
}

/// Row shape for the external store's `goals` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalRecord {
    /// Opaque owner identity the store scopes access by
    pub user_id: Uuid,

    pub goal_name: String,
    pub target_amount: f64,

    #[serde(default)]
    pub target_date: Option<NaiveDate>,

    pub monthly_contribution: f64,

    /// Progress toward the target, percent, capped at 100
    pub progress: f64,

    pub status: GoalStatus,
}
