use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Priority bucket for a savings goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GoalPriority {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for GoalPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GoalPriority::High => write!(f, "High"),
            GoalPriority::Medium => write!(f, "Medium"),
            GoalPriority::Low => write!(f, "Low"),
        }
    }
}

/// A user-defined savings goal. Ephemeral and user-editable; the core
/// never persists it itself (persistence is the external store's job,
/// see `models::records`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    /// Unique identifier
    pub id: Uuid,

    /// Display name (e.g., "Emergency Fund", "New Laptop")
    pub name: String,

    /// Target amount in currency units (> 0)
    pub target_amount: f64,

    /// Number of months the user gives themselves (> 0)
    pub target_horizon_months: u32,

    /// Optional calendar deadline, for display only
    #[serde(default)]
    pub target_date: Option<NaiveDate>,

    /// Priority bucket
    pub priority: GoalPriority,

    /// Optional free-text description
    #[serde(default)]
    pub description: Option<String>,
}

impl Goal {
    pub fn new(name: impl Into<String>, target_amount: f64, target_horizon_months: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            target_amount,
            target_horizon_months,
            target_date: None,
            priority: GoalPriority::Medium,
            description: None,
        }
    }
}

/// Result of comparing a projected value against a goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalAnalysis {
    /// Projected value / goal amount, in percent, capped at 100
    pub progress_percent: f64,

    /// max(goal - projected, 0) — how far short the plan falls
    pub shortfall: f64,

    /// max(projected - goal, 0) — how far past the goal the plan lands
    pub surplus: f64,

    /// Monthly contribution that would hit the goal exactly over the
    /// horizon (algebraic inverse of the annuity projection)
    pub required_monthly: f64,

    /// Months needed at the CURRENT contribution, by linear scaling of
    /// the horizon. `None` when the projected value is zero (the goal is
    /// unreachable at the current pace).
    pub required_months: Option<u32>,
}
