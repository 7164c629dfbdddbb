use serde::{Deserialize, Serialize};

/// Coarse three-level classification of how much volatility a user
/// accepts in exchange for expected return. Fixed, closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTolerance {
    Low,
    Medium,
    High,
}

impl RiskTolerance {
    /// Parse a form-layer label. Matching is case-insensitive and
    /// whitespace-trimmed. Returns `None` for anything outside the
    /// closed set — callers decide the fallback.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "low" => Some(RiskTolerance::Low),
            "medium" => Some(RiskTolerance::Medium),
            "high" => Some(RiskTolerance::High),
            _ => None,
        }
    }

    /// All variants, lowest risk first.
    pub const ALL: [RiskTolerance; 3] =
        [RiskTolerance::Low, RiskTolerance::Medium, RiskTolerance::High];
}

impl std::fmt::Display for RiskTolerance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskTolerance::Low => write!(f, "low"),
            RiskTolerance::Medium => write!(f, "medium"),
            RiskTolerance::High => write!(f, "high"),
        }
    }
}
