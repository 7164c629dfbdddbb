use serde::{Deserialize, Serialize};

use super::risk::RiskTolerance;

/// One instrument inside a recommended portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationEntry {
    /// Ticker symbol (e.g., "VOO", "BND")
    pub symbol: String,

    /// Human-readable instrument name
    pub name: String,

    /// Share of the portfolio in percent, 0..=100
    pub allocation_percent: f64,

    /// Annualized expected return in percent
    pub expected_return_percent: f64,

    /// Risk classification of this single instrument
    pub risk_level: RiskTolerance,
}

impl AllocationEntry {
    pub fn new(
        symbol: impl Into<String>,
        name: impl Into<String>,
        allocation_percent: f64,
        expected_return_percent: f64,
        risk_level: RiskTolerance,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            allocation_percent,
            expected_return_percent,
            risk_level,
        }
    }
}

/// A recommended portfolio: an ordered list of instruments whose
/// allocation percentages sum to 100 by construction (the fixed
/// templates guarantee it — nothing recomputes or renormalizes).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    /// Instruments, largest allocation first
    pub entries: Vec<AllocationEntry>,

    /// Fixed blended expected annual return for the template, in percent.
    /// This is a stored template figure, not a weighted recomputation.
    pub total_expected_return_percent: f64,

    /// Fixed integer risk score for the template (1..=10 scale)
    pub risk_score: u8,
}

impl Allocation {
    /// Allocation-weighted average of the entries' expected annual
    /// returns, in percent. Used by the history simulator; the headline
    /// figure stays `total_expected_return_percent`.
    #[must_use]
    pub fn blended_return_percent(&self) -> f64 {
        self.entries
            .iter()
            .map(|e| e.expected_return_percent * e.allocation_percent / 100.0)
            .sum()
    }

    /// Sum of the entries' allocation percentages. 100 for every
    /// template; exposed so tests and callers can check the invariant.
    #[must_use]
    pub fn total_allocation_percent(&self) -> f64 {
        self.entries.iter().map(|e| e.allocation_percent).sum()
    }

    /// The coarsest risk level present among the entries
    /// (high beats medium beats low).
    #[must_use]
    pub fn dominant_risk_level(&self) -> RiskTolerance {
        if self
            .entries
            .iter()
            .any(|e| e.risk_level == RiskTolerance::High)
        {
            RiskTolerance::High
        } else if self
            .entries
            .iter()
            .any(|e| e.risk_level == RiskTolerance::Medium)
        {
            RiskTolerance::Medium
        } else {
            RiskTolerance::Low
        }
    }
}
