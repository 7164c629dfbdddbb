use serde::{Deserialize, Serialize};

/// One month of the synthetic "what the past could have looked like"
/// series. Illustrative charting only — the randomized noise makes this
/// non-reproducible run to run, so it must never feed the headline
/// projection figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    /// Month label, "YYYY-MM"
    pub label: String,

    /// Simulated portfolio value at the end of this month
    pub value: f64,

    /// Cumulative contributions through this month
    pub contributions: f64,

    /// value - contributions
    pub gains: f64,
}
