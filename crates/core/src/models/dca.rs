use serde::{Deserialize, Serialize};

/// One point in the DCA vs. lump-sum comparison series.
///
/// Values are rounded to whole currency units for display; the simulation
/// itself accumulates at full precision and rounds only when emitting
/// points, so rounding error never compounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DcaPoint {
    /// Elapsed months, 0..=horizon
    pub month_index: u32,

    /// Value of the recurring-monthly (dollar-cost-averaging) strategy
    pub dca_value: i64,

    /// Value of the one-time lump-sum strategy (same total money,
    /// all invested at month 0)
    pub lump_sum_value: i64,

    /// Total contributed under DCA so far: month_index * monthly amount
    pub cumulative_contributions: i64,
}
