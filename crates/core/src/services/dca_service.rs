use crate::models::dca::DcaPoint;

/// Simulates dollar-cost averaging against a one-time lump sum of the
/// same total money, month by month at a constant rate.
///
/// Both strategies share the projection's monthly-compounding step. The
/// lump sum is invested at month 0 and compounds the whole time, so with
/// any positive rate it finishes at or above the DCA series.
pub struct DcaService;

impl DcaService {
    pub fn new() -> Self {
        Self
    }

    /// Run the comparison over `horizon_months` months.
    ///
    /// Returns `horizon_months + 1` points (month 0 through the horizon
    /// inclusive). Month 0 is the initial state: DCA at zero, the lump
    /// sum at its full `contribution * horizon` stake, nothing
    /// contributed yet under DCA.
    ///
    /// The two running values accumulate at full f64 precision; rounding
    /// to whole currency units happens only when a point is emitted.
    #[must_use]
    pub fn simulate_dca(
        &self,
        monthly_contribution: f64,
        annual_return_percent: f64,
        horizon_months: u32,
    ) -> Vec<DcaPoint> {
        let r = annual_return_percent / 100.0 / 12.0;

        let mut dca_value = 0.0_f64;
        let mut lump_sum_value = monthly_contribution * f64::from(horizon_months);

        let mut series = Vec::with_capacity(horizon_months as usize + 1);
        series.push(DcaPoint {
            month_index: 0,
            dca_value: 0,
            lump_sum_value: lump_sum_value.round() as i64,
            cumulative_contributions: 0,
        });

        for month in 1..=horizon_months {
            dca_value = (dca_value + monthly_contribution) * (1.0 + r);
            lump_sum_value *= 1.0 + r;

            series.push(DcaPoint {
                month_index: month,
                dca_value: dca_value.round() as i64,
                lump_sum_value: lump_sum_value.round() as i64,
                cumulative_contributions: (f64::from(month) * monthly_contribution).round()
                    as i64,
            });
        }

        series
    }
}

impl Default for DcaService {
    fn default() -> Self {
        Self::new()
    }
}
