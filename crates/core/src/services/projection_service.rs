/// Months assumed when a time-horizon label isn't recognized.
pub const DEFAULT_HORIZON_MONTHS: u32 = 12;

/// Computes the headline compounded projection: future value of an
/// ordinary annuity of monthly contributions. Deterministic, no side
/// effects; the only failure mode is propagating non-finite inputs.
pub struct ProjectionService;

impl ProjectionService {
    pub fn new() -> Self {
        Self
    }

    /// Future value of `monthly_contribution` invested every month for
    /// `horizon_months` at `annual_return_percent`, rounded to the
    /// nearest whole currency unit.
    ///
    /// `FV = c * ((1+r)^n - 1) / r` with `r = annual/100/12`.
    /// The r == 0 case is an exact special case (`c * n`), not an
    /// epsilon guard — the formula's denominator is genuinely zero there.
    #[must_use]
    pub fn project_future_value(
        &self,
        monthly_contribution: f64,
        annual_return_percent: f64,
        horizon_months: u32,
    ) -> f64 {
        let r = annual_return_percent / 100.0 / 12.0;
        let n = f64::from(horizon_months);

        let fv = if r == 0.0 {
            monthly_contribution * n
        } else {
            monthly_contribution * ((1.0 + r).powi(horizon_months as i32) - 1.0) / r
        };

        fv.round()
    }

    /// Map a time-horizon label to a month count. Unrecognized labels
    /// default to 12 months; the caller cannot tell the difference from
    /// an explicit "1-year" — accepted trade-off.
    #[must_use]
    pub fn horizon_months(&self, label: &str) -> u32 {
        match label.trim() {
            "3-months" => 3,
            "6-months" => 6,
            "1-year" => 12,
            "2-years" => 24,
            "5-years" => 60,
            _ => DEFAULT_HORIZON_MONTHS,
        }
    }
}

impl Default for ProjectionService {
    fn default() -> Self {
        Self::new()
    }
}
