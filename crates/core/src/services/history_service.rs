use rand::Rng;

use crate::models::allocation::Allocation;
use crate::models::history::HistoryPoint;
use crate::models::risk::RiskTolerance;

/// Annualized volatility band applied when the portfolio holds any
/// high-risk instrument.
const VOLATILITY_HIGH: f64 = 0.168;
/// Band when the riskiest instrument present is medium-risk.
const VOLATILITY_MEDIUM: f64 = 0.124;
/// Band for an all-low-risk portfolio.
const VOLATILITY_LOW: f64 = 0.085;

/// Generates a synthetic monthly value series under randomized
/// volatility, for illustrative charting only.
///
/// Explicitly non-deterministic: the random source is injected so tests
/// can seed it, but without a seed the output differs run to run. The
/// headline projection never comes from here.
pub struct HistoryService;

impl HistoryService {
    pub fn new() -> Self {
        Self
    }

    /// Simulate monthly contributions into `allocation` from January of
    /// `start_year` through December of `end_year` inclusive.
    ///
    /// Each month's growth factor is
    /// `1 + mean_monthly + uniform(-0.5, 0.5) * volatility / 12`,
    /// where the mean is the allocation-weighted blended return and the
    /// volatility is one of three fixed bands picked by the coarsest
    /// risk level present. Returns an empty series when the year range
    /// is inverted.
    #[must_use]
    pub fn simulate_history<R: Rng>(
        &self,
        allocation: &Allocation,
        monthly_contribution: f64,
        start_year: i32,
        end_year: i32,
        rng: &mut R,
    ) -> Vec<HistoryPoint> {
        if end_year < start_year {
            return Vec::new();
        }

        let mean_monthly = allocation.blended_return_percent() / 100.0 / 12.0;
        let volatility = match allocation.dominant_risk_level() {
            RiskTolerance::High => VOLATILITY_HIGH,
            RiskTolerance::Medium => VOLATILITY_MEDIUM,
            RiskTolerance::Low => VOLATILITY_LOW,
        };

        let months = (end_year - start_year + 1) * 12;
        let mut series = Vec::with_capacity(months as usize);

        let mut value = 0.0_f64;
        let mut contributions = 0.0_f64;

        for year in start_year..=end_year {
            for month in 1..=12u32 {
                let noise = rng.gen_range(-0.5..0.5) * volatility / 12.0;
                value = (value + monthly_contribution) * (1.0 + mean_monthly + noise);
                contributions += monthly_contribution;

                series.push(HistoryPoint {
                    label: format!("{year}-{month:02}"),
                    value,
                    contributions,
                    gains: value - contributions,
                });
            }
        }

        series
    }
}

impl Default for HistoryService {
    fn default() -> Self {
        Self::new()
    }
}
