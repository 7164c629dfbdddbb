use crate::models::allocation::{Allocation, AllocationEntry};
use crate::models::risk::RiskTolerance;

/// Maps a risk-tolerance label to one of three fixed portfolio
/// templates. A static lookup table, not an optimizer: no per-user
/// tuning, no covariance math, no mean-variance anything.
///
/// Each template carries its own fixed blended return and risk score;
/// the allocation percentages sum to 100 by construction.
pub struct AllocationService;

impl AllocationService {
    pub fn new() -> Self {
        Self
    }

    /// Select the portfolio template for a risk-tolerance label.
    ///
    /// Total over all inputs: "low", "medium", and "high" (trimmed,
    /// any case) pick their templates; anything else silently gets the
    /// single-instrument default. The caller cannot distinguish an
    /// explicit default choice from a typo — accepted trade-off.
    #[must_use]
    pub fn select_allocation(&self, risk_tolerance: &str) -> Allocation {
        match RiskTolerance::from_label(risk_tolerance) {
            Some(RiskTolerance::Low) => Self::conservative_template(),
            Some(RiskTolerance::Medium) => Self::balanced_template(),
            Some(RiskTolerance::High) => Self::growth_template(),
            None => Self::default_template(),
        }
    }

    /// Conservative template: bond-heavy, capital preservation first.
    fn conservative_template() -> Allocation {
        Allocation {
            entries: vec![
                AllocationEntry::new(
                    "BND",
                    "Vanguard Total Bond Market ETF",
                    40.0,
                    4.2,
                    RiskTolerance::Low,
                ),
                AllocationEntry::new(
                    "VGIT",
                    "Vanguard Intermediate-Term Treasury ETF",
                    30.0,
                    3.8,
                    RiskTolerance::Low,
                ),
                AllocationEntry::new(
                    "VOO",
                    "Vanguard S&P 500 ETF",
                    20.0,
                    10.5,
                    RiskTolerance::Medium,
                ),
                AllocationEntry::new(
                    "VTIAX",
                    "Vanguard Total International Stock Index",
                    10.0,
                    8.2,
                    RiskTolerance::Medium,
                ),
            ],
            total_expected_return_percent: 7.8,
            risk_score: 3,
        }
    }

    /// Balanced template: broad-market core with two large-cap names.
    fn balanced_template() -> Allocation {
        Allocation {
            entries: vec![
                AllocationEntry::new(
                    "VOO",
                    "Vanguard S&P 500 ETF",
                    50.0,
                    10.5,
                    RiskTolerance::Medium,
                ),
                AllocationEntry::new("AAPL", "Apple Inc.", 25.0, 12.3, RiskTolerance::High),
                AllocationEntry::new(
                    "MSFT",
                    "Microsoft Corporation",
                    15.0,
                    11.7,
                    RiskTolerance::Medium,
                ),
                AllocationEntry::new(
                    "BND",
                    "Vanguard Total Bond Market ETF",
                    10.0,
                    4.2,
                    RiskTolerance::Low,
                ),
            ],
            total_expected_return_percent: 9.8,
            risk_score: 6,
        }
    }

    /// Growth template: equity-only, sector and emerging-market tilts.
    fn growth_template() -> Allocation {
        Allocation {
            entries: vec![
                AllocationEntry::new(
                    "VOO",
                    "Vanguard S&P 500 ETF",
                    40.0,
                    10.5,
                    RiskTolerance::Medium,
                ),
                AllocationEntry::new(
                    "VGT",
                    "Vanguard Information Technology ETF",
                    30.0,
                    15.2,
                    RiskTolerance::High,
                ),
                AllocationEntry::new(
                    "VWO",
                    "Vanguard Emerging Markets ETF",
                    20.0,
                    11.8,
                    RiskTolerance::High,
                ),
                AllocationEntry::new(
                    "VNQ",
                    "Vanguard Real Estate ETF",
                    10.0,
                    9.1,
                    RiskTolerance::High,
                ),
            ],
            total_expected_return_percent: 12.1,
            risk_score: 9,
        }
    }

    /// Fallback for unrecognized labels: everything in the broad-market
    /// index fund.
    fn default_template() -> Allocation {
        Allocation {
            entries: vec![AllocationEntry::new(
                "VOO",
                "Vanguard S&P 500 ETF",
                100.0,
                10.5,
                RiskTolerance::Medium,
            )],
            total_expected_return_percent: 10.5,
            risk_score: 5,
        }
    }
}

impl Default for AllocationService {
    fn default() -> Self {
        Self::new()
    }
}
