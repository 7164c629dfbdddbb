use serde::{Deserialize, Serialize};

use crate::models::allocation::Allocation;
use crate::models::risk::RiskTolerance;

/// Canned educational topics the coach can explain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoachTopic {
    Diversification,
    CompoundInterest,
    DollarCostAveraging,
    EmergencyFund,
}

/// Static description of a single instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstrumentNote {
    pub symbol: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// Broad style of a portfolio, derived from its equity share.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PortfolioStyle {
    AggressiveGrowth,
    ModerateGrowth,
    Balanced,
    Conservative,
}

impl std::fmt::Display for PortfolioStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PortfolioStyle::AggressiveGrowth => write!(f, "aggressive growth"),
            PortfolioStyle::ModerateGrowth => write!(f, "moderate growth"),
            PortfolioStyle::Balanced => write!(f, "balanced"),
            PortfolioStyle::Conservative => write!(f, "conservative"),
        }
    }
}

/// Every instrument the allocation templates can recommend.
const INSTRUMENT_NOTES: [InstrumentNote; 9] = [
    InstrumentNote {
        symbol: "VOO",
        name: "Vanguard S&P 500 ETF",
        description: "Large-cap US stocks for growth potential",
    },
    InstrumentNote {
        symbol: "BND",
        name: "Vanguard Total Bond Market ETF",
        description: "Broad bond market exposure with low volatility",
    },
    InstrumentNote {
        symbol: "VGIT",
        name: "Vanguard Intermediate-Term Treasury ETF",
        description: "Government bonds with stable returns",
    },
    InstrumentNote {
        symbol: "VTIAX",
        name: "Vanguard Total International Stock Index",
        description: "International diversification",
    },
    InstrumentNote {
        symbol: "AAPL",
        name: "Apple Inc.",
        description: "Consumer technology leader with strong cash flow",
    },
    InstrumentNote {
        symbol: "MSFT",
        name: "Microsoft Corporation",
        description: "Diversified software and cloud computing giant",
    },
    InstrumentNote {
        symbol: "VGT",
        name: "Vanguard Information Technology ETF",
        description: "Technology sector growth exposure",
    },
    InstrumentNote {
        symbol: "VWO",
        name: "Vanguard Emerging Markets ETF",
        description: "Emerging markets growth potential",
    },
    InstrumentNote {
        symbol: "VNQ",
        name: "Vanguard Real Estate ETF",
        description: "Real estate investment exposure",
    },
];

/// The "AI coach": a mapping from closed enumerations to immutable text.
/// There is no inference here — per-symbol blurbs, per-risk strategy
/// explanations, and a handful of educational snippets, all static.
pub struct CoachService;

impl CoachService {
    pub fn new() -> Self {
        Self
    }

    /// Look up the canned note for a ticker symbol (case-insensitive).
    /// `None` for symbols outside the template universe.
    #[must_use]
    pub fn instrument_note(&self, symbol: &str) -> Option<&'static InstrumentNote> {
        let upper = symbol.trim().to_uppercase();
        INSTRUMENT_NOTES.iter().find(|n| n.symbol == upper)
    }

    /// Strategy explanation for a risk tolerance.
    #[must_use]
    pub fn risk_explanation(&self, risk: RiskTolerance) -> &'static str {
        match risk {
            RiskTolerance::Low => {
                "Your conservative approach prioritizes capital preservation. \
                 This strategy is suitable for short-term goals or if you're \
                 uncomfortable with market volatility."
            }
            RiskTolerance::Medium => {
                "Your moderate risk tolerance allows for balanced growth while \
                 maintaining reasonable stability. This approach is suitable \
                 for most long-term investors."
            }
            RiskTolerance::High => {
                "Your aggressive approach maximizes growth potential. This \
                 strategy is suitable for long-term goals where you can ride \
                 out market fluctuations."
            }
        }
    }

    /// Educational snippet for a topic.
    #[must_use]
    pub fn topic_note(&self, topic: CoachTopic) -> &'static str {
        match topic {
            CoachTopic::Diversification => {
                "Diversification helps reduce risk by spreading investments \
                 across different asset classes that may perform differently \
                 in various market conditions."
            }
            CoachTopic::CompoundInterest => {
                "Compound interest rewards starting early: your money gets \
                 more time to grow exponentially."
            }
            CoachTopic::DollarCostAveraging => {
                "Investing the same amount regularly (dollar-cost averaging) \
                 helps reduce the impact of market volatility on your \
                 investments."
            }
            CoachTopic::EmergencyFund => {
                "Always maintain 3-6 months of expenses in an emergency fund \
                 before investing significant amounts in the market."
            }
        }
    }

    /// Classify a portfolio by its equity share (everything that isn't a
    /// low-risk bond holding): >= 80 aggressive growth, >= 60 moderate
    /// growth, >= 40 balanced, else conservative.
    #[must_use]
    pub fn portfolio_style(&self, allocation: &Allocation) -> PortfolioStyle {
        let equity_percent: f64 = allocation
            .entries
            .iter()
            .filter(|e| e.risk_level != RiskTolerance::Low)
            .map(|e| e.allocation_percent)
            .sum();

        if equity_percent >= 80.0 {
            PortfolioStyle::AggressiveGrowth
        } else if equity_percent >= 60.0 {
            PortfolioStyle::ModerateGrowth
        } else if equity_percent >= 40.0 {
            PortfolioStyle::Balanced
        } else {
            PortfolioStyle::Conservative
        }
    }

    /// Short style blurb, keyed by the same classification.
    #[must_use]
    pub fn style_explanation(&self, style: PortfolioStyle) -> &'static str {
        match style {
            PortfolioStyle::AggressiveGrowth => {
                "This aggressive portfolio prioritizes growth over stability, \
                 suitable for long-term investors who can tolerate significant \
                 volatility."
            }
            PortfolioStyle::ModerateGrowth => {
                "This growth-leaning portfolio accepts meaningful equity \
                 exposure in exchange for higher expected returns."
            }
            PortfolioStyle::Balanced => {
                "This balanced portfolio provides a mix of growth and \
                 stability, appropriate for investors with moderate risk \
                 tolerance."
            }
            PortfolioStyle::Conservative => {
                "This conservative portfolio emphasizes capital preservation \
                 and steady income, ideal for risk-averse investors or those \
                 nearing their goals."
            }
        }
    }
}

impl Default for CoachService {
    fn default() -> Self {
        Self::new()
    }
}
