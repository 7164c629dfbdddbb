use thiserror::Error;

/// Unified error type for the entire microinvest-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
///
/// Unrecognized risk-tolerance or time-horizon labels are NOT errors:
/// they fall back to documented defaults instead, so the form layer
/// never has to handle a rejection.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Degenerate Arithmetic ───────────────────────────────────────
    #[error("Goal amount must be positive, got {0}")]
    NonPositiveGoal(f64),

    #[error("Horizon must be at least one month")]
    ZeroHorizon,

    #[error("Non-finite input: {0}")]
    NonFiniteInput(String),

    // ── Business Logic ──────────────────────────────────────────────
    #[error("Validation failed: {0}")]
    ValidationError(String),

    #[error("No recommendation available — submit the questionnaire first")]
    NoRecommendation,

    #[error("Goal not found: {0}")]
    GoalNotFound(String),

    // ── Serialization / Export ──────────────────────────────────────
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Export failed: {0}")]
    ExportFailed(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Serialization(e.to_string())
    }
}
