pub mod errors;
pub mod models;
pub mod services;

use rand::Rng;
use uuid::Uuid;

use models::{
    dca::DcaPoint,
    goal::{Goal, GoalAnalysis},
    history::HistoryPoint,
    plan::{PlanInput, Recommendation, MIN_MONTHLY_BUDGET},
    records::{GoalRecord, GoalStatus, PortfolioRecord},
    risk::RiskTolerance,
    wizard::WizardPage,
};
use services::{
    allocation_service::AllocationService,
    coach_service::{CoachService, CoachTopic, InstrumentNote, PortfolioStyle},
    dca_service::DcaService,
    goal_service::GoalService,
    history_service::HistoryService,
    projection_service::ProjectionService,
};

use errors::CoreError;

/// Main entry point for the MicroInvest core library.
/// Holds the current session's wizard position, recommendation, and
/// goals, plus the services that compute them.
///
/// Everything here is transient per-session state: a new form submission
/// replaces the recommendation, and `reset` discards the lot. Rows for
/// the external store are built on demand (`portfolio_record`,
/// `goal_record`) and handed out — writing them is not this crate's job.
#[must_use]
pub struct InvestmentPlanner {
    wizard: WizardPage,
    recommendation: Option<Recommendation>,
    goals: Vec<Goal>,
    allocation_service: AllocationService,
    projection_service: ProjectionService,
    goal_service: GoalService,
    dca_service: DcaService,
    history_service: HistoryService,
    coach_service: CoachService,
}

impl std::fmt::Debug for InvestmentPlanner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InvestmentPlanner")
            .field("wizard", &self.wizard)
            .field("has_recommendation", &self.recommendation.is_some())
            .field("goals", &self.goals.len())
            .finish()
    }
}

impl InvestmentPlanner {
    /// Create a fresh session, starting on the welcome page.
    pub fn create_new() -> Self {
        Self {
            wizard: WizardPage::Welcome,
            recommendation: None,
            goals: Vec::new(),
            allocation_service: AllocationService::new(),
            projection_service: ProjectionService::new(),
            goal_service: GoalService::new(),
            dca_service: DcaService::new(),
            history_service: HistoryService::new(),
            coach_service: CoachService::new(),
        }
    }

    // ── Wizard ──────────────────────────────────────────────────────

    /// The page the session is currently on.
    #[must_use]
    pub fn wizard_page(&self) -> WizardPage {
        self.wizard
    }

    /// "Get Started" on the welcome page.
    pub fn start(&mut self) {
        if self.wizard == WizardPage::Welcome {
            self.wizard = self.wizard.advance();
        }
    }

    /// Back button: one linear step toward welcome.
    pub fn go_back(&mut self) {
        self.wizard = self.wizard.back();
    }

    /// "Start Over": discard all session state.
    pub fn reset(&mut self) {
        self.wizard = WizardPage::Welcome;
        self.recommendation = None;
        self.goals.clear();
    }

    // ── Questionnaire → Recommendation ──────────────────────────────

    /// Turn the questionnaire answers into a portfolio recommendation
    /// and make it the session's current one.
    ///
    /// The risk-tolerance and time-horizon labels are never rejected
    /// (unrecognized values fall back to documented defaults), but the
    /// monthly budget must be a finite number of at least 10.
    pub fn submit_questionnaire(
        &mut self,
        input: PlanInput,
    ) -> Result<&Recommendation, CoreError> {
        if !input.monthly_budget.is_finite() {
            return Err(CoreError::NonFiniteInput(format!(
                "monthly_budget = {}",
                input.monthly_budget
            )));
        }
        if input.monthly_budget < MIN_MONTHLY_BUDGET {
            return Err(CoreError::ValidationError(format!(
                "monthly budget must be at least {MIN_MONTHLY_BUDGET}, got {}",
                input.monthly_budget
            )));
        }

        let investments = self.allocation_service.select_allocation(&input.risk_tolerance);
        let horizon_months = self.projection_service.horizon_months(&input.time_horizon);
        let projected_value = self.projection_service.project_future_value(
            input.monthly_budget,
            investments.total_expected_return_percent,
            horizon_months,
        ) as i64;

        let recommendation = Recommendation {
            total_expected_return: investments.total_expected_return_percent,
            risk_score: investments.risk_score,
            investments,
            monthly_amount: input.monthly_budget,
            projected_value,
            horizon_months,
            timeframe: input.time_horizon,
            investment_goal: input.investment_goal,
            risk_tolerance: input.risk_tolerance,
        };

        self.wizard = WizardPage::Results;
        Ok(&*self.recommendation.insert(recommendation))
    }

    /// The current recommendation, if the questionnaire has been
    /// submitted this session.
    #[must_use]
    pub fn recommendation(&self) -> Option<&Recommendation> {
        self.recommendation.as_ref()
    }

    // ── Goals ───────────────────────────────────────────────────────

    /// Add a savings goal to the session. Target amount and horizon
    /// must be positive.
    pub fn add_goal(&mut self, goal: Goal) -> Result<Uuid, CoreError> {
        if !goal.target_amount.is_finite() {
            return Err(CoreError::NonFiniteInput(format!(
                "target_amount = {}",
                goal.target_amount
            )));
        }
        if goal.target_amount <= 0.0 {
            return Err(CoreError::NonPositiveGoal(goal.target_amount));
        }
        if goal.target_horizon_months == 0 {
            return Err(CoreError::ZeroHorizon);
        }
        let id = goal.id;
        self.goals.push(goal);
        Ok(id)
    }

    /// Remove a goal by its ID.
    pub fn remove_goal(&mut self, goal_id: Uuid) -> Result<Goal, CoreError> {
        let idx = self
            .goals
            .iter()
            .position(|g| g.id == goal_id)
            .ok_or_else(|| CoreError::GoalNotFound(goal_id.to_string()))?;
        Ok(self.goals.remove(idx))
    }

    /// All goals in insertion order.
    #[must_use]
    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    /// Analyze a goal against the current plan: project what the
    /// current monthly amount grows to over the GOAL's horizon at the
    /// plan's expected return, then measure the gap.
    pub fn analyze_goal(&self, goal: &Goal) -> Result<GoalAnalysis, CoreError> {
        let rec = self.recommendation.as_ref().ok_or(CoreError::NoRecommendation)?;

        let projected = self.projection_service.project_future_value(
            rec.monthly_amount,
            rec.total_expected_return,
            goal.target_horizon_months,
        );
        self.goal_service.analyze_goal(
            projected,
            goal.target_amount,
            goal.target_horizon_months,
            rec.total_expected_return,
        )
    }

    // ── Auxiliary simulations ───────────────────────────────────────

    /// DCA vs. lump-sum series for the current plan.
    pub fn simulate_dca(&self) -> Result<Vec<DcaPoint>, CoreError> {
        let rec = self.recommendation.as_ref().ok_or(CoreError::NoRecommendation)?;
        Ok(self.dca_service.simulate_dca(
            rec.monthly_amount,
            rec.total_expected_return,
            rec.horizon_months,
        ))
    }

    /// Synthetic historical series for the current plan's allocation.
    /// Randomized; for charts only, never for the headline figures.
    pub fn simulate_history<R: Rng>(
        &self,
        start_year: i32,
        end_year: i32,
        rng: &mut R,
    ) -> Result<Vec<HistoryPoint>, CoreError> {
        let rec = self.recommendation.as_ref().ok_or(CoreError::NoRecommendation)?;
        Ok(self.history_service.simulate_history(
            &rec.investments,
            rec.monthly_amount,
            start_year,
            end_year,
            rng,
        ))
    }

    // ── Coach ───────────────────────────────────────────────────────

    /// Canned note for a ticker symbol, if it's in the template universe.
    #[must_use]
    pub fn explain_instrument(&self, symbol: &str) -> Option<&'static InstrumentNote> {
        self.coach_service.instrument_note(symbol)
    }

    /// Strategy explanation for a risk tolerance.
    #[must_use]
    pub fn explain_risk(&self, risk: RiskTolerance) -> &'static str {
        self.coach_service.risk_explanation(risk)
    }

    /// Educational snippet for a topic.
    #[must_use]
    pub fn explain_topic(&self, topic: CoachTopic) -> &'static str {
        self.coach_service.topic_note(topic)
    }

    /// Style classification and blurb for the current plan's portfolio.
    pub fn describe_portfolio(&self) -> Result<(PortfolioStyle, &'static str), CoreError> {
        let rec = self.recommendation.as_ref().ok_or(CoreError::NoRecommendation)?;
        let style = self.coach_service.portfolio_style(&rec.investments);
        Ok((style, self.coach_service.style_explanation(style)))
    }

    // ── Persistence Record Builders ─────────────────────────────────

    /// Build the `portfolios` row for the external store from the
    /// current recommendation.
    pub fn portfolio_record(&self, user_id: Uuid) -> Result<PortfolioRecord, CoreError> {
        let rec = self.recommendation.as_ref().ok_or(CoreError::NoRecommendation)?;
        Ok(PortfolioRecord {
            user_id,
            monthly_budget: rec.monthly_amount,
            risk_tolerance: rec.risk_tolerance.clone(),
            investment_goal: rec.investment_goal.clone(),
            time_horizon: rec.timeframe.clone(),
            allocation: rec.investments.entries.clone(),
            expected_return: rec.total_expected_return,
            risk_score: rec.risk_score,
            projected_value: rec.projected_value,
        })
    }

    /// Build the `goals` row for the external store, with progress
    /// measured against the current plan.
    pub fn goal_record(&self, user_id: Uuid, goal_id: Uuid) -> Result<GoalRecord, CoreError> {
        let rec = self.recommendation.as_ref().ok_or(CoreError::NoRecommendation)?;
        let goal = self
            .goals
            .iter()
            .find(|g| g.id == goal_id)
            .ok_or_else(|| CoreError::GoalNotFound(goal_id.to_string()))?;

        let analysis = self.analyze_goal(goal)?;
        let status = if analysis.progress_percent >= 100.0 {
            GoalStatus::Achieved
        } else {
            GoalStatus::Active
        };

        Ok(GoalRecord {
            user_id,
            goal_name: goal.name.clone(),
            target_amount: goal.target_amount,
            target_date: goal.target_date,
            monthly_contribution: rec.monthly_amount,
            progress: analysis.progress_percent,
            status,
        })
    }

    // ── Export ──────────────────────────────────────────────────────

    /// Export the current recommendation as CSV: a one-row summary
    /// section, a blank line, then one row per instrument. Reproduces
    /// the stored figures exactly — nothing is recomputed here.
    pub fn export_recommendation_to_csv(&self) -> Result<String, CoreError> {
        let rec = self.recommendation.as_ref().ok_or(CoreError::NoRecommendation)?;

        let mut csv = String::from(
            "monthly_amount,total_expected_return,risk_score,projected_value,timeframe,investment_goal\n",
        );
        csv.push_str(&format!(
            "{},{},{},{},{},{}\n",
            rec.monthly_amount,
            rec.total_expected_return,
            rec.risk_score,
            rec.projected_value,
            escape_csv_field(&rec.timeframe),
            escape_csv_field(&rec.investment_goal),
        ));

        csv.push('\n');
        csv.push_str("symbol,name,allocation_percent,expected_return_percent,risk_level\n");
        for entry in &rec.investments.entries {
            csv.push_str(&format!(
                "{},{},{},{},{}\n",
                entry.symbol,
                escape_csv_field(&entry.name),
                entry.allocation_percent,
                entry.expected_return_percent,
                entry.risk_level,
            ));
        }

        Ok(csv)
    }

    /// Export the current recommendation as a paginated plain-text
    /// report, `lines_per_page` body lines per page with a numbered
    /// footer. Like the CSV export, this only formats stored figures.
    pub fn export_recommendation_report(
        &self,
        lines_per_page: usize,
    ) -> Result<String, CoreError> {
        if lines_per_page == 0 {
            return Err(CoreError::ExportFailed(
                "page size must be at least one line".into(),
            ));
        }
        let rec = self.recommendation.as_ref().ok_or(CoreError::NoRecommendation)?;

        let mut lines = vec![
            "MicroInvest Portfolio Recommendation".to_string(),
            String::new(),
            format!("Monthly amount:        {}", rec.monthly_amount),
            format!("Expected return:       {}%", rec.total_expected_return),
            format!("Risk score:            {}", rec.risk_score),
            format!("Projected value:       {}", rec.projected_value),
            format!("Timeframe:             {}", rec.timeframe),
            format!("Investment goal:       {}", rec.investment_goal),
            String::new(),
            "Allocation".to_string(),
        ];
        for entry in &rec.investments.entries {
            lines.push(format!(
                "  {:<6} {:>5}%  {} ({}% expected, {} risk)",
                entry.symbol,
                entry.allocation_percent,
                entry.name,
                entry.expected_return_percent,
                entry.risk_level,
            ));
        }

        let total_pages = lines.len().div_ceil(lines_per_page);
        let mut report = String::new();
        for (page, chunk) in lines.chunks(lines_per_page).enumerate() {
            for line in chunk {
                report.push_str(line);
                report.push('\n');
            }
            report.push_str(&format!("--- page {} of {} ---\n", page + 1, total_pages));
        }

        Ok(report)
    }

    /// JSON snapshot of the current recommendation.
    pub fn to_json(&self) -> Result<String, CoreError> {
        let rec = self.recommendation.as_ref().ok_or(CoreError::NoRecommendation)?;
        serde_json::to_string_pretty(rec)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize recommendation: {e}")))
    }
}

impl Default for InvestmentPlanner {
    fn default() -> Self {
        Self::create_new()
    }
}

/// Quote a CSV field when it contains commas, quotes, or newlines.
fn escape_csv_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
