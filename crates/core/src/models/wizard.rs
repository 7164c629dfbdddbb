use serde::{Deserialize, Serialize};

/// The three pages of the planner flow. The only stateful control flow
/// in the whole application: welcome → questionnaire → results, with
/// linear back navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WizardPage {
    #[default]
    Welcome,
    Questionnaire,
    Results,
}

impl WizardPage {
    /// The page shown after the current one's primary action
    /// ("Get Started" on welcome, a successful submission on the
    /// questionnaire). Results is terminal.
    #[must_use]
    pub fn advance(self) -> Self {
        match self {
            WizardPage::Welcome => WizardPage::Questionnaire,
            WizardPage::Questionnaire | WizardPage::Results => WizardPage::Results,
        }
    }

    /// The page shown by the back button. Welcome is the start.
    #[must_use]
    pub fn back(self) -> Self {
        match self {
            WizardPage::Welcome | WizardPage::Questionnaire => WizardPage::Welcome,
            WizardPage::Results => WizardPage::Questionnaire,
        }
    }
}

impl std::fmt::Display for WizardPage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WizardPage::Welcome => write!(f, "welcome"),
            WizardPage::Questionnaire => write!(f, "questionnaire"),
            WizardPage::Results => write!(f, "results"),
        }
    }
}
