use serde::{Deserialize, Serialize};

/// Final outcome for a single credit-card application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreditCardApplicationDecision {
    AutoAccepted,
    AutoDeclined,
    ReferredToHuman,
}

impl CreditCardApplicationDecision {
    pub fn label(&self) -> &'static str {
        match self {
            CreditCardApplicationDecision::AutoAccepted => "auto accepted",
            CreditCardApplicationDecision::AutoDeclined => "auto declined",
            CreditCardApplicationDecision::ReferredToHuman => "referred to human",
        }
    }
}

/// Rule that settled an evaluation, kept for audit output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionRule {
    HighIncome,
    LicenseExpired,
    BelowMinimumAge,
    FrequentFlyerRejected,
    FrequentFlyerVerified,
    ManualReview,
}

impl DecisionRule {
    pub fn decision(&self) -> CreditCardApplicationDecision {
        match self {
            DecisionRule::HighIncome => CreditCardApplicationDecision::AutoAccepted,
            DecisionRule::FrequentFlyerRejected => CreditCardApplicationDecision::AutoDeclined,
            DecisionRule::LicenseExpired
            | DecisionRule::BelowMinimumAge
            | DecisionRule::FrequentFlyerVerified
            | DecisionRule::ManualReview => CreditCardApplicationDecision::ReferredToHuman,
        }
    }

    pub fn summary(&self) -> String {
        match self {
            DecisionRule::HighIncome => "income meets the auto-accept threshold".to_string(),
            DecisionRule::LicenseExpired => {
                "validator license expired; lookup results not trusted".to_string()
            }
            DecisionRule::BelowMinimumAge => "applicant below minimum age".to_string(),
            DecisionRule::FrequentFlyerRejected => {
                "low income and frequent flyer number not recognised".to_string()
            }
            DecisionRule::FrequentFlyerVerified => {
                "low income with a recognised frequent flyer number".to_string()
            }
            DecisionRule::ManualReview => "no automatic rule applied".to_string(),
        }
    }
}
