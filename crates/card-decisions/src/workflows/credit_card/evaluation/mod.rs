mod config;
mod policy;
mod rules;

pub use config::EvaluationConfig;
pub use policy::{CreditCardApplicationDecision, DecisionRule};

use super::domain::CreditCardApplication;
use super::validator::{
    is_expired_license, FrequentFlyerValidator, ValidationMode, ValidatorError,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Applies the decision rules to an application, consulting the frequent-flyer
/// validator only when a rule needs it.
///
/// Rules run in a fixed order and the first decisive rule wins:
///
/// 1. income at or above [`EvaluationConfig::auto_accept_income`] is accepted with no
///    validator interaction;
/// 2. the license key is read once and an expired license refers the application;
/// 3. applicants below [`EvaluationConfig::minimum_age`] are referred;
/// 4. applicants at or above [`EvaluationConfig::detailed_lookup_age`] switch the
///    validator to [`ValidationMode::Detailed`];
/// 5. income below [`EvaluationConfig::low_income_threshold`] is declined when the
///    validator does not recognise the frequent-flyer number;
/// 6. everything else is referred.
pub struct ApplicationEvaluator<V> {
    validator: V,
    config: EvaluationConfig,
}

impl<V: FrequentFlyerValidator> ApplicationEvaluator<V> {
    pub fn new(validator: V) -> Self {
        Self::with_config(validator, EvaluationConfig::default())
    }

    pub fn with_config(validator: V, config: EvaluationConfig) -> Self {
        Self { validator, config }
    }

    pub fn config(&self) -> &EvaluationConfig {
        &self.config
    }

    pub fn validator(&self) -> &V {
        &self.validator
    }

    pub fn validator_mut(&mut self) -> &mut V {
        &mut self.validator
    }

    pub fn into_validator(self) -> V {
        self.validator
    }

    pub fn evaluate(
        &mut self,
        application: &CreditCardApplication,
    ) -> Result<CreditCardApplicationDecision, ValidatorError> {
        self.assess(application).map(|outcome| outcome.decision)
    }

    /// Same as [`evaluate`](Self::evaluate) but keeps the rule that decided.
    ///
    /// Validator faults are returned as-is; nothing is retried.
    pub fn assess(
        &mut self,
        application: &CreditCardApplication,
    ) -> Result<EvaluationOutcome, ValidatorError> {
        if rules::qualifies_for_auto_accept(application, &self.config) {
            debug!(
                income = application.gross_annual_income,
                "income meets auto-accept threshold"
            );
            return Ok(EvaluationOutcome::from_rule(DecisionRule::HighIncome, None));
        }

        let license_key = self.validator.license_key()?;
        if is_expired_license(&license_key) {
            warn!("frequent flyer validator license expired, referring application");
            return Ok(EvaluationOutcome::from_rule(
                DecisionRule::LicenseExpired,
                None,
            ));
        }

        if rules::below_minimum_age(application, &self.config) {
            debug!(age = application.age, "applicant below minimum age");
            return Ok(EvaluationOutcome::from_rule(
                DecisionRule::BelowMinimumAge,
                None,
            ));
        }

        let requested_mode = if rules::wants_detailed_lookup(application, &self.config) {
            self.validator.set_validation_mode(ValidationMode::Detailed);
            Some(ValidationMode::Detailed)
        } else {
            None
        };

        if rules::requires_frequent_flyer_check(application, &self.config) {
            let recognised = self
                .validator
                .is_valid(&application.frequent_flyer_number)?;
            debug!(recognised, "frequent flyer lookup completed");

            let rule = if recognised {
                DecisionRule::FrequentFlyerVerified
            } else {
                DecisionRule::FrequentFlyerRejected
            };
            return Ok(EvaluationOutcome::from_rule(rule, requested_mode));
        }

        Ok(EvaluationOutcome::from_rule(
            DecisionRule::ManualReview,
            requested_mode,
        ))
    }
}

/// Decision plus the rule that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationOutcome {
    pub decision: CreditCardApplicationDecision,
    pub rule: DecisionRule,
    /// Mode written to the validator during this evaluation, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_mode: Option<ValidationMode>,
}

impl EvaluationOutcome {
    fn from_rule(rule: DecisionRule, validation_mode: Option<ValidationMode>) -> Self {
        Self {
            decision: rule.decision(),
            rule,
            validation_mode,
        }
    }

    pub fn summary(&self) -> String {
        format!("{}: {}", self.decision.label(), self.rule.summary())
    }
}
