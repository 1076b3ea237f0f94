use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::io::Read;
use std::path::Path;
use tracing::info;

use super::domain::{ApplicationId, CreditCardApplication};
use super::evaluation::{ApplicationEvaluator, CreditCardApplicationDecision, EvaluationOutcome};
use super::validator::{FrequentFlyerValidator, ValidationMode, ValidatorError};

#[derive(Debug, thiserror::Error)]
pub enum BatchEvaluationError {
    #[error("failed to read applications: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid application CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("validator failed while evaluating {application_id}: {source}")]
    Validator {
        application_id: ApplicationId,
        source: ValidatorError,
    },
}

/// Evaluates applications listed in a CSV export.
///
/// Expected headers: `application_id,gross_annual_income,age,frequent_flyer_number`.
/// The frequent flyer column may be missing or blank.
pub struct BatchEvaluator;

impl BatchEvaluator {
    pub fn from_path<P, V>(
        path: P,
        evaluator: &mut ApplicationEvaluator<V>,
    ) -> Result<BatchReport, BatchEvaluationError>
    where
        P: AsRef<Path>,
        V: FrequentFlyerValidator,
    {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file, evaluator)
    }

    /// Each row starts from [`ValidationMode::Quick`] so a detailed lookup requested
    /// for one applicant never carries over to the next. The first validator fault
    /// aborts the batch.
    pub fn from_reader<R, V>(
        reader: R,
        evaluator: &mut ApplicationEvaluator<V>,
    ) -> Result<BatchReport, BatchEvaluationError>
    where
        R: Read,
        V: FrequentFlyerValidator,
    {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut entries = Vec::new();
        let mut totals = DecisionTotals::default();

        for record in csv_reader.deserialize::<ApplicationRow>() {
            let (application_id, application) = record?.into_application();

            evaluator
                .validator_mut()
                .set_validation_mode(ValidationMode::default());
            let outcome = evaluator.assess(&application).map_err(|source| {
                BatchEvaluationError::Validator {
                    application_id: application_id.clone(),
                    source,
                }
            })?;

            totals.record(outcome.decision);
            entries.push(BatchEntry {
                application_id,
                application,
                outcome,
            });
        }

        info!(
            evaluated = entries.len(),
            accepted = totals.auto_accepted,
            declined = totals.auto_declined,
            referred = totals.referred_to_human,
            "batch evaluation complete"
        );

        Ok(BatchReport {
            generated_at: Utc::now(),
            entries,
            totals,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub generated_at: DateTime<Utc>,
    pub entries: Vec<BatchEntry>,
    pub totals: DecisionTotals,
}

impl BatchReport {
    pub fn entry(&self, application_id: &str) -> Option<&BatchEntry> {
        self.entries
            .iter()
            .find(|entry| entry.application_id.0 == application_id)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchEntry {
    pub application_id: ApplicationId,
    pub application: CreditCardApplication,
    pub outcome: EvaluationOutcome,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DecisionTotals {
    pub auto_accepted: usize,
    pub auto_declined: usize,
    pub referred_to_human: usize,
}

impl DecisionTotals {
    fn record(&mut self, decision: CreditCardApplicationDecision) {
        match decision {
            CreditCardApplicationDecision::AutoAccepted => self.auto_accepted += 1,
            CreditCardApplicationDecision::AutoDeclined => self.auto_declined += 1,
            CreditCardApplicationDecision::ReferredToHuman => self.referred_to_human += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.auto_accepted + self.auto_declined + self.referred_to_human
    }
}

#[derive(Debug, Deserialize)]
struct ApplicationRow {
    application_id: String,
    gross_annual_income: f64,
    age: i32,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    frequent_flyer_number: Option<String>,
}

impl ApplicationRow {
    fn into_application(self) -> (ApplicationId, CreditCardApplication) {
        (
            ApplicationId(self.application_id),
            CreditCardApplication::new(
                self.gross_annual_income,
                self.age,
                self.frequent_flyer_number.unwrap_or_default(),
            ),
        )
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
