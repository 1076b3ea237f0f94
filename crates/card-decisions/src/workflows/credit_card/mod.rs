//! Credit-card application decisions.
//!
//! [`ApplicationEvaluator`] is the only component with decision logic. It depends on a
//! [`FrequentFlyerValidator`] supplied by the caller; [`RegistryValidator`] is the
//! in-memory implementation used by the CLI, and [`BatchEvaluator`] runs the evaluator
//! over a CSV export.

pub mod batch;
pub mod domain;
pub mod evaluation;
pub mod registry;
pub mod validator;

#[cfg(test)]
mod tests;

pub use batch::{BatchEntry, BatchEvaluationError, BatchEvaluator, BatchReport, DecisionTotals};
pub use domain::{ApplicationId, CreditCardApplication};
pub use evaluation::{
    ApplicationEvaluator, CreditCardApplicationDecision, DecisionRule, EvaluationConfig,
    EvaluationOutcome,
};
pub use registry::RegistryValidator;
pub use validator::{
    FrequentFlyerValidator, LicenseInformation, ServiceInformation, ValidationMode,
    ValidatorError, EXPIRED_LICENSE_KEY,
};
