use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier supplied by the intake source (for example a CSV row).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ApplicationId(pub String);

impl fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

/// Applicant details captured on a credit-card application.
///
/// Values are taken as submitted. Negative income or age is not rejected here; such
/// applications land wherever the threshold comparisons place them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CreditCardApplication {
    pub gross_annual_income: f64,
    pub age: i32,
    /// May be empty. Passed to the validator unchanged.
    #[serde(default)]
    pub frequent_flyer_number: String,
}

impl CreditCardApplication {
    pub fn new(
        gross_annual_income: f64,
        age: i32,
        frequent_flyer_number: impl Into<String>,
    ) -> Self {
        Self {
            gross_annual_income,
            age,
            frequent_flyer_number: frequent_flyer_number.into(),
        }
    }
}
