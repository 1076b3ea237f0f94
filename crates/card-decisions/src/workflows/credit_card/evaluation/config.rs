use serde::{Deserialize, Serialize};

/// Thresholds applied by the evaluator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationConfig {
    /// Income at or above which an application is accepted without a lookup.
    pub auto_accept_income: f64,
    /// Income below which the frequent-flyer number is checked.
    pub low_income_threshold: f64,
    /// Applicants younger than this are referred.
    pub minimum_age: i32,
    /// Applicants this age or older get a detailed lookup.
    pub detailed_lookup_age: i32,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            auto_accept_income: 100_000.0,
            low_income_threshold: 20_000.0,
            minimum_age: 20,
            detailed_lookup_age: 30,
        }
    }
}
