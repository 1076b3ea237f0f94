use super::super::domain::CreditCardApplication;
use super::config::EvaluationConfig;

pub(crate) fn qualifies_for_auto_accept(
    application: &CreditCardApplication,
    config: &EvaluationConfig,
) -> bool {
    application.gross_annual_income >= config.auto_accept_income
}

pub(crate) fn below_minimum_age(
    application: &CreditCardApplication,
    config: &EvaluationConfig,
) -> bool {
    application.age < config.minimum_age
}

pub(crate) fn wants_detailed_lookup(
    application: &CreditCardApplication,
    config: &EvaluationConfig,
) -> bool {
    application.age >= config.detailed_lookup_age
}

pub(crate) fn requires_frequent_flyer_check(
    application: &CreditCardApplication,
    config: &EvaluationConfig,
) -> bool {
    application.gross_annual_income < config.low_income_threshold
}
