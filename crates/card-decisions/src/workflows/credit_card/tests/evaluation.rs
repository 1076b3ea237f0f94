use super::common::*;
use crate::workflows::credit_card::evaluation::{
    ApplicationEvaluator, CreditCardApplicationDecision, DecisionRule, EvaluationConfig,
};
use crate::workflows::credit_card::validator::{
    FrequentFlyerValidator, ValidationMode, ValidatorError,
};

#[test]
fn accepts_high_income_applications_without_validator() {
    for age in [15, 25, 42] {
        let mut validator = RecordingValidator::licensed("OK");

        let decision = evaluator(&mut validator)
            .evaluate(&application(100_000.0, age, "x"))
            .expect("evaluation succeeds");

        assert_eq!(decision, CreditCardApplicationDecision::AutoAccepted);
        assert_eq!(validator.lookup_count(), 0);
        assert_eq!(validator.license_reads.get(), 0);
        assert!(validator.mode_writes.is_empty());
    }
}

#[test]
fn refers_young_applicants() {
    let mut validator = RecordingValidator::licensed("OK").answering(false);

    let outcome = evaluator(&mut validator)
        .assess(&application(19_999.0, 19, "x"))
        .expect("evaluation succeeds");

    assert_eq!(outcome.decision, CreditCardApplicationDecision::ReferredToHuman);
    assert_eq!(outcome.rule, DecisionRule::BelowMinimumAge);
    assert_eq!(validator.lookup_count(), 0);
    assert_eq!(validator.license_reads.get(), 1);
}

#[test]
fn declines_low_income_when_frequent_flyer_number_invalid() {
    let mut validator = RecordingValidator::licensed("OK").answering(false);

    let decision = evaluator(&mut validator)
        .evaluate(&application(19_999.0, 42, "x"))
        .expect("evaluation succeeds");

    assert_eq!(decision, CreditCardApplicationDecision::AutoDeclined);
    assert_eq!(*validator.lookups.borrow(), vec!["x".to_string()]);
}

#[test]
fn refers_low_income_when_frequent_flyer_number_valid() {
    let mut validator = RecordingValidator::licensed("OK").answering(true);

    let outcome = evaluator(&mut validator)
        .assess(&application(19_999.0, 42, "x"))
        .expect("evaluation succeeds");

    assert_eq!(outcome.decision, CreditCardApplicationDecision::ReferredToHuman);
    assert_eq!(outcome.rule, DecisionRule::FrequentFlyerVerified);
    assert_eq!(validator.lookup_count(), 1);
}

#[test]
fn refers_when_license_expired_regardless_of_lookup() {
    for answer in [true, false] {
        let mut validator = RecordingValidator::licensed("EXPIRED").answering(answer);

        let outcome = evaluator(&mut validator)
            .assess(&application(19_999.0, 42, "x"))
            .expect("evaluation succeeds");

        assert_eq!(outcome.decision, CreditCardApplicationDecision::ReferredToHuman);
        assert_eq!(outcome.rule, DecisionRule::LicenseExpired);
        assert_eq!(validator.lookup_count(), 0);
        assert!(validator.mode_writes.is_empty());
    }
}

#[test]
fn expired_license_takes_precedence_over_age_referral() {
    let mut validator = RecordingValidator::licensed("EXPIRED");

    let outcome = evaluator(&mut validator)
        .assess(&application(50_000.0, 18, ""))
        .expect("evaluation succeeds");

    assert_eq!(outcome.rule, DecisionRule::LicenseExpired);
}

#[test]
fn requests_detailed_lookup_for_older_applicants() {
    let mut validator = RecordingValidator::licensed("OK");

    let outcome = evaluator(&mut validator)
        .assess(&application(19_999.0, 30, "x"))
        .expect("evaluation succeeds");

    assert_eq!(validator.detailed_writes(), 1);
    assert_eq!(validator.mode_writes.len(), 1);
    assert_eq!(validator.validation_mode(), ValidationMode::Detailed);
    assert_eq!(outcome.validation_mode, Some(ValidationMode::Detailed));
}

#[test]
fn leaves_quick_mode_for_applicants_under_thirty() {
    let mut validator = RecordingValidator::licensed("OK");

    let outcome = evaluator(&mut validator)
        .assess(&application(19_999.0, 29, "x"))
        .expect("evaluation succeeds");

    assert!(validator.mode_writes.is_empty());
    assert_eq!(validator.validation_mode(), ValidationMode::Quick);
    assert_eq!(outcome.validation_mode, None);
}

#[test]
fn reads_license_key_once_for_mid_income_applications() {
    let mut validator = RecordingValidator::licensed("OK");

    let outcome = evaluator(&mut validator)
        .assess(&application(99_000.0, 42, "x"))
        .expect("evaluation succeeds");

    assert_eq!(validator.license_reads.get(), 1);
    assert_eq!(validator.lookup_count(), 0);
    assert_eq!(outcome.decision, CreditCardApplicationDecision::ReferredToHuman);
    assert_eq!(outcome.rule, DecisionRule::ManualReview);
    assert_eq!(validator.detailed_writes(), 1);
}

#[test]
fn passes_empty_frequent_flyer_number_through() {
    let mut validator = RecordingValidator::licensed("OK").answering(false);

    let decision = evaluator(&mut validator)
        .evaluate(&application(5_000.0, 25, ""))
        .expect("evaluation succeeds");

    assert_eq!(decision, CreditCardApplicationDecision::AutoDeclined);
    assert_eq!(*validator.lookups.borrow(), vec![String::new()]);
}

#[test]
fn negative_values_follow_the_same_comparisons() {
    let mut validator = RecordingValidator::licensed("OK").answering(false);

    let outcome = evaluator(&mut validator)
        .assess(&application(-1.0, 35, "x"))
        .expect("evaluation succeeds");
    assert_eq!(outcome.rule, DecisionRule::FrequentFlyerRejected);

    let outcome = evaluator(&mut validator)
        .assess(&application(-1.0, -5, "x"))
        .expect("evaluation succeeds");
    assert_eq!(outcome.rule, DecisionRule::BelowMinimumAge);
}

#[test]
fn propagates_validator_faults() {
    let mut validator = RecordingValidator::licensed("OK").failing();

    let err = evaluator(&mut validator)
        .evaluate(&application(10_000.0, 42, "x"))
        .expect_err("fault surfaces");

    assert!(matches!(err, ValidatorError::Unavailable(_)));
    assert_eq!(validator.lookup_count(), 1);
}

#[test]
fn honours_custom_thresholds() {
    let config = EvaluationConfig {
        auto_accept_income: 150_000.0,
        low_income_threshold: 40_000.0,
        minimum_age: 21,
        detailed_lookup_age: 50,
    };
    let mut validator = RecordingValidator::licensed("OK").answering(false);
    let mut engine = ApplicationEvaluator::with_config(&mut validator, config);

    let high = engine
        .evaluate(&application(120_000.0, 42, "x"))
        .expect("evaluation succeeds");
    let young = engine
        .evaluate(&application(30_000.0, 20, "x"))
        .expect("evaluation succeeds");
    let low = engine
        .evaluate(&application(30_000.0, 42, "x"))
        .expect("evaluation succeeds");
    drop(engine);

    assert_eq!(high, CreditCardApplicationDecision::ReferredToHuman);
    assert_eq!(young, CreditCardApplicationDecision::ReferredToHuman);
    assert_eq!(low, CreditCardApplicationDecision::AutoDeclined);
    assert!(validator.mode_writes.is_empty());
}
