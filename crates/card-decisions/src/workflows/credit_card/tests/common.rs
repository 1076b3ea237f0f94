use std::cell::{Cell, RefCell};

use crate::workflows::credit_card::domain::CreditCardApplication;
use crate::workflows::credit_card::evaluation::ApplicationEvaluator;
use crate::workflows::credit_card::validator::{
    FrequentFlyerValidator, ValidationMode, ValidatorError,
};

/// Validator double that answers from fixed values and records every interaction.
#[derive(Debug)]
pub(super) struct RecordingValidator {
    license_key: String,
    answer: bool,
    fail_lookups: bool,
    mode: ValidationMode,
    pub(super) license_reads: Cell<usize>,
    pub(super) lookups: RefCell<Vec<String>>,
    pub(super) mode_writes: Vec<ValidationMode>,
}

impl RecordingValidator {
    pub(super) fn licensed(license_key: &str) -> Self {
        Self {
            license_key: license_key.to_string(),
            answer: true,
            fail_lookups: false,
            mode: ValidationMode::default(),
            license_reads: Cell::new(0),
            lookups: RefCell::new(Vec::new()),
            mode_writes: Vec::new(),
        }
    }

    pub(super) fn answering(mut self, answer: bool) -> Self {
        self.answer = answer;
        self
    }

    pub(super) fn failing(mut self) -> Self {
        self.fail_lookups = true;
        self
    }

    pub(super) fn lookup_count(&self) -> usize {
        self.lookups.borrow().len()
    }

    pub(super) fn detailed_writes(&self) -> usize {
        self.mode_writes
            .iter()
            .filter(|mode| **mode == ValidationMode::Detailed)
            .count()
    }
}

impl FrequentFlyerValidator for RecordingValidator {
    fn is_valid(&self, frequent_flyer_number: &str) -> Result<bool, ValidatorError> {
        self.lookups
            .borrow_mut()
            .push(frequent_flyer_number.to_string());
        if self.fail_lookups {
            return Err(ValidatorError::Unavailable("vendor timeout".to_string()));
        }
        Ok(self.answer)
    }

    fn license_key(&self) -> Result<String, ValidatorError> {
        self.license_reads.set(self.license_reads.get() + 1);
        Ok(self.license_key.clone())
    }

    fn validation_mode(&self) -> ValidationMode {
        self.mode
    }

    fn set_validation_mode(&mut self, mode: ValidationMode) {
        self.mode_writes.push(mode);
        self.mode = mode;
    }
}

pub(super) fn application(income: f64, age: i32, number: &str) -> CreditCardApplication {
    CreditCardApplication::new(income, age, number)
}

pub(super) fn evaluator(
    validator: &mut RecordingValidator,
) -> ApplicationEvaluator<&mut RecordingValidator> {
    ApplicationEvaluator::new(validator)
}
