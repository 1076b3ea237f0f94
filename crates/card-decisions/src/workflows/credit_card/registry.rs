use std::collections::HashSet;

use tracing::trace;

use super::validator::{
    FrequentFlyerValidator, ServiceInformation, ValidationMode, ValidatorError,
};
use crate::config::ValidatorConfig;

/// In-memory validator backed by a fixed set of known frequent-flyer numbers.
///
/// A quick lookup is an exact match. A detailed lookup also ignores surrounding
/// whitespace and ASCII case.
#[derive(Debug, Clone)]
pub struct RegistryValidator {
    known_numbers: HashSet<String>,
    service_information: ServiceInformation,
    mode: ValidationMode,
}

impl RegistryValidator {
    pub fn new<I, S>(known_numbers: I, license_key: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            known_numbers: known_numbers.into_iter().map(Into::into).collect(),
            service_information: ServiceInformation::with_license_key(license_key),
            mode: ValidationMode::default(),
        }
    }

    pub fn from_config(config: &ValidatorConfig) -> Self {
        Self::new(
            config
                .known_numbers
                .iter()
                .filter(|number| !number.trim().is_empty())
                .cloned(),
            config.license_key.clone(),
        )
    }

    pub fn service_information(&self) -> &ServiceInformation {
        &self.service_information
    }

    pub fn known_count(&self) -> usize {
        self.known_numbers.len()
    }
}

impl FrequentFlyerValidator for RegistryValidator {
    fn is_valid(&self, frequent_flyer_number: &str) -> Result<bool, ValidatorError> {
        let recognised = match self.mode {
            ValidationMode::Quick => self.known_numbers.contains(frequent_flyer_number),
            ValidationMode::Detailed => {
                let candidate = frequent_flyer_number.trim();
                !candidate.is_empty()
                    && self
                        .known_numbers
                        .iter()
                        .any(|known| known.trim().eq_ignore_ascii_case(candidate))
            }
        };
        trace!(mode = self.mode.label(), recognised, "registry lookup");
        Ok(recognised)
    }

    fn license_key(&self) -> Result<String, ValidatorError> {
        Ok(self.service_information.license.license_key.clone())
    }

    fn validation_mode(&self) -> ValidationMode {
        self.mode
    }

    fn set_validation_mode(&mut self, mode: ValidationMode) {
        self.mode = mode;
    }
}
