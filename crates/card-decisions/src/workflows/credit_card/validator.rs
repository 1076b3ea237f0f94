use serde::{Deserialize, Serialize};

/// License key value the vendor reports once the validator subscription lapses.
pub const EXPIRED_LICENSE_KEY: &str = "EXPIRED";

pub fn is_expired_license(license_key: &str) -> bool {
    license_key == EXPIRED_LICENSE_KEY
}

/// Lookup depth requested from the validator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    #[default]
    Quick,
    Detailed,
}

impl ValidationMode {
    pub fn label(&self) -> &'static str {
        match self {
            ValidationMode::Quick => "quick",
            ValidationMode::Detailed => "detailed",
        }
    }
}

/// License state published by the validator vendor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseInformation {
    pub license_key: String,
}

impl LicenseInformation {
    pub fn is_expired(&self) -> bool {
        is_expired_license(&self.license_key)
    }
}

/// Read-only service metadata exposed alongside the validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInformation {
    pub license: LicenseInformation,
}

impl ServiceInformation {
    pub fn with_license_key(license_key: impl Into<String>) -> Self {
        Self {
            license: LicenseInformation {
                license_key: license_key.into(),
            },
        }
    }
}

/// Vendor-provided frequent-flyer lookup consulted by the evaluator.
///
/// The license key is exposed through one flattened accessor instead of the vendor's
/// nested service/license objects. Implementations decide what the validation mode
/// changes about a lookup.
pub trait FrequentFlyerValidator {
    fn is_valid(&self, frequent_flyer_number: &str) -> Result<bool, ValidatorError>;
    fn license_key(&self) -> Result<String, ValidatorError>;
    fn validation_mode(&self) -> ValidationMode;
    fn set_validation_mode(&mut self, mode: ValidationMode);
}

impl<V: FrequentFlyerValidator + ?Sized> FrequentFlyerValidator for &mut V {
    fn is_valid(&self, frequent_flyer_number: &str) -> Result<bool, ValidatorError> {
        (**self).is_valid(frequent_flyer_number)
    }

    fn license_key(&self) -> Result<String, ValidatorError> {
        (**self).license_key()
    }

    fn validation_mode(&self) -> ValidationMode {
        (**self).validation_mode()
    }

    fn set_validation_mode(&mut self, mode: ValidationMode) {
        (**self).set_validation_mode(mode)
    }
}

impl<V: FrequentFlyerValidator + ?Sized> FrequentFlyerValidator for Box<V> {
    fn is_valid(&self, frequent_flyer_number: &str) -> Result<bool, ValidatorError> {
        (**self).is_valid(frequent_flyer_number)
    }

    fn license_key(&self) -> Result<String, ValidatorError> {
        (**self).license_key()
    }

    fn validation_mode(&self) -> ValidationMode {
        (**self).validation_mode()
    }

    fn set_validation_mode(&mut self, mode: ValidationMode) {
        (**self).set_validation_mode(mode)
    }
}

/// Faults raised by a validator implementation. The evaluator never handles these.
#[derive(Debug, thiserror::Error)]
pub enum ValidatorError {
    #[error("validator service unavailable: {0}")]
    Unavailable(String),
    #[error("validator rejected the lookup: {reason}")]
    Rejected { reason: String },
}
