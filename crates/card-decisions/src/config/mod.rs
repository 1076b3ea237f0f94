use crate::workflows::credit_card::EvaluationConfig;
use std::env;
use std::fmt;
use std::str::FromStr;

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub evaluation: EvaluationConfig,
    pub validator: ValidatorConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let defaults = EvaluationConfig::default();
        let evaluation = EvaluationConfig {
            auto_accept_income: parse_var(
                "CARD_AUTO_ACCEPT_INCOME",
                defaults.auto_accept_income,
            )?,
            low_income_threshold: parse_var(
                "CARD_LOW_INCOME_THRESHOLD",
                defaults.low_income_threshold,
            )?,
            minimum_age: parse_var("CARD_MINIMUM_AGE", defaults.minimum_age)?,
            detailed_lookup_age: parse_var(
                "CARD_DETAILED_LOOKUP_AGE",
                defaults.detailed_lookup_age,
            )?,
        };

        let license_key =
            env::var("CARD_VALIDATOR_LICENSE_KEY").unwrap_or_else(|_| "OK".to_string());
        let known_numbers = env::var("CARD_FREQUENT_FLYER_NUMBERS")
            .map(|raw| split_list(&raw))
            .unwrap_or_default();

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            evaluation,
            validator: ValidatorConfig {
                license_key,
                known_numbers,
            },
        })
    }
}

fn parse_var<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidNumber { key, value: raw }),
        Err(_) => Ok(default),
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect()
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Settings for the bundled in-memory frequent-flyer validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorConfig {
    pub license_key: String,
    pub known_numbers: Vec<String>,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidNumber { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidNumber { key, value } => {
                write!(f, "{key} must be numeric (got '{value}')")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
