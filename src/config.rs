//! Validation policy.

use serde::{Deserialize, Serialize};

/// How strictly parsed references are validated.
///
/// Grammar failures are always errors. This only decides whether an unknown
/// book code or an ordering violation is fatal or merely logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Turn unknown book codes and ordering violations into errors.
    pub strict_validation: bool,
    /// Log unknown book codes when they are tolerated.
    pub report_book_code_errors: bool,
}

impl ValidationConfig {
    /// Log problems, construct the value anyway.
    pub fn lenient() -> Self {
        Self {
            strict_validation: false,
            report_book_code_errors: true,
        }
    }

    /// Fail on unknown book codes and ordering violations.
    pub fn strict() -> Self {
        Self {
            strict_validation: true,
            report_book_code_errors: true,
        }
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self::lenient()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_lenient() {
        let config = ValidationConfig::default();
        assert!(!config.strict_validation);
        assert!(config.report_book_code_errors);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: ValidationConfig =
            serde_json::from_str(r#"{ "strict_validation": true }"#).unwrap();
        assert_eq!(config, ValidationConfig::strict());
    }
}
