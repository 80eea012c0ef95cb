//! Field rules for color values.
//!
//! Validation happens in the API layer before anything reaches the store.
//! The store trusts what it is given and never re-checks values.
//!
//! Rules are checked in order and the first failure wins:
//!
//! 1. Blank (empty or whitespace-only)
//! 2. Shorter than the minimum length
//! 3. Longer than the maximum length
//!
//! Lengths count Unicode scalar values, not bytes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MIN_LENGTH: usize = 3;
pub const MAX_LENGTH: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationErrorKind {
    Blank,
    TooShort,
    TooLong,
}

/// A rejected value, with a message fit for showing next to the input field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    pub kind: ValidationErrorKind,
    pub message: String,
}

/// Length bounds applied to color values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationRules {
    pub min_length: usize,
    pub max_length: usize,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            min_length: MIN_LENGTH,
            max_length: MAX_LENGTH,
        }
    }
}

impl ValidationRules {
    pub fn new(min_length: usize, max_length: usize) -> Self {
        Self {
            min_length,
            max_length,
        }
    }

    pub fn validate(&self, hex: &str) -> Result<(), ValidationError> {
        let length = hex.chars().count();

        if hex.trim().is_empty() {
            return Err(ValidationError {
                kind: ValidationErrorKind::Blank,
                message: format!(
                    "Hex is required. Please enter a color of at least {} characters. Currently: {} characters.",
                    self.min_length, length
                ),
            });
        }

        if length < self.min_length {
            return Err(ValidationError {
                kind: ValidationErrorKind::TooShort,
                message: format!(
                    "Hex must be at least {} characters. Currently: {} characters.",
                    self.min_length, length
                ),
            });
        }

        if length > self.max_length {
            return Err(ValidationError {
                kind: ValidationErrorKind::TooLong,
                message: format!(
                    "Hex must be at most {} characters. Currently: {} characters.",
                    self.max_length, length
                ),
            });
        }

        Ok(())
    }
}

/// Validates against the default bounds.
pub fn validate(hex: &str) -> Result<(), ValidationError> {
    ValidationRules::default().validate(hex)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind_of(hex: &str) -> Option<ValidationErrorKind> {
        validate(hex).err().map(|e| e.kind)
    }

    #[test]
    fn boundaries() {
        assert_eq!(kind_of(&"a".repeat(2)), Some(ValidationErrorKind::TooShort));
        assert_eq!(kind_of(&"a".repeat(3)), None);
        assert_eq!(kind_of(&"a".repeat(100)), None);
        assert_eq!(kind_of(&"a".repeat(101)), Some(ValidationErrorKind::TooLong));
    }

    #[test]
    fn blank_wins_over_length() {
        assert_eq!(kind_of(""), Some(ValidationErrorKind::Blank));
        assert_eq!(kind_of("   "), Some(ValidationErrorKind::Blank));
        assert_eq!(kind_of("\t\n"), Some(ValidationErrorKind::Blank));
    }

    #[test]
    fn messages_carry_length_and_bound() {
        let err = validate("#f").unwrap_err();
        assert_eq!(
            err.message,
            "Hex must be at least 3 characters. Currently: 2 characters."
        );

        let err = validate(&"x".repeat(101)).unwrap_err();
        assert!(err.message.contains("100"));
        assert!(err.message.contains("101"));
        assert_eq!(err.to_string(), err.message);
    }

    #[test]
    fn counts_characters_not_bytes() {
        // three characters, nine bytes
        assert!(validate("ééé").is_ok());
        assert_eq!(
            ValidationRules::new(3, 4).validate("ééééé").unwrap_err().kind,
            ValidationErrorKind::TooLong
        );
    }

    #[test]
    fn custom_bounds() {
        let rules = ValidationRules::new(7, 7);
        assert!(rules.validate("#ff0000").is_ok());
        assert_eq!(
            rules.validate("#fff").unwrap_err().kind,
            ValidationErrorKind::TooShort
        );
    }
}
