//! Preference and configuration error types.

use std::fmt;

use crate::models::PreferenceKind;

/// A preference value could not be applied.
///
/// Both variants are caller mistakes; they are returned to the code that
/// supplied the value instead of being coerced or dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreferenceError {
    /// The value has the wrong semantic type for its key.
    TypeMismatch {
        key: PreferenceKind,
        expected: &'static str,
        actual: &'static str,
    },

    /// The raw string is neither a font nor a color.
    InvalidValue { key: PreferenceKind, value: String },
}

impl PreferenceError {
    pub fn key(&self) -> PreferenceKind {
        match self {
            PreferenceError::TypeMismatch { key, .. } | PreferenceError::InvalidValue { key, .. } => {
                *key
            }
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            PreferenceError::TypeMismatch { key, expected, .. } => {
                format!("The '{}' preference needs a {} value.", key, expected)
            }
            PreferenceError::InvalidValue { key, value } => {
                format!("'{}' is not a valid value for '{}'.", value, key)
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            PreferenceError::TypeMismatch { .. } => "E_PREF_TYPE",
            PreferenceError::InvalidValue { .. } => "E_PREF_VALUE",
        }
    }
}

impl fmt::Display for PreferenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreferenceError::TypeMismatch {
                key,
                expected,
                actual,
            } => write!(
                f,
                "Preference '{}' expects a {} value, got a {}",
                key, expected, actual
            ),
            PreferenceError::InvalidValue { key, value } => {
                write!(f, "Invalid value '{}' for preference '{}'", value, key)
            }
        }
    }
}

impl std::error::Error for PreferenceError {}

/// An overlay configuration setting could not be read.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The value is not a number.
    InvalidNumber { variable: String, value: String },

    /// The number is outside the accepted range.
    OutOfRange {
        variable: String,
        value: f64,
        min: f64,
        max: f64,
    },
}

impl ConfigError {
    pub fn user_message(&self) -> String {
        match self {
            ConfigError::InvalidNumber { variable, .. } => {
                format!("{} must be a number.", variable)
            }
            ConfigError::OutOfRange {
                variable, min, max, ..
            } => format!("{} must be between {} and {}.", variable, min, max),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::InvalidNumber { .. } => "E_CONFIG_NUMBER",
            ConfigError::OutOfRange { .. } => "E_CONFIG_RANGE",
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidNumber { variable, value } => {
                write!(f, "{}: '{}' is not a number", variable, value)
            }
            ConfigError::OutOfRange {
                variable,
                value,
                min,
                max,
            } => write!(
                f,
                "{}: {} is outside the range {}..={}",
                variable, value, min, max
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
