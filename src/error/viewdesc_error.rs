//! Unified error type for viewdesc.

use std::fmt;

use super::category::ErrorCategory;
use super::overlay::OverlayError;
use super::preference::{ConfigError, PreferenceError};
use crate::models::CatalogError;

/// Unified error type.
///
/// Only configuration and loading entry points return it. The annotation
/// API itself (add, remove, show, dismiss) never fails; errors it meets
/// are logged where they are detected.
#[derive(Debug)]
pub enum ViewDescError {
    /// Invalid preference value.
    Preference(PreferenceError),

    /// Invalid overlay configuration.
    Config(ConfigError),

    /// Overlay could not present.
    Overlay(OverlayError),

    /// Description catalog could not be loaded.
    Catalog(CatalogError),

    /// Filesystem or terminal failure.
    Io(std::io::Error),
}

impl ViewDescError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            ViewDescError::Preference(_) | ViewDescError::Config(_) => {
                ErrorCategory::Configuration
            }
            ViewDescError::Overlay(err) => {
                if err.is_recoverable() {
                    ErrorCategory::System
                } else {
                    ErrorCategory::Internal
                }
            }
            ViewDescError::Catalog(CatalogError::Read { .. }) => ErrorCategory::System,
            ViewDescError::Catalog(CatalogError::Parse(_)) => ErrorCategory::Data,
            ViewDescError::Io(_) => ErrorCategory::System,
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            ViewDescError::Preference(err) => err.user_message(),
            ViewDescError::Config(err) => err.user_message(),
            ViewDescError::Overlay(err) => err.user_message(),
            ViewDescError::Catalog(err) => format!("Could not load descriptions: {}", err),
            ViewDescError::Io(err) => format!("I/O error: {}", err),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ViewDescError::Preference(err) => err.error_code(),
            ViewDescError::Config(err) => err.error_code(),
            ViewDescError::Overlay(err) => err.error_code(),
            ViewDescError::Catalog(CatalogError::Read { .. }) => "E_CATALOG_READ",
            ViewDescError::Catalog(CatalogError::Parse(_)) => "E_CATALOG_PARSE",
            ViewDescError::Io(_) => "E_IO",
        }
    }

    /// Get the recovery hint for this error.
    pub fn recovery_hint(&self) -> &'static str {
        self.category().recovery_hint()
    }
}

impl fmt::Display for ViewDescError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewDescError::Preference(err) => write!(f, "{}", err),
            ViewDescError::Config(err) => write!(f, "{}", err),
            ViewDescError::Overlay(err) => write!(f, "{}", err),
            ViewDescError::Catalog(err) => write!(f, "{}", err),
            ViewDescError::Io(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ViewDescError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ViewDescError::Preference(err) => Some(err),
            ViewDescError::Config(err) => Some(err),
            ViewDescError::Overlay(err) => Some(err),
            ViewDescError::Catalog(err) => Some(err),
            ViewDescError::Io(err) => Some(err),
        }
    }
}

// ============================================================================
// From implementations for automatic error conversion
// ============================================================================

impl From<PreferenceError> for ViewDescError {
    fn from(err: PreferenceError) -> Self {
        ViewDescError::Preference(err)
    }
}

impl From<ConfigError> for ViewDescError {
    fn from(err: ConfigError) -> Self {
        ViewDescError::Config(err)
    }
}

impl From<OverlayError> for ViewDescError {
    fn from(err: OverlayError) -> Self {
        ViewDescError::Overlay(err)
    }
}

impl From<CatalogError> for ViewDescError {
    fn from(err: CatalogError) -> Self {
        ViewDescError::Catalog(err)
    }
}

impl From<std::io::Error> for ViewDescError {
    fn from(err: std::io::Error) -> Self {
        ViewDescError::Io(err)
    }
}
