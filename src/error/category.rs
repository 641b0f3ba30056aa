//! Error category classification for unified error handling.
//!
//! Categories decide how an error is reported: configuration mistakes are
//! shown to the developer at the call site, internal errors mean the
//! overlay cannot present anything at all.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Invalid preference values, bad environment settings.
    /// Indicates a mistake at the call site or in the config source.
    Configuration,

    /// Broken internal wiring, such as an overlay without a root controller.
    /// The overlay cannot present until it is rebuilt.
    Internal,

    /// Malformed data supplied from outside (catalog files).
    Data,

    /// OS-level failures (filesystem, terminal).
    System,
}

impl ErrorCategory {
    /// Returns true if the overlay cannot keep working after this error.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ErrorCategory::Internal)
    }

    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Configuration => "configuration",
            ErrorCategory::Internal => "internal",
            ErrorCategory::Data => "data",
            ErrorCategory::System => "system",
        }
    }

    /// Returns suggested recovery actions for this category.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Configuration => "Check the preference values passed at the call site",
            ErrorCategory::Internal => {
                "Recreate the overlay surface through its constructor"
            }
            ErrorCategory::Data => "Check the description catalog contents",
            ErrorCategory::System => "Check file permissions and terminal settings",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
