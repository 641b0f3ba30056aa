//! Error handling for viewdesc.
//!
//! - **Error Categories**: how an error should be reported
//! - **Domain Errors**: preference, config and overlay errors
//! - **Unified Error Type**: `ViewDescError` wraps all of them
//! - **Result Type Alias**: `ViewDescResult<T>`
//!
//! | Category | Raised by | Fatal |
//! |----------|-----------|-------|
//! | Configuration | Preference parsing, env config | No |
//! | Internal | Overlay without a root controller | Yes |
//! | Data | Malformed catalog JSON | No |
//! | System | Filesystem, unsized surface | No |
//!
//! A lookup for an element without a description is not an error
//! anywhere in the crate; it is an `Option::None`.

mod category;
mod overlay;
mod preference;
mod result;
mod viewdesc_error;

pub use category::ErrorCategory;
pub use overlay::OverlayError;
pub use preference::{ConfigError, PreferenceError};
pub use result::ViewDescResult;
pub use viewdesc_error::ViewDescError;
