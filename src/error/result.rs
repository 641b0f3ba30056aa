//! Result type alias for viewdesc operations.

use super::viewdesc_error::ViewDescError;

/// Type alias for Results using ViewDescError.
pub type ViewDescResult<T> = Result<T, ViewDescError>;
