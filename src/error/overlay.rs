//! Overlay surface error types.

use std::fmt;

/// Errors raised by the overlay surface while presenting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayError {
    /// The surface's root slot does not hold a popover controller.
    ///
    /// Cannot happen for a surface built through `OverlaySurface::new`
    /// unless the root was detached afterwards.
    RootControllerMissing,

    /// The surface has no area to present into (not sized yet).
    EmptySurface { width: u16, height: u16 },
}

impl OverlayError {
    /// Check if the overlay can present again without being rebuilt.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, OverlayError::RootControllerMissing)
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            OverlayError::RootControllerMissing => {
                "The description overlay is misconfigured and cannot show popovers.".to_string()
            }
            OverlayError::EmptySurface { .. } => {
                "The screen is too small to show a description.".to_string()
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            OverlayError::RootControllerMissing => "E_OVERLAY_ROOT",
            OverlayError::EmptySurface { .. } => "E_OVERLAY_EMPTY",
        }
    }
}

impl fmt::Display for OverlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverlayError::RootControllerMissing => {
                write!(f, "Overlay root controller is not a popover controller")
            }
            OverlayError::EmptySurface { width, height } => {
                write!(f, "Overlay surface has no area ({}x{})", width, height)
            }
        }
    }
}

impl std::error::Error for OverlayError {}
