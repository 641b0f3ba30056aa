//! Prelude module for convenient imports.
//!
//! ```ignore
//! use viewdesc::prelude::*;
//! ```
//!
//! This will import:
//! - The manager and its outcomes (DescriptionManager, DescriptionHandle, TriggerOutcome)
//! - Model types (Description, TriggerGesture, Preferences, Font)
//! - The reference host (View, ViewTree) and the Element trait
//! - Configuration and errors

// Manager
pub use crate::manager::{DescriptionHandle, DescriptionManager, TriggerOutcome};

// Model types
pub use crate::models::{
    Description, DescriptionCatalog, Font, PreferenceKind, PreferenceStore, Preferences,
    TriggerGesture,
};

// Host
pub use crate::host::{View, ViewTree};
pub use crate::measure::TerminalTextMeasure;
pub use crate::traits::{Element, ElementId, TextMeasure};

// Events and overlay
pub use crate::events::{Dispatch, EventOutcome};
pub use crate::overlay::{ShowOutcome, TapOutcome};

// Configuration and errors
pub use crate::config::OverlayConfig;
pub use crate::error::{ViewDescError, ViewDescResult};
