//! Trait abstractions over the host toolkit.
//!
//! The description core only talks to the host through these traits, which
//! keeps it testable without a terminal.
//!
//! # Traits
//!
//! - [`Element`] - An annotatable element with gesture recognizers
//! - [`TextMeasure`] - Text measurement for popover sizing

pub mod element;
pub mod measure;

pub use element::{Element, ElementId};
pub use measure::TextMeasure;
