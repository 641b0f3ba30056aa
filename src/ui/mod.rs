//! Terminal rendering for descriptions and the demo screen.
//!
//! Ratatui draws in call order, so the overlay is rendered last to sit on
//! top of every view.

pub mod demo;
mod popover;
mod theme;

pub use demo::{default_catalog, DemoScreen};
pub use popover::{render_overlay, render_popover};
pub use theme::{COLOR_ARROW, COLOR_BLUE_VIEW, COLOR_BORDER, COLOR_BUTTON, COLOR_DIM, COLOR_LABEL};
