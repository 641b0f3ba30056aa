//! viewdesc - attach descriptions to terminal UI elements and show them in
//! a popover when the user long-presses or double-taps the element.
//!
//! ```ignore
//! use viewdesc::prelude::*;
//!
//! let mut manager = DescriptionManager::init(OverlayConfig::compact(), TerminalTextMeasure);
//! manager.resize(screen);
//! let mut tree = ViewTree::new();
//! let button = tree.add(View::new(rect).with_title("Submit"));
//! if let Some(view) = tree.get_mut(button) {
//!     manager.add_description(view, Description::new("Tap to submit"));
//! }
//! // In the event loop:
//! manager.handle_event(&event, &mut tree);
//! manager.tick(Instant::now(), &mut tree);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod events;
pub mod gesture;
pub mod host;
pub mod logging;
pub mod manager;
pub mod measure;
pub mod models;
pub mod overlay;
pub mod prelude;
pub mod registry;
pub mod terminal;
pub mod traits;
pub mod ui;
