//! Description overlay: the surface, its popover controller and placement.
//!
//! ```text
//! OverlaySurface (full screen, topmost)
//!   └── PopoverController (root)
//!         └── PopoverSession (label + frame, at most one)
//! ```

mod controller;
pub mod placement;
mod surface;

pub use controller::{
    PopoverController, PopoverSession, PopoverSize, RenderedLabel, TapOutcome,
};
pub use placement::{
    place_popover, ArrowDirections, NoAdaptation, PopoverPlacement, PresentationDelegate,
    PresentationStyle,
};
pub use surface::{OverlaySurface, ShowOutcome, SurfaceState};
