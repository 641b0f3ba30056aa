//! Gesture recognition for description triggers.
//!
//! - [`TapCounter`] counts taps that land close together in time and space.
//! - [`GestureRecognizer`] turns pointer events into long-press or multi-tap
//!   gestures.

mod click;
mod recognizer;

pub use click::{TapCounter, DEFAULT_TAP_INTERVAL, DEFAULT_TAP_SLOP};
pub use recognizer::{
    GestureAction, GestureFired, GestureKind, GestureRecognizer, PointerEvent, PointerEventKind,
    RecognizerId, DEFAULT_LONG_PRESS,
};
