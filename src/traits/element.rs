//! Host element abstraction.
//!
//! The description registry never owns elements. It refers to them by
//! [`ElementId`] and reaches them through this trait when it needs to
//! attach or detach recognizers.

use std::fmt;

use ratatui::layout::Rect;

use crate::gesture::{GestureRecognizer, RecognizerId};

/// Opaque identity of a host element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u64);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "element#{}", self.0)
    }
}

/// An element that can carry a description.
///
/// # Example
///
/// ```ignore
/// use viewdesc::traits::Element;
///
/// fn arm<E: Element>(element: &mut E, recognizer: GestureRecognizer) {
///     element.set_interactive(true);
///     element.add_recognizer(recognizer);
/// }
/// ```
pub trait Element {
    fn id(&self) -> ElementId;

    /// Screen-space bounds, used to anchor the popover.
    fn bounds(&self) -> Rect;

    /// Whether the element receives pointer input.
    fn is_interactive(&self) -> bool;

    fn set_interactive(&mut self, interactive: bool);

    /// Attach a recognizer and return its id on this element.
    fn add_recognizer(&mut self, recognizer: GestureRecognizer) -> RecognizerId;

    /// Detach a recognizer. Returns it if it was attached.
    fn remove_recognizer(&mut self, id: RecognizerId) -> Option<GestureRecognizer>;

    /// Ids of all attached recognizers, in attach order.
    fn recognizer_ids(&self) -> Vec<RecognizerId>;

    fn recognizer(&self, id: RecognizerId) -> Option<&GestureRecognizer>;

    /// Number of attached recognizers that show descriptions.
    fn description_recognizer_count(&self) -> usize {
        self.recognizer_ids()
            .into_iter()
            .filter_map(|id| self.recognizer(id))
            .filter(|r| r.shows_description())
            .count()
    }
}
