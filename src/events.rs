//! Terminal input routing for descriptions.
//!
//! Translates crossterm events into pointer events, gives the overlay first
//! pick while it is visible, and otherwise feeds the view tree and acts on
//! the gestures it completes.

use std::time::Instant;

use crossterm::event::{Event, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tracing::debug;

use crate::gesture::{GestureAction, GestureFired, PointerEvent, PointerEventKind};
use crate::host::ViewTree;
use crate::manager::{DescriptionManager, TriggerOutcome};
use crate::overlay::TapOutcome;

/// A completed gesture and what was done with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// A description trigger fired.
    Description {
        gesture: GestureFired,
        outcome: TriggerOutcome,
    },
    /// A host recognizer fired; the application handles it.
    Host(GestureFired),
}

/// What handling one terminal event did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    /// Not a pointer or resize event, or no view reacted.
    Ignored,
    /// The overlay covers the screen again.
    Resized,
    /// The visible overlay took the pointer event.
    Overlay(TapOutcome),
    /// Gestures completed on the view tree.
    Dispatched(Vec<Dispatch>),
}

/// Convert a crossterm mouse event into a pointer event.
///
/// Only the primary button takes part in gestures.
pub fn pointer_event(mouse: &MouseEvent, at: Instant) -> Option<PointerEvent> {
    let kind = match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => PointerEventKind::Down,
        MouseEventKind::Drag(MouseButton::Left) => PointerEventKind::Drag,
        MouseEventKind::Up(MouseButton::Left) => PointerEventKind::Up,
        _ => return None,
    };
    Some(PointerEvent::new(kind, mouse.column, mouse.row, at))
}

impl DescriptionManager {
    /// Handle one terminal event.
    pub fn handle_event(&mut self, event: &Event, tree: &mut ViewTree) -> EventOutcome {
        self.handle_event_at(event, tree, Instant::now())
    }

    /// Handle one terminal event as if it happened at `now`.
    pub fn handle_event_at(&mut self, event: &Event, tree: &mut ViewTree, now: Instant) -> EventOutcome {
        match event {
            Event::Resize(width, height) => {
                self.resize(Rect::new(0, 0, *width, *height));
                EventOutcome::Resized
            }
            Event::Mouse(mouse) => match pointer_event(mouse, now) {
                Some(pointer) => self.handle_pointer(&pointer, tree),
                None => EventOutcome::Ignored,
            },
            _ => EventOutcome::Ignored,
        }
    }

    /// Route a pointer event to the overlay or the view tree.
    pub fn handle_pointer(&mut self, pointer: &PointerEvent, tree: &mut ViewTree) -> EventOutcome {
        if self.overlay().is_visible() {
            // The overlay swallows drags and releases so nothing underneath
            // sees half a gesture.
            if pointer.kind != PointerEventKind::Down {
                return EventOutcome::Overlay(TapOutcome::Consumed);
            }
            let outcome = self
                .overlay_mut()
                .handle_tap(pointer.position.x, pointer.position.y);
            return EventOutcome::Overlay(outcome);
        }

        let fired = tree.dispatch(pointer);
        self.outcome_for(fired, tree)
    }

    /// Advance gesture timers, firing long presses that are still held.
    pub fn tick(&mut self, now: Instant, tree: &mut ViewTree) -> Vec<Dispatch> {
        if self.overlay().is_visible() {
            return Vec::new();
        }
        let fired = tree.tick(now);
        self.process_fired(fired, tree)
    }

    fn outcome_for(&mut self, fired: Vec<GestureFired>, tree: &mut ViewTree) -> EventOutcome {
        if fired.is_empty() {
            return EventOutcome::Ignored;
        }
        EventOutcome::Dispatched(self.process_fired(fired, tree))
    }

    fn process_fired(&mut self, fired: Vec<GestureFired>, tree: &mut ViewTree) -> Vec<Dispatch> {
        let mut dispatched = Vec::with_capacity(fired.len());

        for gesture in fired {
            match gesture.action {
                GestureAction::ShowDescription => {
                    let outcome = match tree.get(gesture.sender) {
                        Some(view) => self.show_description(view),
                        None => TriggerOutcome::NotRegistered,
                    };
                    if outcome == TriggerOutcome::Presented {
                        // The overlay owns the pointer from here on
                        tree.cancel_press();
                    }
                    debug!(
                        target: "viewdesc::events",
                        sender = %gesture.sender,
                        ?outcome,
                        "Description trigger"
                    );
                    dispatched.push(Dispatch::Description { gesture, outcome });
                }
                GestureAction::Host(code) => {
                    debug!(target: "viewdesc::events", sender = %gesture.sender, code, "Host gesture");
                    dispatched.push(Dispatch::Host(gesture));
                }
            }
        }

        dispatched
    }
}
