//! View tree with hit testing and gesture dispatch.
//!
//! Views added later sit on top of views added earlier. Pointer events are
//! routed to the topmost interactive view under the pointer; once a press
//! starts on a view, the drag and release go to that same view.

use std::time::Instant;

use ratatui::layout::Rect;

use super::view::View;
use crate::gesture::{GestureFired, PointerEvent, PointerEventKind};
use crate::traits::{Element, ElementId};

/// Owns the views of the reference host.
#[derive(Debug, Default)]
pub struct ViewTree {
    /// All views (order matters for overlapping regions)
    views: Vec<View>,
    /// View that received the current press
    pressed: Option<ElementId>,
    next_id: u64,
}

impl ViewTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a view on top of the existing ones and return its id.
    pub fn add(&mut self, mut view: View) -> ElementId {
        self.next_id += 1;
        let id = ElementId(self.next_id);
        view.assign_id(id);
        self.views.push(view);
        id
    }

    /// Remove a view. Its recognizers go with it.
    pub fn remove(&mut self, id: ElementId) -> Option<View> {
        let index = self.views.iter().position(|v| v.id() == id)?;
        if self.pressed == Some(id) {
            self.pressed = None;
        }
        Some(self.views.remove(index))
    }

    pub fn get(&self, id: ElementId) -> Option<&View> {
        self.views.iter().find(|v| v.id() == id)
    }

    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut View> {
        self.views.iter_mut().find(|v| v.id() == id)
    }

    /// Views in z-order, bottom first.
    pub fn views(&self) -> &[View] {
        &self.views
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    /// Find the topmost interactive view containing the point.
    ///
    /// Non-interactive views let the pointer through to views below.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<ElementId> {
        self.views
            .iter()
            .rev()
            .find(|v| v.is_interactive() && v.contains(x, y))
            .map(|v| v.id())
    }

    /// Route a pointer event and return the gestures it completed.
    pub fn dispatch(&mut self, event: &PointerEvent) -> Vec<GestureFired> {
        let target = match event.kind {
            PointerEventKind::Down => {
                let hit = self.hit_test(event.position.x, event.position.y);
                self.pressed = hit;
                hit
            }
            PointerEventKind::Drag => self.pressed,
            PointerEventKind::Up => self.pressed.take(),
        };

        let Some(target) = target else {
            return Vec::new();
        };

        match self.get_mut(target) {
            Some(view) => view.dispatch(event),
            None => Vec::new(),
        }
    }

    /// Advance time for every view and return the gestures that completed.
    pub fn tick(&mut self, now: Instant) -> Vec<GestureFired> {
        self.views.iter_mut().flat_map(|v| v.tick(now)).collect()
    }

    /// Abandon the press in progress, if any.
    ///
    /// Used when something above the tree (such as the description overlay)
    /// takes over pointer input mid-gesture.
    pub fn cancel_press(&mut self) {
        if let Some(id) = self.pressed.take() {
            if let Some(view) = self.get_mut(id) {
                view.reset_recognizers();
            }
        }
    }

    /// Bounds of a view, if it exists.
    pub fn bounds_of(&self, id: ElementId) -> Option<Rect> {
        self.get(id).map(|v| v.bounds())
    }
}
