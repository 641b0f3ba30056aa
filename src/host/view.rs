//! A rectangular terminal view that can carry gesture recognizers.

use ratatui::layout::Rect;
use ratatui::style::Color;

use crate::gesture::{GestureFired, GestureRecognizer, PointerEvent, RecognizerId};
use crate::traits::{Element, ElementId};

/// A view in the reference terminal host.
#[derive(Debug, Clone)]
pub struct View {
    id: ElementId,
    bounds: Rect,
    title: String,
    background: Color,
    interactive: bool,
    recognizers: Vec<(RecognizerId, GestureRecognizer)>,
    next_recognizer: u64,
}

impl View {
    /// Create a non-interactive view. The id is assigned when the view is
    /// added to a [`ViewTree`](super::ViewTree).
    pub fn new(bounds: Rect) -> Self {
        Self {
            id: ElementId(0),
            bounds,
            title: String::new(),
            background: Color::Reset,
            interactive: false,
            recognizers: Vec::new(),
            next_recognizer: 1,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    pub fn with_interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    /// Check if a point is within this view.
    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.bounds.x
            && x < self.bounds.x + self.bounds.width
            && y >= self.bounds.y
            && y < self.bounds.y + self.bounds.height
    }

    pub(crate) fn assign_id(&mut self, id: ElementId) {
        self.id = id;
    }

    /// Feed a pointer event to every recognizer and collect those that fired.
    pub(crate) fn dispatch(&mut self, event: &PointerEvent) -> Vec<GestureFired> {
        let sender = self.id;
        self.recognizers
            .iter_mut()
            .filter_map(|(id, rec)| {
                rec.handle(event).then(|| GestureFired {
                    sender,
                    recognizer: *id,
                    action: rec.action(),
                })
            })
            .collect()
    }

    pub(crate) fn tick(&mut self, now: std::time::Instant) -> Vec<GestureFired> {
        let sender = self.id;
        self.recognizers
            .iter_mut()
            .filter_map(|(id, rec)| {
                rec.tick(now).then(|| GestureFired {
                    sender,
                    recognizer: *id,
                    action: rec.action(),
                })
            })
            .collect()
    }

    pub(crate) fn reset_recognizers(&mut self) {
        for (_, rec) in &mut self.recognizers {
            rec.reset();
        }
    }
}

impl Element for View {
    fn id(&self) -> ElementId {
        self.id
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }

    fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    fn add_recognizer(&mut self, recognizer: GestureRecognizer) -> RecognizerId {
        let id = RecognizerId(self.next_recognizer);
        self.next_recognizer += 1;
        self.recognizers.push((id, recognizer));
        id
    }

    fn remove_recognizer(&mut self, id: RecognizerId) -> Option<GestureRecognizer> {
        let index = self.recognizers.iter().position(|(rid, _)| *rid == id)?;
        Some(self.recognizers.remove(index).1)
    }

    fn recognizer_ids(&self) -> Vec<RecognizerId> {
        self.recognizers.iter().map(|(id, _)| *id).collect()
    }

    fn recognizer(&self, id: RecognizerId) -> Option<&GestureRecognizer> {
        self.recognizers
            .iter()
            .find(|(rid, _)| *rid == id)
            .map(|(_, rec)| rec)
    }
}
