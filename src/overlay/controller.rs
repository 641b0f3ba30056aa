//! Popover controller: builds, sizes and places the description label.

use ratatui::layout::Rect;
use ratatui::style::Style;
use tracing::debug;

use super::placement::{
    place_popover, ArrowDirections, NoAdaptation, PresentationDelegate, PresentationStyle,
};
use crate::config::OverlayConfig;
use crate::models::{Font, PreferenceStore};
use crate::traits::{ElementId, TextMeasure};

/// The label a popover shows, styled at presentation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLabel {
    pub text: String,
    pub style: Style,
    pub font: Font,
    /// Width available to the text inside the padding
    pub text_width: u16,
    /// Wrapped height of the text
    pub text_height: u16,
}

/// The one popover currently on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopoverSession {
    pub anchor: ElementId,
    pub anchor_rect: Rect,
    pub label: RenderedLabel,
    pub frame: Rect,
    pub arrow: ArrowDirections,
    pub style: PresentationStyle,
}

impl PopoverSession {
    /// Check if a point is on the popover content.
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.frame.x && x < self.frame.right() && y >= self.frame.y && y < self.frame.bottom()
    }
}

/// What a tap on the overlay did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    /// Tap outside the popover; it was dismissed.
    Dismissed,
    /// Tap on the popover content; nothing happened.
    Consumed,
    /// No popover was showing.
    Ignored,
}

/// Size of a popover, padding included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopoverSize {
    pub width: u16,
    pub height: u16,
    pub text_width: u16,
    pub text_height: u16,
}

/// Root controller of the overlay surface.
#[derive(Debug)]
pub struct PopoverController {
    max_width_ratio: f64,
    horizontal_padding: u16,
    vertical_padding: u16,
    permitted_arrows: ArrowDirections,
    delegate: Box<dyn PresentationDelegate>,
    session: Option<PopoverSession>,
}

impl Default for PopoverController {
    fn default() -> Self {
        Self::new(&OverlayConfig::default())
    }
}

impl PopoverController {
    pub fn new(config: &OverlayConfig) -> Self {
        Self {
            max_width_ratio: config.max_width_ratio,
            horizontal_padding: config.horizontal_padding,
            vertical_padding: config.vertical_padding,
            permitted_arrows: ArrowDirections::ANY,
            delegate: Box::new(NoAdaptation),
            session: None,
        }
    }

    /// Replace the presentation delegate.
    pub fn with_delegate(mut self, delegate: Box<dyn PresentationDelegate>) -> Self {
        self.delegate = delegate;
        self
    }

    pub fn with_permitted_arrows(mut self, arrows: ArrowDirections) -> Self {
        self.permitted_arrows = arrows;
        self
    }

    pub fn session(&self) -> Option<&PopoverSession> {
        self.session.as_ref()
    }

    /// Compute the popover size for `text` on a surface `surface_width` wide.
    ///
    /// The text is as wide as it naturally is, up to the width ratio of the
    /// surface, then padding is added on top.
    pub fn measure(
        &self,
        text: &str,
        font: Font,
        surface_width: u16,
        measure: &dyn TextMeasure,
    ) -> PopoverSize {
        let max_text_width = (f64::from(surface_width) * self.max_width_ratio).floor() as u16;
        let text_width = measure.natural_width(text, font).min(max_text_width);
        let text_height = if text.is_empty() {
            0
        } else {
            measure.wrapped_height(text, max_text_width, font)
        };

        PopoverSize {
            width: text_width.saturating_add(self.horizontal_padding),
            height: text_height.saturating_add(self.vertical_padding),
            text_width,
            text_height,
        }
    }

    /// Build, size, place and present a popover for `anchor`.
    ///
    /// Replaces any existing session; the surface decides whether a
    /// presentation is allowed.
    pub fn present(
        &mut self,
        anchor: ElementId,
        anchor_rect: Rect,
        text: &str,
        preferences: &PreferenceStore,
        surface: Rect,
        measure: &dyn TextMeasure,
    ) -> &PopoverSession {
        let font = preferences.font();
        let size = self.measure(text, font, surface.width, measure);
        let style = self.delegate.adaptive_style(surface);

        let (frame, arrow) = match style {
            PresentationStyle::Popover => {
                let placement = place_popover(
                    anchor_rect,
                    size.width,
                    size.height,
                    surface,
                    self.permitted_arrows,
                );
                (placement.frame, placement.arrow)
            }
            PresentationStyle::FullScreen => (surface, ArrowDirections::empty()),
        };

        debug!(
            target: "viewdesc::overlay",
            anchor = %anchor,
            width = frame.width,
            height = frame.height,
            arrow = ?arrow,
            "Popover laid out"
        );

        let label = RenderedLabel {
            text: text.to_string(),
            style: preferences.label_style(),
            font,
            text_width: size.text_width,
            text_height: size.text_height,
        };

        self.session.insert(PopoverSession {
            anchor,
            anchor_rect,
            label,
            frame,
            arrow,
            style,
        })
    }

    /// Destroy the current label.
    pub fn dismiss(&mut self) -> Option<PopoverSession> {
        self.session.take()
    }

    /// Handle a tap anywhere on the root view.
    pub fn handle_tap(&mut self, x: u16, y: u16) -> TapOutcome {
        match &self.session {
            None => TapOutcome::Ignored,
            Some(session) if session.contains(x, y) => TapOutcome::Consumed,
            Some(_) => {
                self.session = None;
                TapOutcome::Dismissed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::TerminalTextMeasure;
    use crate::models::Preferences;
    use ratatui::style::Color;

    /// Fixed-width measure: every char is one unit, no wrapping logic.
    #[derive(Debug)]
    struct CharMeasure;

    impl TextMeasure for CharMeasure {
        fn natural_width(&self, text: &str, _font: Font) -> u16 {
            text.chars().count() as u16
        }

        fn wrapped_height(&self, text: &str, max_width: u16, _font: Font) -> u16 {
            let chars = text.chars().count() as u16;
            chars.div_ceil(max_width.max(1))
        }
    }

    #[derive(Debug)]
    struct AlwaysSheet;

    impl PresentationDelegate for AlwaysSheet {
        fn adaptive_style(&self, _surface: Rect) -> PresentationStyle {
            PresentationStyle::FullScreen
        }
    }

    // -------------------- Sizing Tests --------------------

    #[test]
    fn test_long_text_capped_at_ratio() {
        let controller = PopoverController::default();
        let text = "x".repeat(1000);
        let size = controller.measure(&text, Font::regular(), 320, &CharMeasure);
        assert_eq!(size.width, 240 + 20);
        assert_eq!(size.text_width, 240);
        // 1000 / 240 rounds up to 5 lines
        assert_eq!(size.height, 5 + 20);
    }

    #[test]
    fn test_short_text_uses_natural_width() {
        let controller = PopoverController::default();
        let size = controller.measure("Hello", Font::regular(), 320, &CharMeasure);
        assert_eq!(size.width, 5 + 20);
        assert_eq!(size.height, 1 + 20);
    }

    #[test]
    fn test_empty_text_is_padding_only() {
        let controller = PopoverController::default();
        let size = controller.measure("", Font::regular(), 320, &CharMeasure);
        assert_eq!(size.width, 20);
        assert_eq!(size.height, 20);
    }

    #[test]
    fn test_compact_padding() {
        let controller = PopoverController::new(&OverlayConfig::compact());
        let size = controller.measure("Tap to submit", Font::regular(), 80, &TerminalTextMeasure);
        assert_eq!(size.width, 13 + 4);
        assert_eq!(size.height, 1 + 2);
    }

    // -------------------- Presentation Tests --------------------

    #[test]
    fn test_present_creates_session() {
        let mut controller = PopoverController::new(&OverlayConfig::compact());
        let store = PreferenceStore::default();
        let surface = Rect::new(0, 0, 80, 24);
        let anchor = Rect::new(10, 2, 8, 1);

        let session = controller
            .present(ElementId(1), anchor, "Hi there", &store, surface, &TerminalTextMeasure)
            .clone();

        assert_eq!(session.anchor, ElementId(1));
        assert_eq!(session.arrow, ArrowDirections::UP);
        assert_eq!(session.frame.y, anchor.bottom());
        assert_eq!(session.label.text, "Hi there");
        assert_eq!(controller.session(), Some(&session));
    }

    #[test]
    fn test_label_uses_store_style() {
        let mut controller = PopoverController::new(&OverlayConfig::compact());
        let mut store = PreferenceStore::default();
        store.apply(&Preferences::new().with_text_color(Color::Yellow));
        let session = controller.present(
            ElementId(1),
            Rect::new(0, 0, 4, 1),
            "styled",
            &store,
            Rect::new(0, 0, 80, 24),
            &TerminalTextMeasure,
        );
        assert_eq!(session.label.style.fg, Some(Color::Yellow));
        assert_eq!(session.label.style.bg, None);
    }

    #[test]
    fn test_delegate_controls_style() {
        let mut controller =
            PopoverController::new(&OverlayConfig::compact()).with_delegate(Box::new(AlwaysSheet));
        let surface = Rect::new(0, 0, 40, 12);
        let session = controller.present(
            ElementId(1),
            Rect::new(0, 0, 4, 1),
            "sheet",
            &PreferenceStore::default(),
            surface,
            &TerminalTextMeasure,
        );
        assert_eq!(session.style, PresentationStyle::FullScreen);
        assert_eq!(session.frame, surface);
    }

    // -------------------- Tap Tests --------------------

    #[test]
    fn test_tap_outside_dismisses() {
        let mut controller = PopoverController::new(&OverlayConfig::compact());
        controller.present(
            ElementId(1),
            Rect::new(10, 2, 8, 1),
            "text",
            &PreferenceStore::default(),
            Rect::new(0, 0, 80, 24),
            &TerminalTextMeasure,
        );
        assert_eq!(controller.handle_tap(79, 23), TapOutcome::Dismissed);
        assert!(controller.session().is_none());
        assert_eq!(controller.handle_tap(79, 23), TapOutcome::Ignored);
    }

    #[test]
    fn test_tap_inside_is_consumed() {
        let mut controller = PopoverController::new(&OverlayConfig::compact());
        let frame = controller
            .present(
                ElementId(1),
                Rect::new(10, 2, 8, 1),
                "text",
                &PreferenceStore::default(),
                Rect::new(0, 0, 80, 24),
                &TerminalTextMeasure,
            )
            .frame;
        assert_eq!(controller.handle_tap(frame.x, frame.y), TapOutcome::Consumed);
        assert!(controller.session().is_some());
    }
}
