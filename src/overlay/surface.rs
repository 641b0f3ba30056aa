//! The topmost overlay surface that hosts at most one popover.
//!
//! States: `Idle` (hidden, no popover) and `Presenting` (visible, one
//! anchor). `show` only works from `Idle`; `dismiss` returns to `Idle`.

use ratatui::layout::Rect;
use tracing::{debug, info};

use super::controller::{PopoverController, PopoverSession, TapOutcome};
use crate::error::OverlayError;
use crate::models::PreferenceStore;
use crate::traits::{ElementId, TextMeasure};

/// Surface state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SurfaceState {
    #[default]
    Idle,
    Presenting,
}

/// Result of a show request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowOutcome {
    /// A new popover is on screen.
    Presented,
    /// A popover was already showing; the request was dropped.
    AlreadyPresenting,
}

/// Full-screen transparent layer above all host content.
#[derive(Debug)]
pub struct OverlaySurface {
    area: Rect,
    visible: bool,
    state: SurfaceState,
    root: Option<PopoverController>,
}

impl OverlaySurface {
    /// Create a hidden surface covering `area` with `root` as its controller.
    pub fn new(area: Rect, root: PopoverController) -> Self {
        Self {
            area,
            visible: false,
            state: SurfaceState::Idle,
            root: Some(root),
        }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    /// Keep covering the whole screen after a resize.
    ///
    /// A popover laid out for the old area is dismissed; its frame and
    /// anchor no longer match what is on screen.
    pub fn resize(&mut self, area: Rect) {
        if area == self.area {
            return;
        }
        self.area = area;
        if self.dismiss() {
            debug!(
                target: "viewdesc::overlay",
                width = area.width,
                height = area.height,
                "Popover dismissed by resize"
            );
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn state(&self) -> SurfaceState {
        self.state
    }

    pub fn is_presenting(&self) -> bool {
        self.state == SurfaceState::Presenting
    }

    pub fn session(&self) -> Option<&PopoverSession> {
        self.root.as_ref().and_then(|root| root.session())
    }

    pub fn root(&self) -> Option<&PopoverController> {
        self.root.as_ref()
    }

    /// Detach the root controller, dismissing anything it was showing.
    pub fn take_root(&mut self) -> Option<PopoverController> {
        self.dismiss();
        self.root.take()
    }

    pub fn set_root(&mut self, root: PopoverController) {
        self.dismiss();
        self.root = Some(root);
    }

    /// Present `text` anchored to `anchor`.
    ///
    /// Dropped without error if a popover is already showing.
    pub fn show(
        &mut self,
        anchor: ElementId,
        anchor_rect: Rect,
        text: &str,
        preferences: &PreferenceStore,
        measure: &dyn TextMeasure,
    ) -> Result<ShowOutcome, OverlayError> {
        if self.state == SurfaceState::Presenting {
            debug!(target: "viewdesc::overlay", anchor = %anchor, "Show dropped, already presenting");
            return Ok(ShowOutcome::AlreadyPresenting);
        }

        let area = self.area;
        if area.is_empty() {
            return Err(OverlayError::EmptySurface {
                width: area.width,
                height: area.height,
            });
        }

        let root = self
            .root
            .as_mut()
            .ok_or(OverlayError::RootControllerMissing)?;

        root.present(anchor, anchor_rect, text, preferences, area, measure);
        self.visible = true;
        self.state = SurfaceState::Presenting;
        info!(target: "viewdesc::overlay", anchor = %anchor, "Popover presented");
        Ok(ShowOutcome::Presented)
    }

    /// Tear down the popover and hide the surface.
    ///
    /// Returns false if nothing was showing.
    pub fn dismiss(&mut self) -> bool {
        if self.state == SurfaceState::Idle {
            return false;
        }
        if let Some(root) = self.root.as_mut() {
            root.dismiss();
        }
        self.reset();
        info!(target: "viewdesc::overlay", "Popover dismissed");
        true
    }

    /// Route a tap on the surface.
    ///
    /// A hidden surface lets every tap through. A visible one dismisses on
    /// taps outside the popover and swallows taps on it.
    pub fn handle_tap(&mut self, x: u16, y: u16) -> TapOutcome {
        if !self.visible {
            return TapOutcome::Ignored;
        }
        let outcome = match self.root.as_mut() {
            Some(root) => root.handle_tap(x, y),
            None => TapOutcome::Ignored,
        };
        if outcome == TapOutcome::Dismissed {
            self.reset();
            info!(target: "viewdesc::overlay", x, y, "Popover dismissed by tap");
        }
        outcome
    }

    fn reset(&mut self) {
        self.visible = false;
        self.state = SurfaceState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OverlayConfig;
    use crate::measure::TerminalTextMeasure;

    fn surface() -> OverlaySurface {
        OverlaySurface::new(
            Rect::new(0, 0, 80, 24),
            PopoverController::new(&OverlayConfig::compact()),
        )
    }

    fn show(surface: &mut OverlaySurface, id: u64, text: &str) -> Result<ShowOutcome, OverlayError> {
        surface.show(
            ElementId(id),
            Rect::new(10, 2, 8, 1),
            text,
            &PreferenceStore::default(),
            &TerminalTextMeasure,
        )
    }

    #[test]
    fn test_starts_idle_and_hidden() {
        let surface = surface();
        assert_eq!(surface.state(), SurfaceState::Idle);
        assert!(!surface.is_visible());
        assert!(surface.session().is_none());
    }

    #[test]
    fn test_show_presents() {
        let mut surface = surface();
        assert_eq!(show(&mut surface, 1, "a"), Ok(ShowOutcome::Presented));
        assert!(surface.is_visible());
        assert!(surface.is_presenting());
        assert_eq!(surface.session().map(|s| s.anchor), Some(ElementId(1)));
    }

    #[test]
    fn test_second_show_is_dropped() {
        let mut surface = surface();
        show(&mut surface, 1, "a").unwrap();
        assert_eq!(show(&mut surface, 2, "b"), Ok(ShowOutcome::AlreadyPresenting));
        assert_eq!(surface.session().map(|s| s.anchor), Some(ElementId(1)));
        assert_eq!(surface.session().map(|s| s.label.text.as_str()), Some("a"));
    }

    #[test]
    fn test_dismiss_resets() {
        let mut surface = surface();
        show(&mut surface, 1, "a").unwrap();
        assert!(surface.dismiss());
        assert!(!surface.is_visible());
        assert!(surface.session().is_none());
        assert!(!surface.dismiss());
        assert_eq!(show(&mut surface, 2, "b"), Ok(ShowOutcome::Presented));
    }

    #[test]
    fn test_tap_outside_dismisses() {
        let mut surface = surface();
        show(&mut surface, 1, "a").unwrap();
        assert_eq!(surface.handle_tap(79, 23), TapOutcome::Dismissed);
        assert_eq!(surface.state(), SurfaceState::Idle);
        assert!(!surface.is_visible());
    }

    #[test]
    fn test_tap_on_hidden_surface_passes_through() {
        let mut surface = surface();
        assert_eq!(surface.handle_tap(5, 5), TapOutcome::Ignored);
    }

    #[test]
    fn test_missing_root_is_error() {
        let mut surface = surface();
        assert!(surface.take_root().is_some());
        assert_eq!(
            show(&mut surface, 1, "a"),
            Err(OverlayError::RootControllerMissing)
        );
        assert!(!surface.is_visible());

        surface.set_root(PopoverController::default());
        assert_eq!(show(&mut surface, 1, "a"), Ok(ShowOutcome::Presented));
    }

    #[test]
    fn test_empty_surface_is_error() {
        let mut surface = surface();
        surface.resize(Rect::new(0, 0, 0, 0));
        assert!(matches!(
            show(&mut surface, 1, "a"),
            Err(OverlayError::EmptySurface { .. })
        ));
    }

    #[test]
    fn test_resize_covers_new_area() {
        let mut surface = surface();
        surface.resize(Rect::new(0, 0, 120, 40));
        assert_eq!(surface.area(), Rect::new(0, 0, 120, 40));
    }

    #[test]
    fn test_resize_while_presenting_dismisses() {
        let mut surface = surface();
        show(&mut surface, 1, "a").unwrap();

        surface.resize(Rect::new(0, 0, 40, 12));

        assert_eq!(surface.state(), SurfaceState::Idle);
        assert!(!surface.is_visible());
        assert!(surface.session().is_none());
        assert_eq!(surface.handle_tap(0, 0), TapOutcome::Ignored);
    }

    #[test]
    fn test_resize_to_same_area_keeps_popover() {
        let mut surface = surface();
        show(&mut surface, 1, "a").unwrap();

        surface.resize(Rect::new(0, 0, 80, 24));

        assert!(surface.is_presenting());
        assert!(surface.session().is_some());
    }
}
