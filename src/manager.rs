//! The description manager: registry, preferences and overlay in one place.
//!
//! Create one with [`DescriptionManager::init`] at startup and pass it to
//! whatever needs to attach or trigger descriptions. There is no global
//! instance.

use std::collections::HashMap;

use ratatui::layout::Rect;
use tracing::{debug, error, info, warn};

use crate::config::OverlayConfig;
use crate::error::OverlayError;
use crate::gesture::{GestureAction, GestureKind, GestureRecognizer, RecognizerId};
use crate::models::{Description, DescriptionCatalog, PreferenceStore, Preferences, TriggerGesture};
use crate::overlay::{OverlaySurface, PopoverController, ShowOutcome};
use crate::registry::{Binding, DescriptionRegistry};
use crate::traits::{Element, ElementId, TextMeasure};

/// Proof that a description was attached to an element.
///
/// Pass it back to [`DescriptionManager::unbind`] to detach exactly that
/// binding. Handles become stale once the binding is replaced or removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DescriptionHandle {
    element: ElementId,
    recognizer: RecognizerId,
    prior_interactive: bool,
}

impl DescriptionHandle {
    pub fn element(&self) -> ElementId {
        self.element
    }

    pub fn recognizer(&self) -> RecognizerId {
        self.recognizer
    }

    /// Whether the element was interactive before any description.
    pub fn prior_interactive(&self) -> bool {
        self.prior_interactive
    }
}

/// What a trigger gesture led to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// The popover is on screen.
    Presented,
    /// Another popover was already showing.
    AlreadyPresenting,
    /// The element has no description.
    NotRegistered,
    /// The element's description is disabled.
    Disabled,
    /// The overlay could not present.
    Failed(OverlayError),
}

/// Owns every description and the overlay that shows them.
#[derive(Debug)]
pub struct DescriptionManager {
    config: OverlayConfig,
    registry: DescriptionRegistry,
    preferences: PreferenceStore,
    overlay: OverlaySurface,
    measure: Box<dyn TextMeasure>,
}

impl DescriptionManager {
    /// Create the manager.
    ///
    /// The overlay starts with no area. Chain [`with_area`](Self::with_area)
    /// or call [`resize`](Self::resize) with the screen size before the
    /// first trigger.
    pub fn init(config: OverlayConfig, measure: impl TextMeasure + 'static) -> Self {
        let mut preferences = PreferenceStore::default();
        preferences.apply(&config.initial_preferences);
        let overlay = OverlaySurface::new(Rect::default(), PopoverController::new(&config));

        info!(
            target: "viewdesc::manager",
            max_width_ratio = config.max_width_ratio,
            "Description manager initialized"
        );

        Self {
            config,
            registry: DescriptionRegistry::new(),
            preferences,
            overlay,
            measure: Box::new(measure),
        }
    }

    /// Cover `area` from the start.
    pub fn with_area(mut self, area: Rect) -> Self {
        self.overlay.resize(area);
        self
    }

    /// Dismiss any popover and drop all descriptions.
    ///
    /// Recognizers stay on elements the host did not unbind; they trigger
    /// nothing once the manager is gone.
    pub fn shutdown(mut self) {
        self.overlay.dismiss();
        let remaining = self.registry.len();
        self.registry.clear();
        info!(target: "viewdesc::manager", remaining, "Description manager shut down");
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    pub fn preferences(&self) -> &PreferenceStore {
        &self.preferences
    }

    pub fn overlay(&self) -> &OverlaySurface {
        &self.overlay
    }

    pub fn overlay_mut(&mut self) -> &mut OverlaySurface {
        &mut self.overlay
    }

    pub fn resize(&mut self, area: Rect) {
        self.overlay.resize(area);
    }

    // ========================================================================
    // Binding
    // ========================================================================

    /// Attach `description` to `element` and arm its trigger gesture.
    pub fn add_description<E: Element + ?Sized>(
        &mut self,
        element: &mut E,
        description: impl Into<Description>,
    ) -> DescriptionHandle {
        self.bind(element, description.into(), None)
    }

    /// Like [`add_description`](Self::add_description), also applying
    /// `preferences` to the shared preference store.
    pub fn add_description_with<E: Element + ?Sized>(
        &mut self,
        element: &mut E,
        description: impl Into<Description>,
        preferences: &Preferences,
    ) -> DescriptionHandle {
        self.bind(element, description.into(), Some(preferences))
    }

    /// Attach the catalog entry `name` to `element`.
    pub fn add_from_catalog<E: Element + ?Sized>(
        &mut self,
        element: &mut E,
        catalog: &DescriptionCatalog,
        name: &str,
    ) -> Option<DescriptionHandle> {
        match catalog.get(name) {
            Some(description) => Some(self.bind(element, description.clone(), None)),
            None => {
                debug!(target: "viewdesc::manager", name, "No catalog entry");
                None
            }
        }
    }

    fn bind<E: Element + ?Sized>(
        &mut self,
        element: &mut E,
        description: Description,
        preferences: Option<&Preferences>,
    ) -> DescriptionHandle {
        let id = element.id();
        let prior_interactive = match self.registry.binding(id) {
            Some(existing) => existing.prior_interactive,
            None => element.is_interactive(),
        };

        strip_description_recognizers(element);

        let gesture = description.gesture();
        let recognizer = element.add_recognizer(self.recognizer_for(gesture));
        element.set_interactive(true);

        if let Some(prefs) = preferences {
            self.preferences.apply(prefs);
        }

        let replaced = self
            .registry
            .insert(
                id,
                Binding {
                    description,
                    recognizer,
                    prior_interactive,
                },
            )
            .is_some();

        debug!(
            target: "viewdesc::manager",
            element = %id,
            gesture = %gesture,
            replaced,
            "Description added"
        );

        DescriptionHandle {
            element: id,
            recognizer,
            prior_interactive,
        }
    }

    fn recognizer_for(&self, gesture: TriggerGesture) -> GestureRecognizer {
        let kind = match gesture {
            TriggerGesture::LongPress => GestureKind::LongPress {
                min_duration: self.config.long_press,
            },
            TriggerGesture::DoubleTap => GestureKind::Tap { count: 2 },
        };
        GestureRecognizer::with_timing(
            kind,
            GestureAction::ShowDescription,
            self.config.double_tap_interval,
            self.config.tap_slop,
        )
    }

    /// Remove the description from `element`.
    ///
    /// Detaches description recognizers only; other recognizers stay. With
    /// `restore_interactivity`, the element gets back the interactivity it
    /// had before its first description. Returns false if there was nothing
    /// to remove.
    pub fn remove_description<E: Element + ?Sized>(
        &mut self,
        element: &mut E,
        restore_interactivity: bool,
    ) -> bool {
        let id = element.id();
        let removed = strip_description_recognizers(element);

        let Some(binding) = self.registry.remove(id) else {
            debug!(target: "viewdesc::manager", element = %id, "Nothing to remove");
            return removed > 0;
        };

        if restore_interactivity {
            element.set_interactive(binding.prior_interactive);
        }

        debug!(
            target: "viewdesc::manager",
            element = %id,
            recognizers = removed,
            "Description removed"
        );
        true
    }

    /// Detach the binding `handle` refers to.
    ///
    /// A stale handle, or one for a different element, is a no-op.
    pub fn unbind<E: Element + ?Sized>(&mut self, element: &mut E, handle: DescriptionHandle) -> bool {
        let current = self
            .registry
            .binding(handle.element)
            .map(|b| b.recognizer);
        if element.id() != handle.element || current != Some(handle.recognizer) {
            debug!(target: "viewdesc::manager", element = %handle.element, "Stale handle ignored");
            return false;
        }
        self.remove_description(element, true)
    }

    // ========================================================================
    // Lookup and preferences
    // ========================================================================

    pub fn get_description(&self, element: ElementId) -> Option<Description> {
        self.registry.get(element).cloned()
    }

    pub fn get_all_descriptions(&self) -> HashMap<ElementId, Description> {
        self.registry.snapshot()
    }

    /// Apply every set field of `preferences` to later presentations.
    pub fn set_preferences(&mut self, preferences: &Preferences) {
        self.preferences.apply(preferences);
        debug!(target: "viewdesc::manager", ?preferences, "Preferences updated");
    }

    // ========================================================================
    // Show and dismiss
    // ========================================================================

    /// Trigger callback: show the description of `sender`, if any.
    pub fn show_description<E: Element + ?Sized>(&mut self, sender: &E) -> TriggerOutcome {
        let id = sender.id();
        let Some(description) = self.registry.get(id) else {
            debug!(target: "viewdesc::manager", element = %id, "No description registered");
            return TriggerOutcome::NotRegistered;
        };
        if !description.is_enabled() {
            debug!(target: "viewdesc::manager", element = %id, "Description disabled");
            return TriggerOutcome::Disabled;
        }

        let result = self.overlay.show(
            id,
            sender.bounds(),
            description.text(),
            &self.preferences,
            self.measure.as_ref(),
        );

        match result {
            Ok(ShowOutcome::Presented) => TriggerOutcome::Presented,
            Ok(ShowOutcome::AlreadyPresenting) => TriggerOutcome::AlreadyPresenting,
            Err(err) => {
                if err.is_recoverable() {
                    warn!(
                        target: "viewdesc::manager",
                        code = err.error_code(),
                        element = %id,
                        "Cannot present description: {}", err
                    );
                } else {
                    error!(
                        target: "viewdesc::manager",
                        code = err.error_code(),
                        element = %id,
                        "Overlay misconfigured: {}", err
                    );
                }
                TriggerOutcome::Failed(err)
            }
        }
    }

    /// Dismiss the visible popover. Returns false if none was showing.
    pub fn dismiss(&mut self) -> bool {
        self.overlay.dismiss()
    }
}

/// Remove every description recognizer from `element`, iterating over a
/// snapshot of its recognizer ids. Returns how many were removed.
fn strip_description_recognizers<E: Element + ?Sized>(element: &mut E) -> usize {
    let mut removed = 0;
    for rid in element.recognizer_ids() {
        let is_description = element
            .recognizer(rid)
            .is_some_and(|r| r.shows_description());
        if is_description && element.remove_recognizer(rid).is_some() {
            removed += 1;
        }
    }
    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::View;
    use crate::measure::TerminalTextMeasure;
    use ratatui::style::Color;

    fn manager() -> DescriptionManager {
        let mut manager = DescriptionManager::init(OverlayConfig::compact(), TerminalTextMeasure);
        manager.resize(Rect::new(0, 0, 80, 24));
        manager
    }

    fn view(id: u64) -> View {
        let mut view = View::new(Rect::new(10, 2, 8, 1));
        view.assign_id(ElementId(id));
        view
    }

    #[test]
    fn test_with_area_presents_without_resize() {
        let mut manager = DescriptionManager::init(OverlayConfig::compact(), TerminalTextMeasure)
            .with_area(Rect::new(0, 0, 80, 24));
        let mut v = view(1);
        manager.add_description(&mut v, "ready");

        assert_eq!(manager.overlay().area(), Rect::new(0, 0, 80, 24));
        assert_eq!(manager.show_description(&v), TriggerOutcome::Presented);
    }

    #[test]
    fn test_add_then_get() {
        let mut manager = manager();
        let mut v = view(1);
        manager.add_description(&mut v, "hello");

        let desc = manager.get_description(ElementId(1)).unwrap();
        assert_eq!(desc.text(), "hello");
        assert_eq!(desc.gesture(), TriggerGesture::LongPress);
        assert!(desc.is_enabled());
        assert!(v.is_interactive());
        assert_eq!(v.description_recognizer_count(), 1);
    }

    #[test]
    fn test_readd_replaces_recognizer() {
        let mut manager = manager();
        let mut v = view(1);
        manager.add_description(&mut v, "one");
        manager.add_description(
            &mut v,
            Description::new("two").with_gesture(TriggerGesture::DoubleTap),
        );

        assert_eq!(manager.get_description(ElementId(1)).unwrap().text(), "two");
        assert_eq!(v.description_recognizer_count(), 1);
        let rid = v.recognizer_ids()[0];
        assert_eq!(
            v.recognizer(rid).map(|r| r.kind()),
            Some(GestureKind::Tap { count: 2 })
        );
    }

    #[test]
    fn test_remove_restores_prior_interactivity() {
        let mut manager = manager();
        let mut v = view(1);
        manager.add_description(&mut v, "one");
        manager.add_description(&mut v, "two");
        assert!(manager.remove_description(&mut v, true));
        assert!(!v.is_interactive());
        assert_eq!(v.description_recognizer_count(), 0);
        assert!(manager.get_description(ElementId(1)).is_none());
    }

    #[test]
    fn test_remove_without_restore_keeps_interactive() {
        let mut manager = manager();
        let mut v = view(1);
        manager.add_description(&mut v, "one");
        manager.remove_description(&mut v, false);
        assert!(v.is_interactive());
    }

    #[test]
    fn test_remove_keeps_host_recognizers() {
        let mut manager = manager();
        let mut v = view(1);
        let host = v.add_recognizer(GestureRecognizer::tap(1, GestureAction::Host(5)));
        manager.add_description(&mut v, "one");
        manager.remove_description(&mut v, true);
        assert_eq!(v.recognizer_ids(), vec![host]);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut manager = manager();
        let mut v = view(1);
        assert!(!manager.remove_description(&mut v, true));
        assert!(!manager.remove_description(&mut v, true));
        assert!(!v.is_interactive());
    }

    #[test]
    fn test_unbind_stale_handle() {
        let mut manager = manager();
        let mut v = view(1);
        let old = manager.add_description(&mut v, "one");
        let current = manager.add_description(&mut v, "two");

        assert!(!manager.unbind(&mut v, old));
        assert!(manager.get_description(ElementId(1)).is_some());

        assert!(manager.unbind(&mut v, current));
        assert!(manager.get_description(ElementId(1)).is_none());
    }

    #[test]
    fn test_unbind_wrong_element() {
        let mut manager = manager();
        let mut a = view(1);
        let mut b = view(2);
        let handle = manager.add_description(&mut a, "a");
        assert!(!manager.unbind(&mut b, handle));
        assert!(manager.get_description(ElementId(1)).is_some());
    }

    #[test]
    fn test_add_with_preferences_is_global() {
        let mut manager = manager();
        let mut v = view(1);
        manager.add_description_with(
            &mut v,
            "styled",
            &Preferences::new().with_background_color(Color::Blue),
        );
        assert_eq!(manager.preferences().background_color(), Some(Color::Blue));
    }

    #[test]
    fn test_show_unknown_sender() {
        let mut manager = manager();
        assert_eq!(manager.show_description(&view(9)), TriggerOutcome::NotRegistered);
        assert!(!manager.overlay().is_visible());
    }

    #[test]
    fn test_show_disabled() {
        let mut manager = manager();
        let mut v = view(1);
        manager.add_description(&mut v, Description::new("off").with_enabled(false));
        assert_eq!(manager.show_description(&v), TriggerOutcome::Disabled);
        assert!(!manager.overlay().is_visible());
    }

    #[test]
    fn test_single_popover() {
        let mut manager = manager();
        let mut a = view(1);
        let mut b = view(2);
        manager.add_description(&mut a, "a");
        manager.add_description(&mut b, "b");

        assert_eq!(manager.show_description(&a), TriggerOutcome::Presented);
        assert_eq!(manager.show_description(&b), TriggerOutcome::AlreadyPresenting);
        assert_eq!(
            manager.overlay().session().map(|s| s.anchor),
            Some(ElementId(1))
        );

        assert!(manager.dismiss());
        assert_eq!(manager.show_description(&b), TriggerOutcome::Presented);
    }

    #[test]
    fn test_root_missing_fails_without_panic() {
        let mut manager = manager();
        let mut v = view(1);
        manager.add_description(&mut v, "a");
        manager.overlay_mut().take_root();
        assert_eq!(
            manager.show_description(&v),
            TriggerOutcome::Failed(OverlayError::RootControllerMissing)
        );
    }

    #[test]
    fn test_add_from_catalog() {
        let mut manager = manager();
        let mut catalog = DescriptionCatalog::new();
        catalog.insert("button", "Tap to submit");
        let mut v = view(1);

        assert!(manager.add_from_catalog(&mut v, &catalog, "missing").is_none());
        assert!(manager.add_from_catalog(&mut v, &catalog, "button").is_some());
        assert_eq!(
            manager.get_description(ElementId(1)).map(|d| d.text().to_string()),
            Some("Tap to submit".to_string())
        );
    }

    #[test]
    fn test_initial_preferences_applied() {
        let config = OverlayConfig::compact()
            .with_initial_preferences(Preferences::new().with_text_color(Color::Green));
        let manager = DescriptionManager::init(config, TerminalTextMeasure);
        assert_eq!(manager.preferences().text_color(), Color::Green);
    }

    #[test]
    fn test_shutdown_dismisses() {
        let mut manager = manager();
        let mut v = view(1);
        manager.add_description(&mut v, "a");
        manager.show_description(&v);
        manager.shutdown();
    }
}
