//! Description registry keyed by element identity.

use std::collections::HashMap;

use crate::gesture::RecognizerId;
use crate::models::Description;
use crate::traits::ElementId;

/// A registered description and the recognizer that triggers it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub description: Description,
    pub recognizer: RecognizerId,
    /// Interactivity the element had before its first description
    pub prior_interactive: bool,
}

/// Maps element ids to their description binding.
///
/// One binding per element. The registry never touches elements itself;
/// the manager keeps element state in step with it.
#[derive(Debug, Default)]
pub struct DescriptionRegistry {
    bindings: HashMap<ElementId, Binding>,
}

impl DescriptionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the binding for `element`, returning the old one.
    pub fn insert(&mut self, element: ElementId, binding: Binding) -> Option<Binding> {
        self.bindings.insert(element, binding)
    }

    pub fn remove(&mut self, element: ElementId) -> Option<Binding> {
        self.bindings.remove(&element)
    }

    pub fn binding(&self, element: ElementId) -> Option<&Binding> {
        self.bindings.get(&element)
    }

    pub fn get(&self, element: ElementId) -> Option<&Description> {
        self.bindings.get(&element).map(|b| &b.description)
    }

    pub fn contains(&self, element: ElementId) -> bool {
        self.bindings.contains_key(&element)
    }

    /// Owned snapshot of every registered description.
    pub fn snapshot(&self) -> HashMap<ElementId, Description> {
        self.bindings
            .iter()
            .map(|(id, b)| (*id, b.description.clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn clear(&mut self) {
        self.bindings.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binding(text: &str, recognizer: u64) -> Binding {
        Binding {
            description: Description::new(text),
            recognizer: RecognizerId(recognizer),
            prior_interactive: false,
        }
    }

    #[test]
    fn test_insert_and_get() {
        let mut registry = DescriptionRegistry::new();
        assert!(registry.insert(ElementId(1), binding("hello", 1)).is_none());
        assert_eq!(registry.get(ElementId(1)).map(|d| d.text()), Some("hello"));
        assert!(registry.contains(ElementId(1)));
    }

    #[test]
    fn test_insert_overwrites() {
        let mut registry = DescriptionRegistry::new();
        registry.insert(ElementId(1), binding("one", 1));
        let old = registry.insert(ElementId(1), binding("two", 2));
        assert_eq!(old.map(|b| b.recognizer), Some(RecognizerId(1)));
        assert_eq!(registry.get(ElementId(1)).map(|d| d.text()), Some("two"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_unknown_element_is_none() {
        let registry = DescriptionRegistry::new();
        assert!(registry.get(ElementId(7)).is_none());
        assert!(registry.snapshot().is_empty());
    }

    #[test]
    fn test_remove_twice() {
        let mut registry = DescriptionRegistry::new();
        registry.insert(ElementId(1), binding("one", 1));
        assert!(registry.remove(ElementId(1)).is_some());
        assert!(registry.remove(ElementId(1)).is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut registry = DescriptionRegistry::new();
        registry.insert(ElementId(1), binding("one", 1));
        registry.insert(ElementId(2), binding("two", 2));
        let snapshot = registry.snapshot();
        registry.clear();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[&ElementId(2)].text(), "two");
    }
}
