//! Common test utilities for integration tests.
//!
//! This module provides a fixed-width text measure, mouse event builders
//! and a small builder for a manager plus view tree.
//!
//! # Example
//!
//! ```ignore
//! use common::{TestHarness, CharMeasure};
//!
//! let mut h = TestHarness::new(80, 24);
//! let id = h.add_view(10, 2, 8, 1);
//! ```

#![allow(dead_code)]

pub mod mocks;

pub use mocks::*;

use ratatui::layout::Rect;
use viewdesc::config::OverlayConfig;
use viewdesc::host::{View, ViewTree};
use viewdesc::manager::DescriptionManager;
use viewdesc::traits::ElementId;

/// A manager and a view tree sharing one screen.
#[derive(Debug)]
pub struct TestHarness {
    pub manager: DescriptionManager,
    pub tree: ViewTree,
}

impl TestHarness {
    /// Compact config on a `width` x `height` screen.
    pub fn new(width: u16, height: u16) -> Self {
        Self::with_config(OverlayConfig::compact(), width, height)
    }

    pub fn with_config(config: OverlayConfig, width: u16, height: u16) -> Self {
        let mut manager = DescriptionManager::init(config, CharMeasure);
        manager.resize(Rect::new(0, 0, width, height));
        Self {
            manager,
            tree: ViewTree::new(),
        }
    }

    /// Add a plain, non-interactive view.
    pub fn add_view(&mut self, x: u16, y: u16, width: u16, height: u16) -> ElementId {
        self.tree.add(View::new(Rect::new(x, y, width, height)))
    }

    /// Mutable access to a view that must exist.
    pub fn view_mut(&mut self, id: ElementId) -> &mut View {
        self.tree.get_mut(id).expect("view exists")
    }

    pub fn view(&self, id: ElementId) -> &View {
        self.tree.get(id).expect("view exists")
    }

    /// Attach `text` to `id` with the default long-press trigger.
    pub fn describe(&mut self, id: ElementId, text: &str) {
        let view = self.tree.get_mut(id).expect("view exists");
        self.manager.add_description(view, text);
    }

    /// Trigger the description of `id` directly.
    pub fn show(&mut self, id: ElementId) -> viewdesc::manager::TriggerOutcome {
        let view = self.tree.get(id).expect("view exists");
        self.manager.show_description(view)
    }

    /// Anchor of the visible popover, if any.
    pub fn anchor(&self) -> Option<ElementId> {
        self.manager.overlay().session().map(|s| s.anchor)
    }
}
