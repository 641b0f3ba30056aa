//! Demo screen: a label, a blue view and a button, each with a description.
//!
//! Long-press the label or the blue view, or double-tap the button, to see
//! its description. A single tap on the button counts as a press.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Paragraph, Widget},
};

use super::popover::render_overlay;
use super::theme::{COLOR_BLUE_VIEW, COLOR_BUTTON, COLOR_DIM, COLOR_LABEL};
use crate::events::Dispatch;
use crate::gesture::{GestureAction, GestureRecognizer};
use crate::host::{View, ViewTree};
use crate::manager::DescriptionManager;
use crate::models::{Description, DescriptionCatalog, TriggerGesture};
use crate::traits::{Element, ElementId};

/// Catalog key for the label.
pub const LABEL_KEY: &str = "label";
/// Catalog key for the blue view.
pub const BLUE_VIEW_KEY: &str = "blue_view";
/// Catalog key for the button.
pub const BUTTON_KEY: &str = "button";

/// Host action code for a button press.
pub const BUTTON_PRESS: u32 = 1;

/// Descriptions used when no catalog file is given.
pub fn default_catalog() -> DescriptionCatalog {
    let mut catalog = DescriptionCatalog::new();
    catalog.insert(
        LABEL_KEY,
        "This label will show all the amazing things you can do here",
    );
    catalog.insert(BLUE_VIEW_KEY, "This is a big blue view");
    catalog.insert(
        BUTTON_KEY,
        Description::new("Tap to submit").with_gesture(TriggerGesture::DoubleTap),
    );
    catalog
}

/// The demo's views and their state.
#[derive(Debug)]
pub struct DemoScreen {
    pub tree: ViewTree,
    pub label: ElementId,
    pub blue_view: ElementId,
    pub button: ElementId,
    presses: u32,
}

impl DemoScreen {
    /// Build the screen inside `area` and attach descriptions from `catalog`.
    ///
    /// Entries missing from `catalog` fall back to [`default_catalog`].
    pub fn new(
        area: Rect,
        manager: &mut DescriptionManager,
        catalog: Option<&DescriptionCatalog>,
    ) -> Self {
        let [label_area, blue_area, button_area, _] = layout(area);
        let mut tree = ViewTree::new();

        let label = tree.add(View::new(label_area).with_title("Welcome"));
        let blue_view = tree.add(View::new(blue_area).with_background(COLOR_BLUE_VIEW));
        let button = tree.add(
            View::new(button_area)
                .with_title("Submit")
                .with_background(COLOR_BUTTON)
                .with_interactive(true),
        );
        if let Some(view) = tree.get_mut(button) {
            view.add_recognizer(GestureRecognizer::tap(1, GestureAction::Host(BUTTON_PRESS)));
        }

        let defaults = default_catalog();
        for (id, key) in [(label, LABEL_KEY), (blue_view, BLUE_VIEW_KEY), (button, BUTTON_KEY)] {
            let source = match catalog {
                Some(catalog) if catalog.get(key).is_some() => catalog,
                _ => &defaults,
            };
            if let Some(view) = tree.get_mut(id) {
                manager.add_from_catalog(view, source, key);
            }
        }

        Self {
            tree,
            label,
            blue_view,
            button,
            presses: 0,
        }
    }

    pub fn presses(&self) -> u32 {
        self.presses
    }

    /// Lay the views out again for a new screen size.
    pub fn resize(&mut self, area: Rect) {
        let [label_area, blue_area, button_area, _] = layout(area);
        for (id, rect) in [
            (self.label, label_area),
            (self.blue_view, blue_area),
            (self.button, button_area),
        ] {
            if let Some(view) = self.tree.get_mut(id) {
                view.set_bounds(rect);
            }
        }
    }

    /// React to gestures the manager passed back.
    pub fn apply(&mut self, dispatched: &[Dispatch]) {
        for dispatch in dispatched {
            if let Dispatch::Host(fired) = dispatch {
                if fired.sender == self.button && fired.action == GestureAction::Host(BUTTON_PRESS)
                {
                    self.presses += 1;
                }
            }
        }
    }

    /// Draw the views, then the footer, then the overlay on top.
    pub fn render(&self, area: Rect, buf: &mut Buffer, manager: &DescriptionManager) {
        for view in self.tree.views() {
            render_view(view, view.id() == self.button, buf);
        }

        let [.., footer] = layout(area);
        let hint = format!(
            "long-press label or blue view, double-tap button | presses: {} | q quits",
            self.presses
        );
        Paragraph::new(Line::from(hint))
            .style(Style::default().fg(COLOR_DIM))
            .render(footer, buf);

        render_overlay(buf, manager.overlay());
    }
}

fn layout(area: Rect) -> [Rect; 4] {
    let [label, _, blue, _, button_row, _, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area.inner(ratatui::layout::Margin::new(2, 1)));

    let [blue] = Layout::horizontal([Constraint::Percentage(60)])
        .flex(Flex::Start)
        .areas(blue);
    let [button] = Layout::horizontal([Constraint::Length(14)])
        .flex(Flex::Center)
        .areas(button_row);
    [label, blue, button, footer]
}

fn render_view(view: &View, bordered: bool, buf: &mut Buffer) {
    let area = view.bounds().intersection(buf.area);
    if area.is_empty() {
        return;
    }
    let style = Style::default().bg(view.background());

    if bordered {
        Paragraph::new(Line::from(view.title()).centered())
            .style(style.add_modifier(Modifier::BOLD))
            .block(Block::bordered().style(style))
            .render(area, buf);
    } else {
        Paragraph::new(view.title())
            .style(style.fg(COLOR_LABEL))
            .render(area, buf);
    }
}
