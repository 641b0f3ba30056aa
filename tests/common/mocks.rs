//! Test doubles for text measurement and input.

#![allow(dead_code)]

use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use viewdesc::models::Font;
use viewdesc::traits::TextMeasure;

/// One unit per character; wraps by plain division.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharMeasure;

impl TextMeasure for CharMeasure {
    fn natural_width(&self, text: &str, _font: Font) -> u16 {
        text.chars().count() as u16
    }

    fn wrapped_height(&self, text: &str, max_width: u16, _font: Font) -> u16 {
        let width = self.natural_width(text, Font::default());
        width.div_ceil(max_width.max(1)).max(1)
    }
}

fn mouse(kind: MouseEventKind, x: u16, y: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column: x,
        row: y,
        modifiers: KeyModifiers::NONE,
    })
}

pub fn mouse_down(x: u16, y: u16) -> Event {
    mouse(MouseEventKind::Down(MouseButton::Left), x, y)
}

pub fn mouse_up(x: u16, y: u16) -> Event {
    mouse(MouseEventKind::Up(MouseButton::Left), x, y)
}

pub fn mouse_drag(x: u16, y: u16) -> Event {
    mouse(MouseEventKind::Drag(MouseButton::Left), x, y)
}

pub fn right_click(x: u16, y: u16) -> Event {
    mouse(MouseEventKind::Down(MouseButton::Right), x, y)
}

/// `t0 + n` milliseconds.
pub fn after(t0: Instant, n: u64) -> Instant {
    t0 + Duration::from_millis(n)
}
