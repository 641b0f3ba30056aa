//! Gesture recognizers fed by pointer events.
//!
//! A recognizer is attached to one element and only sees pointer events
//! that land on that element. When its gesture completes it reports that
//! it fired; the owner turns that into a [`GestureFired`] for dispatch.

use std::time::{Duration, Instant};

use ratatui::layout::Position;

use super::click::{TapCounter, DEFAULT_TAP_INTERVAL, DEFAULT_TAP_SLOP};
use crate::traits::ElementId;

/// Default hold time for a long press.
pub const DEFAULT_LONG_PRESS: Duration = Duration::from_millis(500);

/// Identifier of a recognizer attached to an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecognizerId(pub u64);

/// What a recognizer detects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureKind {
    /// Pointer held down for at least `min_duration` without moving away.
    LongPress { min_duration: Duration },
    /// `count` taps in quick succession.
    Tap { count: u8 },
}

/// What should happen when a recognizer fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureAction {
    /// Show the description registered for the sender.
    ShowDescription,
    /// Application-defined action code, passed back to the host.
    Host(u32),
}

/// Pointer event phases the recognizers care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Drag,
    Up,
}

/// A pointer event in screen cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub position: Position,
    pub at: Instant,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, x: u16, y: u16, at: Instant) -> Self {
        Self {
            kind,
            position: Position::new(x, y),
            at,
        }
    }

    pub fn down(x: u16, y: u16, at: Instant) -> Self {
        Self::new(PointerEventKind::Down, x, y, at)
    }

    pub fn up(x: u16, y: u16, at: Instant) -> Self {
        Self::new(PointerEventKind::Up, x, y, at)
    }

    pub fn drag(x: u16, y: u16, at: Instant) -> Self {
        Self::new(PointerEventKind::Drag, x, y, at)
    }
}

/// A completed gesture, ready for dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GestureFired {
    /// Element the recognizer is attached to
    pub sender: ElementId,
    pub recognizer: RecognizerId,
    pub action: GestureAction,
}

#[derive(Debug, Clone)]
enum RecognizerState {
    LongPress {
        pressed: Option<(Position, Instant)>,
        fired: bool,
    },
    Tap(TapCounter),
}

/// Detects one gesture kind on one element.
#[derive(Debug, Clone)]
pub struct GestureRecognizer {
    kind: GestureKind,
    action: GestureAction,
    slop: u16,
    state: RecognizerState,
}

impl GestureRecognizer {
    /// Long-press recognizer with the default hold time.
    pub fn long_press(action: GestureAction) -> Self {
        Self::new(
            GestureKind::LongPress {
                min_duration: DEFAULT_LONG_PRESS,
            },
            action,
        )
    }

    /// Tap recognizer requiring `count` taps.
    pub fn tap(count: u8, action: GestureAction) -> Self {
        Self::new(GestureKind::Tap { count }, action)
    }

    pub fn new(kind: GestureKind, action: GestureAction) -> Self {
        Self::with_timing(kind, action, DEFAULT_TAP_INTERVAL, DEFAULT_TAP_SLOP)
    }

    /// Create a recognizer with explicit tap interval and movement slop.
    ///
    /// A tap count of zero is treated as one.
    pub fn with_timing(
        kind: GestureKind,
        action: GestureAction,
        tap_interval: Duration,
        slop: u16,
    ) -> Self {
        let kind = match kind {
            GestureKind::Tap { count } => GestureKind::Tap {
                count: count.max(1),
            },
            other => other,
        };
        let state = match kind {
            GestureKind::LongPress { .. } => RecognizerState::LongPress {
                pressed: None,
                fired: false,
            },
            GestureKind::Tap { .. } => RecognizerState::Tap(TapCounter::new(tap_interval, slop)),
        };
        Self {
            kind,
            action,
            slop,
            state,
        }
    }

    pub fn kind(&self) -> GestureKind {
        self.kind
    }

    pub fn action(&self) -> GestureAction {
        self.action
    }

    /// True if this recognizer triggers description popovers.
    pub fn shows_description(&self) -> bool {
        self.action == GestureAction::ShowDescription
    }

    /// Feed a pointer event. Returns true if the gesture fired.
    pub fn handle(&mut self, event: &PointerEvent) -> bool {
        let slop = self.slop;
        match (&mut self.state, self.kind) {
            (
                RecognizerState::LongPress { pressed, fired },
                GestureKind::LongPress { min_duration },
            ) => match event.kind {
                PointerEventKind::Down => {
                    *pressed = Some((event.position, event.at));
                    *fired = false;
                    false
                }
                PointerEventKind::Drag => {
                    if let Some((origin, _)) = *pressed {
                        if !within_slop(origin, event.position, slop) {
                            *pressed = None;
                        }
                    }
                    false
                }
                PointerEventKind::Up => {
                    let held_long_enough = matches!(
                        *pressed,
                        Some((_, since)) if event.at.saturating_duration_since(since) >= min_duration
                    );
                    let fire = held_long_enough && !*fired;
                    *pressed = None;
                    *fired = false;
                    fire
                }
            },
            (RecognizerState::Tap(counter), GestureKind::Tap { count }) => {
                if event.kind != PointerEventKind::Down {
                    return false;
                }
                if counter.register_tap_at(event.position, event.at) >= count {
                    counter.reset();
                    true
                } else {
                    false
                }
            }
            _ => false,
        }
    }

    /// Advance time. A long press fires here once the hold time is reached,
    /// without waiting for the pointer to be released.
    pub fn tick(&mut self, now: Instant) -> bool {
        match (&mut self.state, self.kind) {
            (
                RecognizerState::LongPress { pressed, fired },
                GestureKind::LongPress { min_duration },
            ) => match *pressed {
                Some((_, since)) if !*fired && now.saturating_duration_since(since) >= min_duration => {
                    *fired = true;
                    true
                }
                _ => false,
            },
            _ => false,
        }
    }

    /// Drop any in-progress gesture.
    pub fn reset(&mut self) {
        match &mut self.state {
            RecognizerState::LongPress { pressed, fired } => {
                *pressed = None;
                *fired = false;
            }
            RecognizerState::Tap(counter) => counter.reset(),
        }
    }
}

fn within_slop(a: Position, b: Position, slop: u16) -> bool {
    a.x.abs_diff(b.x) <= slop && a.y.abs_diff(b.y) <= slop
}
