//! Popover placement relative to an anchor rect.
//!
//! The arrow direction names where the arrow points: `UP` means the arrow
//! points up at the anchor, so the popover sits below it.

use bitflags::bitflags;
use ratatui::layout::Rect;

bitflags! {
    /// Arrow directions a popover may use.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ArrowDirections: u8 {
        /// Popover below the anchor.
        const UP    = 0b0001;
        /// Popover above the anchor.
        const DOWN  = 0b0010;
        /// Popover right of the anchor.
        const LEFT  = 0b0100;
        /// Popover left of the anchor.
        const RIGHT = 0b1000;
        const ANY   = Self::UP.bits() | Self::DOWN.bits() | Self::LEFT.bits() | Self::RIGHT.bits();
    }
}

/// How a presentation should adapt to the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PresentationStyle {
    /// A floating popover anchored to the element.
    #[default]
    Popover,
    /// A sheet covering the whole surface.
    FullScreen,
}

/// Hook deciding the presentation style for a given surface.
pub trait PresentationDelegate: std::fmt::Debug {
    fn adaptive_style(&self, surface: Rect) -> PresentationStyle;
}

/// Always present as a popover, even on narrow surfaces.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAdaptation;

impl PresentationDelegate for NoAdaptation {
    fn adaptive_style(&self, _surface: Rect) -> PresentationStyle {
        PresentationStyle::Popover
    }
}

/// Where a popover ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopoverPlacement {
    pub frame: Rect,
    /// Single arrow direction used, or empty when the popover was clamped
    /// without a side that fit
    pub arrow: ArrowDirections,
}

/// Place a popover of `width` x `height` next to `anchor` inside `surface`.
///
/// Sides are tried in the order below, above, right, left, restricted to
/// `permitted`. If none fits, the popover is centered on the anchor and
/// clamped into the surface.
pub fn place_popover(
    anchor: Rect,
    width: u16,
    height: u16,
    surface: Rect,
    permitted: ArrowDirections,
) -> PopoverPlacement {
    let width = width.min(surface.width);
    let height = height.min(surface.height);
    // An anchor left outside by a shrink still gets a popover on screen
    let anchor = clamp_anchor(anchor, surface);

    let centered_x = clamp_axis(
        center_start(anchor.x, anchor.width, width),
        width,
        surface.x,
        surface.width,
    );
    let centered_y = clamp_axis(
        center_start(anchor.y, anchor.height, height),
        height,
        surface.y,
        surface.height,
    );

    let room_below = surface.bottom().saturating_sub(anchor.bottom());
    let room_above = anchor.y.saturating_sub(surface.y);
    let room_right = surface.right().saturating_sub(anchor.right());
    let room_left = anchor.x.saturating_sub(surface.x);

    let candidates = [
        (ArrowDirections::UP, room_below >= height, centered_x, anchor.bottom()),
        (
            ArrowDirections::DOWN,
            room_above >= height,
            centered_x,
            anchor.y.saturating_sub(height),
        ),
        (ArrowDirections::LEFT, room_right >= width, anchor.right(), centered_y),
        (
            ArrowDirections::RIGHT,
            room_left >= width,
            anchor.x.saturating_sub(width),
            centered_y,
        ),
    ];

    for (arrow, fits, x, y) in candidates {
        let frame = Rect::new(x, y, width, height);
        if fits && permitted.contains(arrow) && is_inside(frame, surface) {
            return PopoverPlacement { frame, arrow };
        }
    }

    PopoverPlacement {
        frame: Rect::new(centered_x, centered_y, width, height),
        arrow: ArrowDirections::empty(),
    }
}

/// Start coordinate that centers `len` on the span `start..start + span`.
fn center_start(start: u16, span: u16, len: u16) -> u16 {
    let center = u32::from(start) + u32::from(span) / 2;
    center.saturating_sub(u32::from(len) / 2).min(u32::from(u16::MAX)) as u16
}

/// Pull `anchor` into `surface`, keeping at least one cell of it.
fn clamp_anchor(anchor: Rect, surface: Rect) -> Rect {
    let x = anchor
        .x
        .min(surface.right().saturating_sub(1))
        .max(surface.x);
    let y = anchor
        .y
        .min(surface.bottom().saturating_sub(1))
        .max(surface.y);
    let width = anchor.right().min(surface.right()).saturating_sub(x).max(1);
    let height = anchor.bottom().min(surface.bottom()).saturating_sub(y).max(1);
    Rect::new(x, y, width, height)
}

fn is_inside(frame: Rect, surface: Rect) -> bool {
    frame.x >= surface.x
        && frame.y >= surface.y
        && frame.right() <= surface.right()
        && frame.bottom() <= surface.bottom()
}

fn clamp_axis(pos: u16, len: u16, origin: u16, extent: u16) -> u16 {
    let max = origin.saturating_add(extent.saturating_sub(len));
    pos.max(origin).min(max)
}
