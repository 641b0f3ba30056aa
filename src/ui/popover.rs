//! Popover rendering
//!
//! Draws the overlay's current session on top of everything else:
//! 1. Clear the popover frame
//! 2. Draw the bordered block, filled with the label background if set
//! 3. Draw the wrapped label text, centered inside the padding
//! 4. Draw the arrow on the border facing the anchor

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, Clear, Widget},
};

use super::theme::{COLOR_ARROW, COLOR_BORDER};
use crate::measure::wrap_text;
use crate::overlay::{ArrowDirections, OverlaySurface, PopoverSession};

/// Render the overlay's popover, if one is showing.
pub fn render_overlay(buf: &mut Buffer, overlay: &OverlaySurface) {
    if !overlay.is_visible() {
        return;
    }
    if let Some(session) = overlay.session() {
        render_popover(buf, session);
    }
}

/// Render one popover session into `buf`.
pub fn render_popover(buf: &mut Buffer, session: &PopoverSession) {
    let frame = session.frame.intersection(buf.area);
    if frame.width < 2 || frame.height < 2 {
        return;
    }

    Clear.render(frame, buf);

    let fill = match session.label.style.bg {
        Some(bg) => Style::default().bg(bg),
        None => Style::default(),
    };
    Block::bordered()
        .border_style(Style::default().fg(COLOR_BORDER))
        .style(fill)
        .render(frame, buf);

    let text_area = text_area(frame, session.label.text_width, session.label.text_height);
    if !text_area.is_empty() {
        let lines = wrap_text(&session.label.text, session.label.text_width);
        for (row, line) in lines.iter().take(text_area.height as usize).enumerate() {
            buf.set_stringn(
                text_area.x,
                text_area.y + row as u16,
                line,
                text_area.width as usize,
                session.label.style,
            );
        }
    }

    draw_arrow(buf, frame, session.anchor_rect, session.arrow);
}

/// Center a `text_width` x `text_height` block inside the frame's border.
fn text_area(frame: Rect, text_width: u16, text_height: u16) -> Rect {
    let inner = Rect::new(
        frame.x + 1,
        frame.y + 1,
        frame.width.saturating_sub(2),
        frame.height.saturating_sub(2),
    );
    let width = text_width.min(inner.width);
    let height = text_height.min(inner.height);
    Rect::new(
        inner.x + (inner.width - width) / 2,
        inner.y + (inner.height - height) / 2,
        width,
        height,
    )
}

fn draw_arrow(buf: &mut Buffer, frame: Rect, anchor: Rect, arrow: ArrowDirections) {
    let anchor_cx = anchor.x.saturating_add(anchor.width / 2);
    let anchor_cy = anchor.y.saturating_add(anchor.height / 2);
    // Keep the arrow off the corners
    let x = anchor_cx.clamp(frame.x + 1, frame.right().saturating_sub(2).max(frame.x + 1));
    let y = anchor_cy.clamp(frame.y + 1, frame.bottom().saturating_sub(2).max(frame.y + 1));

    let (pos, glyph) = if arrow == ArrowDirections::UP {
        ((x, frame.y), '\u{25B2}')
    } else if arrow == ArrowDirections::DOWN {
        ((x, frame.bottom() - 1), '\u{25BC}')
    } else if arrow == ArrowDirections::LEFT {
        ((frame.x, y), '\u{25C0}')
    } else if arrow == ArrowDirections::RIGHT {
        ((frame.right() - 1, y), '\u{25B6}')
    } else {
        return;
    };

    if let Some(cell) = buf.cell_mut(pos) {
        cell.set_char(glyph).set_style(Style::default().fg(COLOR_ARROW));
    }
}
