//! Terminal text measurement and word wrapping.
//!
//! Terminal cells have a fixed width regardless of bold or italic, so the
//! font only matters to the renderer, not to measurement.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::models::Font;
use crate::traits::TextMeasure;

/// [`TextMeasure`] for a monospace terminal grid.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalTextMeasure;

impl TextMeasure for TerminalTextMeasure {
    fn natural_width(&self, text: &str, _font: Font) -> u16 {
        let widest = text.lines().map(|line| line.width()).max().unwrap_or(0);
        widest.min(u16::MAX as usize) as u16
    }

    fn wrapped_height(&self, text: &str, max_width: u16, _font: Font) -> u16 {
        wrap_text(text, max_width).len().min(u16::MAX as usize) as u16
    }
}

/// Word-wrap `text` to `max_width` cells.
///
/// Explicit newlines start a new line. Words wider than `max_width` are
/// broken at character boundaries. Empty text produces no lines.
pub fn wrap_text(text: &str, max_width: u16) -> Vec<String> {
    let max_width = max_width.max(1) as usize;
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut current = String::new();
        let mut current_width = 0usize;

        for word in paragraph.split_whitespace() {
            let word_width = word.width();
            let sep = usize::from(!current.is_empty());

            if current_width + sep + word_width <= max_width {
                if sep == 1 {
                    current.push(' ');
                }
                current.push_str(word);
                current_width += sep + word_width;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }

            if word_width <= max_width {
                current.push_str(word);
                current_width = word_width;
                continue;
            }

            // Break an over-long word into chunks
            for ch in word.chars() {
                let ch_width = ch.width().unwrap_or(1);
                if current_width + ch_width > max_width && !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push(ch);
                current_width += ch_width;
            }
        }

        lines.push(current);
    }

    lines
}
