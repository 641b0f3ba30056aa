//! Text measurement abstraction.

use crate::models::Font;

/// Measures text the way the host renders it.
///
/// Widths and heights are in host units (cells for a terminal host).
pub trait TextMeasure: std::fmt::Debug {
    /// Width of the widest line, without any wrapping.
    fn natural_width(&self, text: &str, font: Font) -> u16;

    /// Height of `text` once wrapped to `max_width`.
    fn wrapped_height(&self, text: &str, max_width: u16, font: Font) -> u16;
}

impl<T: TextMeasure + ?Sized> TextMeasure for Box<T> {
    fn natural_width(&self, text: &str, font: Font) -> u16 {
        (**self).natural_width(text, font)
    }

    fn wrapped_height(&self, text: &str, max_width: u16, font: Font) -> u16 {
        (**self).wrapped_height(text, max_width, font)
    }
}
