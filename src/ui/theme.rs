//! Color constants for the demo screen and popover chrome.

use ratatui::style::Color;

/// Popover border
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Arrow pointing at the anchor
pub const COLOR_ARROW: Color = Color::White;

/// Hint text in the demo footer
pub const COLOR_DIM: Color = Color::DarkGray;

/// Demo label text
pub const COLOR_LABEL: Color = Color::White;

/// Demo "blue view" fill
pub const COLOR_BLUE_VIEW: Color = Color::Rgb(0, 122, 204);

/// Demo button fill
pub const COLOR_BUTTON: Color = Color::Rgb(4, 181, 117);
