//! Presentation preferences for description popovers.
//!
//! [`Preferences`] is a partial update: each field is independently optional
//! and only the fields that are set get applied to the [`PreferenceStore`].
//! The store holds the values every new popover is styled from.
//!
//! Configuration sources that only have strings (environment variables,
//! config files) go through [`Preferences::from_pairs`], which checks that
//! each value has the semantic type its key expects.

use std::str::FromStr;

use ratatui::style::{Color, Modifier, Style};

use crate::error::PreferenceError;

// ============================================================================
// Font
// ============================================================================

/// Text face used for the popover label.
///
/// A terminal has no font sizes, so a font is the set of emphasis
/// attributes applied to the label text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Font {
    pub bold: bool,
    pub italic: bool,
    pub underlined: bool,
}

impl Font {
    /// Plain text, the system default.
    pub fn regular() -> Self {
        Self::default()
    }

    pub fn bold() -> Self {
        Self {
            bold: true,
            ..Self::default()
        }
    }

    pub fn italic() -> Self {
        Self {
            italic: true,
            ..Self::default()
        }
    }

    pub fn with_underline(mut self) -> Self {
        self.underlined = true;
        self
    }

    /// Modifiers to apply to a ratatui style.
    pub fn modifier(&self) -> Modifier {
        let mut modifier = Modifier::empty();
        if self.bold {
            modifier |= Modifier::BOLD;
        }
        if self.italic {
            modifier |= Modifier::ITALIC;
        }
        if self.underlined {
            modifier |= Modifier::UNDERLINED;
        }
        modifier
    }
}

/// Error returned when a string is not a font spec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFontError(pub String);

impl std::fmt::Display for ParseFontError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown font attribute '{}'", self.0)
    }
}

impl std::error::Error for ParseFontError {}

impl FromStr for Font {
    type Err = ParseFontError;

    /// Parse specs such as `regular`, `bold`, `bold+italic` or `italic underlined`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut font = Font::regular();
        let mut seen = false;
        for token in s.split(|c: char| c == '+' || c == ',' || c.is_whitespace()) {
            if token.is_empty() {
                continue;
            }
            seen = true;
            match token.to_ascii_lowercase().as_str() {
                "regular" | "normal" | "system" => {}
                "bold" => font.bold = true,
                "italic" => font.italic = true,
                "underline" | "underlined" => font.underlined = true,
                _ => return Err(ParseFontError(token.to_string())),
            }
        }
        if !seen {
            return Err(ParseFontError(s.to_string()));
        }
        Ok(font)
    }
}

// ============================================================================
// Loosely-typed keys and values
// ============================================================================

/// Key naming one preference field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreferenceKind {
    Font,
    TextColor,
    BackgroundColor,
}

impl PreferenceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PreferenceKind::Font => "font",
            PreferenceKind::TextColor => "text_color",
            PreferenceKind::BackgroundColor => "background_color",
        }
    }

    /// Name of the value type this key accepts.
    pub fn expected_type(&self) -> &'static str {
        match self {
            PreferenceKind::Font => "font",
            PreferenceKind::TextColor | PreferenceKind::BackgroundColor => "color",
        }
    }
}

impl std::fmt::Display for PreferenceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A preference value whose type is only known at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceValue {
    Font(Font),
    Color(Color),
}

impl PreferenceValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            PreferenceValue::Font(_) => "font",
            PreferenceValue::Color(_) => "color",
        }
    }
}

impl From<Font> for PreferenceValue {
    fn from(font: Font) -> Self {
        PreferenceValue::Font(font)
    }
}

impl From<Color> for PreferenceValue {
    fn from(color: Color) -> Self {
        PreferenceValue::Color(color)
    }
}

// ============================================================================
// Preferences (partial update)
// ============================================================================

/// Partial set of presentation preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Preferences {
    pub font: Option<Font>,
    pub text_color: Option<Color>,
    pub background_color: Option<Color>,
}

impl Preferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_font(mut self, font: Font) -> Self {
        self.font = Some(font);
        self
    }

    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = Some(color);
        self
    }

    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    /// True if no field is set.
    pub fn is_empty(&self) -> bool {
        self.font.is_none() && self.text_color.is_none() && self.background_color.is_none()
    }

    /// Set one field from a runtime-typed value.
    ///
    /// Fails if the value's type does not match what the key expects.
    pub fn set(
        &mut self,
        kind: PreferenceKind,
        value: impl Into<PreferenceValue>,
    ) -> Result<(), PreferenceError> {
        match (kind, value.into()) {
            (PreferenceKind::Font, PreferenceValue::Font(font)) => self.font = Some(font),
            (PreferenceKind::TextColor, PreferenceValue::Color(color)) => {
                self.text_color = Some(color)
            }
            (PreferenceKind::BackgroundColor, PreferenceValue::Color(color)) => {
                self.background_color = Some(color)
            }
            (kind, value) => {
                return Err(PreferenceError::TypeMismatch {
                    key: kind,
                    expected: kind.expected_type(),
                    actual: value.type_name(),
                })
            }
        }
        Ok(())
    }

    /// Build preferences from string pairs such as `(TextColor, "yellow")`.
    ///
    /// Later pairs overwrite earlier ones for the same key.
    pub fn from_pairs(pairs: &[(PreferenceKind, &str)]) -> Result<Self, PreferenceError> {
        let mut prefs = Preferences::new();
        for (kind, raw) in pairs {
            let value = parse_value(*kind, raw)?;
            prefs.set(*kind, value)?;
        }
        Ok(prefs)
    }
}

/// Parse a raw string for `kind`.
///
/// A string that parses as the other value type is reported as a type
/// mismatch rather than an unparseable value.
fn parse_value(kind: PreferenceKind, raw: &str) -> Result<PreferenceValue, PreferenceError> {
    let raw = raw.trim();
    let as_font = raw.parse::<Font>().ok().map(PreferenceValue::Font);
    let as_color = raw.parse::<Color>().ok().map(PreferenceValue::Color);

    let (wanted, other) = match kind {
        PreferenceKind::Font => (as_font, as_color),
        PreferenceKind::TextColor | PreferenceKind::BackgroundColor => (as_color, as_font),
    };

    match (wanted, other) {
        (Some(value), _) => Ok(value),
        (None, Some(value)) => Err(PreferenceError::TypeMismatch {
            key: kind,
            expected: kind.expected_type(),
            actual: value.type_name(),
        }),
        (None, None) => Err(PreferenceError::InvalidValue {
            key: kind,
            value: raw.to_string(),
        }),
    }
}

// ============================================================================
// PreferenceStore
// ============================================================================

/// Current presentation defaults.
///
/// Changes apply to popovers presented afterwards; a popover that is
/// already on screen keeps the style it was built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreferenceStore {
    font: Font,
    text_color: Color,
    background_color: Option<Color>,
}

impl Default for PreferenceStore {
    fn default() -> Self {
        Self {
            font: Font::regular(),
            text_color: Color::Reset,
            background_color: None,
        }
    }
}

impl PreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply every field that is set in `prefs`; unset fields are untouched.
    pub fn apply(&mut self, prefs: &Preferences) {
        if let Some(font) = prefs.font {
            self.font = font;
        }
        if let Some(color) = prefs.text_color {
            self.text_color = color;
        }
        if let Some(color) = prefs.background_color {
            self.background_color = Some(color);
        }
    }

    pub fn font(&self) -> Font {
        self.font
    }

    pub fn text_color(&self) -> Color {
        self.text_color
    }

    pub fn background_color(&self) -> Option<Color> {
        self.background_color
    }

    /// Style for label text. The background stays clear unless overridden.
    pub fn label_style(&self) -> Style {
        let style = Style::default()
            .fg(self.text_color)
            .add_modifier(self.font.modifier());
        match self.background_color {
            Some(bg) => style.bg(bg),
            None => style,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_parse() {
        assert_eq!("regular".parse::<Font>().unwrap(), Font::regular());
        assert_eq!("bold".parse::<Font>().unwrap(), Font::bold());
        let font: Font = "Bold+italic".parse().unwrap();
        assert!(font.bold && font.italic && !font.underlined);
        let font: Font = "italic underlined".parse().unwrap();
        assert!(font.italic && font.underlined);
    }

    #[test]
    fn test_font_parse_rejects_unknown() {
        assert!("heavy".parse::<Font>().is_err());
        assert!("".parse::<Font>().is_err());
        assert!("   ".parse::<Font>().is_err());
    }

    #[test]
    fn test_font_modifier() {
        assert_eq!(Font::regular().modifier(), Modifier::empty());
        assert_eq!(
            Font::bold().with_underline().modifier(),
            Modifier::BOLD | Modifier::UNDERLINED
        );
    }

    #[test]
    fn test_set_matching_types() {
        let mut prefs = Preferences::new();
        prefs.set(PreferenceKind::Font, Font::bold()).unwrap();
        prefs.set(PreferenceKind::TextColor, Color::Yellow).unwrap();
        prefs
            .set(PreferenceKind::BackgroundColor, Color::Blue)
            .unwrap();

        assert_eq!(prefs.font, Some(Font::bold()));
        assert_eq!(prefs.text_color, Some(Color::Yellow));
        assert_eq!(prefs.background_color, Some(Color::Blue));
    }

    #[test]
    fn test_set_type_mismatch() {
        let mut prefs = Preferences::new();
        let err = prefs
            .set(PreferenceKind::TextColor, Font::italic())
            .unwrap_err();
        assert_eq!(
            err,
            PreferenceError::TypeMismatch {
                key: PreferenceKind::TextColor,
                expected: "color",
                actual: "font",
            }
        );
        assert!(prefs.is_empty());

        let err = prefs.set(PreferenceKind::Font, Color::Red).unwrap_err();
        assert!(matches!(err, PreferenceError::TypeMismatch { .. }));
    }

    #[test]
    fn test_from_pairs() {
        let prefs = Preferences::from_pairs(&[
            (PreferenceKind::Font, "bold"),
            (PreferenceKind::TextColor, "yellow"),
            (PreferenceKind::BackgroundColor, "#102030"),
        ])
        .unwrap();

        assert_eq!(prefs.font, Some(Font::bold()));
        assert_eq!(prefs.text_color, Some(Color::Yellow));
        assert_eq!(prefs.background_color, Some(Color::Rgb(0x10, 0x20, 0x30)));
    }

    #[test]
    fn test_from_pairs_font_for_color_key_is_mismatch() {
        let err = Preferences::from_pairs(&[(PreferenceKind::TextColor, "bold")]).unwrap_err();
        assert!(matches!(
            err,
            PreferenceError::TypeMismatch {
                key: PreferenceKind::TextColor,
                ..
            }
        ));
    }

    #[test]
    fn test_from_pairs_garbage_is_invalid_value() {
        let err =
            Preferences::from_pairs(&[(PreferenceKind::BackgroundColor, "not-a-thing")])
                .unwrap_err();
        assert_eq!(
            err,
            PreferenceError::InvalidValue {
                key: PreferenceKind::BackgroundColor,
                value: "not-a-thing".to_string(),
            }
        );
    }

    #[test]
    fn test_store_defaults() {
        let store = PreferenceStore::default();
        assert_eq!(store.font(), Font::regular());
        assert_eq!(store.text_color(), Color::Reset);
        assert_eq!(store.background_color(), None);
    }

    #[test]
    fn test_store_apply_partial() {
        let mut store = PreferenceStore::new();
        store.apply(&Preferences::new().with_text_color(Color::Green));
        assert_eq!(store.text_color(), Color::Green);
        assert_eq!(store.font(), Font::regular());

        store.apply(&Preferences::new().with_font(Font::italic()));
        assert_eq!(store.text_color(), Color::Green);
        assert_eq!(store.font(), Font::italic());
    }

    #[test]
    fn test_label_style() {
        let mut store = PreferenceStore::new();
        store.apply(
            &Preferences::new()
                .with_font(Font::bold())
                .with_text_color(Color::White)
                .with_background_color(Color::Blue),
        );
        let style = store.label_style();
        assert_eq!(style.fg, Some(Color::White));
        assert_eq!(style.bg, Some(Color::Blue));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_label_style_clear_background() {
        let style = PreferenceStore::default().label_style();
        assert_eq!(style.bg, None);
    }
}
