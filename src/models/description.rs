//! Description records attached to UI elements.

use serde::{Deserialize, Serialize};

/// Gesture that asks for an element's description to be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerGesture {
    /// Press and hold on the element
    #[default]
    LongPress,
    /// Two taps in quick succession
    DoubleTap,
}

impl TriggerGesture {
    /// Short label suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            TriggerGesture::LongPress => "long_press",
            TriggerGesture::DoubleTap => "double_tap",
        }
    }
}

impl std::fmt::Display for TriggerGesture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_enabled() -> bool {
    true
}

/// Immutable description bound to one element.
///
/// Replacing an element's description swaps the whole record; fields are
/// never merged with a previous one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Description {
    text: String,
    #[serde(default)]
    gesture: TriggerGesture,
    #[serde(default = "default_enabled")]
    enabled: bool,
}

impl Description {
    /// Create an enabled long-press description.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            gesture: TriggerGesture::default(),
            enabled: true,
        }
    }

    /// Use a different trigger gesture.
    pub fn with_gesture(mut self, gesture: TriggerGesture) -> Self {
        self.gesture = gesture;
        self
    }

    /// Set whether the trigger shows the popover.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn gesture(&self) -> TriggerGesture {
        self.gesture
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl From<&str> for Description {
    fn from(text: &str) -> Self {
        Description::new(text)
    }
}

impl From<String> for Description {
    fn from(text: String) -> Self {
        Description::new(text)
    }
}
