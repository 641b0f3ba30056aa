//! Overlay configuration.

use std::time::Duration;

use crate::error::{ConfigError, ViewDescResult};
use crate::gesture::{DEFAULT_LONG_PRESS, DEFAULT_TAP_INTERVAL, DEFAULT_TAP_SLOP};
use crate::models::{PreferenceKind, Preferences};

/// Environment variable for the maximum popover width ratio.
pub const ENV_MAX_WIDTH_RATIO: &str = "VIEWDESC_MAX_WIDTH_RATIO";
/// Environment variable for the default font.
pub const ENV_FONT: &str = "VIEWDESC_FONT";
/// Environment variable for the default text color.
pub const ENV_TEXT_COLOR: &str = "VIEWDESC_TEXT_COLOR";
/// Environment variable for the default background color.
pub const ENV_BACKGROUND_COLOR: &str = "VIEWDESC_BACKGROUND_COLOR";

const MIN_WIDTH_RATIO: f64 = 0.1;
const MAX_WIDTH_RATIO: f64 = 1.0;

/// Configuration for the description overlay.
///
/// Use the builder pattern to customize it.
///
/// # Example
///
/// ```ignore
/// use viewdesc::config::OverlayConfig;
///
/// let config = OverlayConfig::default()
///     .with_max_width_ratio(0.5)
///     .with_padding(4, 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayConfig {
    /// Popover text never wraps wider than this share of the surface width
    pub max_width_ratio: f64,
    /// Total horizontal padding around the text (both sides together)
    pub horizontal_padding: u16,
    /// Total vertical padding around the text (top and bottom together)
    pub vertical_padding: u16,
    /// Hold time for long-press triggers
    pub long_press: Duration,
    /// Maximum time between the two taps of a double tap
    pub double_tap_interval: Duration,
    /// Pointer movement tolerated during a gesture, in cells
    pub tap_slop: u16,
    /// Preferences applied to the store when the manager starts
    pub initial_preferences: Preferences,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            max_width_ratio: 0.75,
            horizontal_padding: 20,
            vertical_padding: 20,
            long_press: DEFAULT_LONG_PRESS,
            double_tap_interval: DEFAULT_TAP_INTERVAL,
            tap_slop: DEFAULT_TAP_SLOP,
            initial_preferences: Preferences::default(),
        }
    }
}

impl OverlayConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Padding sized for terminal cells: one border plus one blank column
    /// on each side, one border row above and below.
    pub fn compact() -> Self {
        Self::default().with_padding(4, 2)
    }

    pub fn with_max_width_ratio(mut self, ratio: f64) -> Self {
        self.max_width_ratio = ratio.clamp(MIN_WIDTH_RATIO, MAX_WIDTH_RATIO);
        self
    }

    /// Set total horizontal and vertical padding.
    pub fn with_padding(mut self, horizontal: u16, vertical: u16) -> Self {
        self.horizontal_padding = horizontal;
        self.vertical_padding = vertical;
        self
    }

    pub fn with_long_press(mut self, duration: Duration) -> Self {
        self.long_press = duration;
        self
    }

    pub fn with_double_tap_interval(mut self, interval: Duration) -> Self {
        self.double_tap_interval = interval;
        self
    }

    pub fn with_tap_slop(mut self, slop: u16) -> Self {
        self.tap_slop = slop;
        self
    }

    pub fn with_initial_preferences(mut self, prefs: Preferences) -> Self {
        self.initial_preferences = prefs;
        self
    }

    /// Compact config overridden by `VIEWDESC_*` environment variables.
    ///
    /// Unset variables keep their defaults. A malformed value is an error,
    /// never silently ignored.
    pub fn from_env() -> ViewDescResult<Self> {
        let mut config = Self::compact();

        if let Some(raw) = env_value(ENV_MAX_WIDTH_RATIO) {
            config.max_width_ratio = parse_ratio(&raw)?;
        }

        let mut pairs = Vec::new();
        let font = env_value(ENV_FONT);
        let text_color = env_value(ENV_TEXT_COLOR);
        let background = env_value(ENV_BACKGROUND_COLOR);
        if let Some(raw) = font.as_deref() {
            pairs.push((PreferenceKind::Font, raw));
        }
        if let Some(raw) = text_color.as_deref() {
            pairs.push((PreferenceKind::TextColor, raw));
        }
        if let Some(raw) = background.as_deref() {
            pairs.push((PreferenceKind::BackgroundColor, raw));
        }
        config.initial_preferences = Preferences::from_pairs(&pairs)?;

        Ok(config)
    }
}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parse_ratio(raw: &str) -> Result<f64, ConfigError> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidNumber {
            variable: ENV_MAX_WIDTH_RATIO.to_string(),
            value: raw.to_string(),
        })?;

    if !(MIN_WIDTH_RATIO..=MAX_WIDTH_RATIO).contains(&value) {
        return Err(ConfigError::OutOfRange {
            variable: ENV_MAX_WIDTH_RATIO.to_string(),
            value,
            min: MIN_WIDTH_RATIO,
            max: MAX_WIDTH_RATIO,
        });
    }
    Ok(value)
}
