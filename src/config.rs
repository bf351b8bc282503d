//! Page contract and tuning constants.
//!
//! `UiConfig::default()` matches the portfolio templates. A page can override
//! any subset of fields with a JSON block:
//!
//! ```html
//! <script type="application/json" id="portfolio-ui-config">
//!   { "header_offset_px": 96, "selectors": { "navbar": ".site-header" } }
//! </script>
//! ```

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;

/// Element id of the optional JSON config block.
pub const CONFIG_ELEMENT_ID: &str = "portfolio-ui-config";

pub const DEFAULT_HEADER_OFFSET_PX: f64 = 80.0;
pub const DEFAULT_NAVBAR_THRESHOLD_PX: f64 = 50.0;
pub const DEFAULT_REVEAL_VIEWPORT_DIVISOR: f64 = 1.2;
pub const DEFAULT_ALERT_FADE_MS: u64 = 300;
pub const DEFAULT_MIN_MESSAGE_CHARS: usize = 10;
pub const DEFAULT_THEME_STORAGE_KEY: &str = "theme";

/// Selectors the controllers use to find their elements.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub menu_trigger: String,
    pub nav_links: String,
    pub menu_bars: String,
    pub theme_toggle: String,
    pub alert_close: String,
    pub fragment_links: String,
    pub navbar: String,
    pub reveal: String,
    pub contact_form: String,
    pub name_field: String,
    pub email_field: String,
    pub message_field: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            menu_trigger: ".mobile-menu-btn".into(),
            nav_links: ".nav-links".into(),
            menu_bars: "span".into(),
            theme_toggle: ".theme-toggle".into(),
            alert_close: ".close-alert".into(),
            fragment_links: r##"a[href^="#"]"##.into(),
            navbar: ".navbar".into(),
            reveal: ".timeline-item, .education-card, .skill-category, .project-card, .certification-card".into(),
            contact_form: ".contact-form".into(),
            name_field: r#"input[name="name"]"#.into(),
            email_field: r#"input[name="email"]"#.into(),
            message_field: r#"textarea[name="message"]"#.into(),
        }
    }
}

/// Presentation class names toggled by the controllers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Classes {
    pub menu_open: String,
    pub bar_top: String,
    pub bar_middle: String,
    pub bar_bottom: String,
    pub dark_mode: String,
    pub navbar_scrolled: String,
    pub reveal_in: String,
    pub field_error: String,
    pub field_invalid: String,
}

impl Default for Classes {
    fn default() -> Self {
        Self {
            menu_open: "active".into(),
            bar_top: "rotated".into(),
            bar_middle: "hidden".into(),
            bar_bottom: "rotated-reverse".into(),
            dark_mode: "dark-mode".into(),
            navbar_scrolled: "scrolled".into(),
            reveal_in: "animate-in".into(),
            field_error: "invalid-feedback".into(),
            field_invalid: "is-invalid".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub selectors: Selectors,
    pub classes: Classes,
    /// Fixed header height subtracted from anchor scroll targets.
    pub header_offset_px: f64,
    /// Scroll offset past which the navbar gets its scrolled class.
    pub navbar_threshold_px: f64,
    /// Elements reveal once their top is above `viewport_height / divisor`.
    pub reveal_viewport_divisor: f64,
    pub alert_fade_ms: u64,
    pub min_message_chars: usize,
    pub theme_storage_key: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            selectors: Selectors::default(),
            classes: Classes::default(),
            header_offset_px: DEFAULT_HEADER_OFFSET_PX,
            navbar_threshold_px: DEFAULT_NAVBAR_THRESHOLD_PX,
            reveal_viewport_divisor: DEFAULT_REVEAL_VIEWPORT_DIVISOR,
            alert_fade_ms: DEFAULT_ALERT_FADE_MS,
            min_message_chars: DEFAULT_MIN_MESSAGE_CHARS,
            theme_storage_key: DEFAULT_THEME_STORAGE_KEY.into(),
        }
    }
}

impl UiConfig {
    /// Parse a JSON override block. Absent fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    #[must_use]
    pub fn alert_fade(&self) -> Duration {
        Duration::from_millis(self.alert_fade_ms)
    }
}
