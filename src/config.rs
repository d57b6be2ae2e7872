//! Tunable behavior constants.
//!
//! The page may ship an inline JSON block
//! (`<script type="application/json" id="folio-config">`) overriding any
//! subset of these fields. Missing fields keep their defaults from
//! [`crate::consts`]; a block that fails to parse or validate is logged and
//! ignored as a whole.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::coalesce::CoalesceMode;
use crate::consts::*;
use crate::scroll::ScrollThresholds;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config field {field}: {reason}")]
    Invalid { field: &'static str, reason: &'static str },
}

/// CSS selectors used to find the page's collaborators.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Selectors {
    pub nav: String,
    pub nav_links: String,
    pub sections: String,
    pub progress: String,
    pub reveal: String,
    pub menu_toggle: String,
    pub menu: String,
    pub theme_toggle: String,
    pub contact_form: String,
    pub anchors: String,
    pub main: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            nav: ".navbar".to_owned(),
            nav_links: ".nav-link".to_owned(),
            sections: "section[id]".to_owned(),
            progress: ".scroll-progress".to_owned(),
            reveal: ".reveal, img[data-src], [data-count]".to_owned(),
            menu_toggle: ".menu-toggle".to_owned(),
            menu: ".nav-menu".to_owned(),
            theme_toggle: ".theme-toggle".to_owned(),
            contact_form: "#contact-form".to_owned(),
            anchors: "a[href^=\"#\"]".to_owned(),
            main: "main".to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FolioConfig {
    pub nav_scrolled_offset_px: f64,
    pub nav_hide_offset_px: f64,
    pub activation_lead_px: f64,
    pub frame_window_ms: f64,
    pub highlight_window_ms: f64,
    pub highlight_mode: CoalesceMode,
    pub counter_duration_ms: f64,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub toast_duration_ms: u32,
    pub toast_max_visible: usize,
    pub submit_delay_ms: u32,
    pub submit_failure_rate: f64,
    pub mobile_breakpoint_px: f64,
    pub theme_storage_key: String,
    pub selectors: Selectors,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            nav_scrolled_offset_px: NAV_SCROLLED_OFFSET_PX,
            nav_hide_offset_px: NAV_HIDE_OFFSET_PX,
            activation_lead_px: ACTIVATION_LEAD_PX,
            frame_window_ms: FRAME_WINDOW_MS,
            highlight_window_ms: HIGHLIGHT_WINDOW_MS,
            highlight_mode: CoalesceMode::Debounce,
            counter_duration_ms: COUNTER_DURATION_MS,
            reveal_threshold: REVEAL_THRESHOLD,
            reveal_root_margin: REVEAL_ROOT_MARGIN.to_owned(),
            toast_duration_ms: TOAST_DURATION_MS,
            toast_max_visible: TOAST_MAX_VISIBLE,
            submit_delay_ms: SUBMIT_DELAY_MS,
            submit_failure_rate: 0.0,
            mobile_breakpoint_px: MOBILE_BREAKPOINT_PX,
            theme_storage_key: THEME_STORAGE_KEY.to_owned(),
            selectors: Selectors::default(),
        }
    }
}

impl FolioConfig {
    /// Parse and validate a JSON override block.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Config for an optional override block, falling back to defaults.
    #[must_use]
    pub fn load(raw: Option<&str>) -> Self {
        let Some(raw) = raw.filter(|r| !r.trim().is_empty()) else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "ignoring page config, using defaults");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("navScrolledOffsetPx", self.nav_scrolled_offset_px)?;
        non_negative("navHideOffsetPx", self.nav_hide_offset_px)?;
        non_negative("activationLeadPx", self.activation_lead_px)?;
        non_negative("frameWindowMs", self.frame_window_ms)?;
        non_negative("highlightWindowMs", self.highlight_window_ms)?;
        non_negative("counterDurationMs", self.counter_duration_ms)?;
        non_negative("mobileBreakpointPx", self.mobile_breakpoint_px)?;
        unit_interval("revealThreshold", self.reveal_threshold)?;
        unit_interval("submitFailureRate", self.submit_failure_rate)?;
        if self.toast_max_visible == 0 {
            return Err(ConfigError::Invalid { field: "toastMaxVisible", reason: "must be at least 1" });
        }
        if self.theme_storage_key.trim().is_empty() {
            return Err(ConfigError::Invalid { field: "themeStorageKey", reason: "must not be empty" });
        }
        Ok(())
    }

    #[must_use]
    pub fn thresholds(&self) -> ScrollThresholds {
        ScrollThresholds {
            scrolled_offset_px: self.nav_scrolled_offset_px,
            hide_offset_px: self.nav_hide_offset_px,
        }
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid { field, reason: "must be a finite, non-negative number" })
    }
}

fn unit_interval(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::Invalid { field, reason: "must be between 0 and 1" })
    }
}
