//! Engine tuning parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::animator::CursorStyle;
use crate::consts::{
    ACCEL_STEP_PX, ANIMATION_MS, BASE_STEP_PX, CURSOR_RADIUS_PX, DEFAULT_START_URL, EDGE_MARGIN_PX, SCROLL_STEP_X_PX,
    SCROLL_STEP_Y_PX, SEEK_SECONDS,
};
use crate::edge_scroll::EdgeScroll;
use crate::error::ConfigError;
use crate::keymap::KeyMap;

/// What `Activate` clicks.
///
/// Observed shells disagree on this, so it is a setting rather than a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivateTarget {
    /// The element under the virtual cursor.
    #[default]
    Pointer,
    /// The document's focused element.
    Focused,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PointerConfig {
    pub keymap: KeyMap,
    pub edge_margin_px: f64,
    pub edge_scroll: EdgeScroll,
    pub animation_ms: f64,
    pub cursor: CursorStyle,
    pub activate_target: ActivateTarget,
    pub start_url: String,
}

impl Default for PointerConfig {
    fn default() -> Self {
        Self {
            keymap: KeyMap::default(),
            edge_margin_px: EDGE_MARGIN_PX,
            edge_scroll: EdgeScroll::default(),
            animation_ms: ANIMATION_MS,
            cursor: CursorStyle::default(),
            activate_target: ActivateTarget::default(),
            start_url: DEFAULT_START_URL.to_owned(),
        }
    }
}

impl PointerConfig {
    /// Build config from environment variables.
    ///
    /// All optional; unparseable numbers fall back to the default:
    /// - `TVPOINTER_BASE_STEP_PX`: default 60
    /// - `TVPOINTER_ACCEL_STEP_PX`: default 18
    /// - `TVPOINTER_EDGE_MARGIN_PX`: default 40
    /// - `TVPOINTER_SCROLL_STEP_X_PX`: default 120
    /// - `TVPOINTER_SCROLL_STEP_Y_PX`: default 150
    /// - `TVPOINTER_ANIMATION_MS`: default 110
    /// - `TVPOINTER_SEEK_SECONDS`: default 10
    /// - `TVPOINTER_CURSOR_RADIUS_PX`: default 12
    /// - `TVPOINTER_ACTIVATE_TARGET`: `pointer` (default) or `focused`
    /// - `TVPOINTER_START_URL`: default start page
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidValue`] for negative or non-finite numbers and
    /// [`ConfigError::UnknownActivateTarget`] for an unrecognized target.
    pub fn from_env() -> Result<Self, ConfigError> {
        let keymap = KeyMap {
            base_step_px: env_f64("TVPOINTER_BASE_STEP_PX", BASE_STEP_PX)?,
            accel_step_px: env_f64("TVPOINTER_ACCEL_STEP_PX", ACCEL_STEP_PX)?,
            seek_seconds: env_f64("TVPOINTER_SEEK_SECONDS", SEEK_SECONDS)?,
        };
        let edge_scroll = EdgeScroll {
            step_x_px: env_f64("TVPOINTER_SCROLL_STEP_X_PX", SCROLL_STEP_X_PX)?,
            step_y_px: env_f64("TVPOINTER_SCROLL_STEP_Y_PX", SCROLL_STEP_Y_PX)?,
        };
        let cursor = CursorStyle {
            radius_px: env_f64("TVPOINTER_CURSOR_RADIUS_PX", CURSOR_RADIUS_PX)?,
            ..CursorStyle::default()
        };
        let activate_target = match std::env::var("TVPOINTER_ACTIVATE_TARGET") {
            Ok(raw) => parse_activate_target(&raw)?,
            Err(_) => ActivateTarget::default(),
        };
        let start_url = std::env::var("TVPOINTER_START_URL").unwrap_or_else(|_| DEFAULT_START_URL.to_owned());

        Ok(Self {
            keymap,
            edge_margin_px: env_f64("TVPOINTER_EDGE_MARGIN_PX", EDGE_MARGIN_PX)?,
            edge_scroll,
            animation_ms: env_f64("TVPOINTER_ANIMATION_MS", ANIMATION_MS)?,
            cursor,
            activate_target,
            start_url,
        })
    }
}

fn env_f64(var: &'static str, default: f64) -> Result<f64, ConfigError> {
    let Ok(raw) = std::env::var(var) else {
        return Ok(default);
    };
    let Ok(value) = raw.trim().parse::<f64>() else {
        return Ok(default);
    };
    if !value.is_finite() || value < 0.0 {
        return Err(ConfigError::InvalidValue { var, value });
    }
    Ok(value)
}

fn parse_activate_target(raw: &str) -> Result<ActivateTarget, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "pointer" | "cursor" => Ok(ActivateTarget::Pointer),
        "focused" | "focus" => Ok(ActivateTarget::Focused),
        other => Err(ConfigError::UnknownActivateTarget(other.to_owned())),
    }
}
