// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use loupe_gesture::tap::TapConfig;
use loupe_view::ZoomPolicy;
use serde::{Deserialize, Serialize};

/// Default horizontal travel, in screen units, that turns a swipe into
/// navigation.
pub const SWIPE_THRESHOLD: f64 = 50.0;

/// Tunables of a [`crate::Viewer`].
///
/// Every field has a default, so a JSON document only needs the values it
/// overrides:
///
/// ```rust
/// use loupe_viewer::ViewerConfig;
///
/// let config = ViewerConfig::from_json(r#"{ "zoom": { "max_scale": 2.0 } }"#).unwrap();
/// assert_eq!(config.zoom.max_scale, 2.0);
/// assert_eq!(config.zoom.wheel_step, 0.2);
/// assert_eq!(config.swipe_threshold, 50.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Zoom limits and step sizes.
    pub zoom: ZoomPolicy,
    /// Swipe travel needed to navigate.
    pub swipe_threshold: f64,
    /// Double-tap recognition tolerances.
    pub double_tap: TapConfig,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            zoom: ZoomPolicy::default(),
            swipe_threshold: SWIPE_THRESHOLD,
            double_tap: TapConfig::default(),
        }
    }
}

impl ViewerConfig {
    /// Parses a JSON configuration, filling missing fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or mistyped fields.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        Ok(config.normalized())
    }

    /// Serializes the configuration as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if serialization fails, which only
    /// happens for non-finite numbers.
    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Returns a copy with zoom limits repaired and a usable swipe threshold.
    #[must_use]
    pub fn normalized(self) -> Self {
        let swipe_threshold = if self.swipe_threshold.is_finite() {
            self.swipe_threshold.abs()
        } else {
            SWIPE_THRESHOLD
        };
        Self {
            zoom: self.zoom.normalized(),
            swipe_threshold,
            double_tap: self.double_tap,
        }
    }
}

/// Errors produced while loading a [`ViewerConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The document is not valid JSON or a field has the wrong type.
    #[error("invalid viewer config: {0}")]
    Parse(#[from] serde_json::Error),
}
