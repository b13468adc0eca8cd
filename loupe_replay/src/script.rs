// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use loupe_viewer::loupe_gallery::ViewableItem;
use loupe_viewer::{ViewerConfig, ViewerEvent};
use serde::Deserialize;

/// A replayable viewer session.
///
/// ```json
/// {
///   "config": { "zoom": { "max_scale": 4.0 } },
///   "items": [{ "src": "a.jpg", "alt": "A" }],
///   "start_index": 0,
///   "steps": [
///     { "type": "resize", "container": { "width": 800, "height": 600 },
///       "natural": { "width": 1600, "height": 1200 } },
///     { "type": "wheel", "delta_y": -1, "position": { "x": 10, "y": 10 } },
///     { "type": "frame" }
///   ]
/// }
/// ```
#[derive(Clone, Debug, Deserialize)]
pub(crate) struct Script {
    #[serde(default)]
    pub(crate) config: ViewerConfig,
    pub(crate) items: Vec<ViewableItem>,
    #[serde(default)]
    pub(crate) start_index: usize,
    #[serde(default)]
    pub(crate) steps: Vec<Step>,
}

/// One line of a script: either viewer input or a driver action.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum Step {
    Control(Control),
    Input(ViewerEvent),
}

/// Actions that come from the page rather than the user.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub(crate) enum Control {
    /// The requested animation frame fires.
    Frame,
    /// A thumbnail was clicked while the viewer is open.
    JumpTo { index: usize },
    /// The image at `index` failed to load.
    LoadFailure { index: usize, reason: String },
    /// The close button was clicked.
    Close,
    /// The viewer is opened again on the script's items.
    Reopen { start_index: usize },
}

impl Script {
    pub(crate) fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        let mut script: Self = serde_json::from_str(text)?;
        script.config = script.config.normalized();
        Ok(script)
    }
}
