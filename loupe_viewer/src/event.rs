// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size};
use loupe_gesture::touches::TouchId;
use serde::{Deserialize, Serialize};

/// Input the viewer reacts to.
///
/// Positions are container-relative screen coordinates (see
/// [`loupe_view::Layout`]). The serialized form is internally tagged, for
/// example `{"type": "wheel", "delta_y": -1.0, "position": {"x": 10.0, "y": 5.0}}`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ViewerEvent {
    /// Mouse button pressed over the content.
    PointerDown {
        /// Pointer position.
        position: Point,
    },
    /// Mouse moved (anywhere; drags continue outside the content).
    PointerMove {
        /// Pointer position.
        position: Point,
    },
    /// Mouse button released.
    PointerUp,
    /// A finger touched the surface.
    TouchStart {
        /// Finger identifier.
        id: TouchId,
        /// Finger position.
        position: Point,
    },
    /// A finger moved.
    TouchMove {
        /// Finger identifier.
        id: TouchId,
        /// Finger position.
        position: Point,
    },
    /// A finger lifted.
    TouchEnd {
        /// Finger identifier.
        id: TouchId,
        /// Position where the finger lifted.
        position: Point,
    },
    /// The platform aborted all touches.
    TouchCancel,
    /// Wheel notch. Negative `delta_y` scrolls away from the user.
    Wheel {
        /// Vertical wheel delta; only its sign is used.
        delta_y: f64,
        /// Pointer position.
        position: Point,
    },
    /// A click or tap, used for double-tap recognition.
    Tap {
        /// Tap position.
        position: Point,
        /// Monotonic timestamp in milliseconds.
        time_ms: u64,
    },
    /// A key press.
    Key {
        /// The key.
        key: ViewerKey,
    },
    /// The container was resized or the displayed image reported its size.
    Resize {
        /// Container size.
        container: Size,
        /// Natural size of the displayed image.
        natural: Size,
    },
}

/// Keys the viewer binds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewerKey {
    /// Previous item.
    ArrowLeft,
    /// Next item.
    ArrowRight,
    /// Zoom in one key step.
    ZoomIn,
    /// Zoom out one key step.
    ZoomOut,
    /// Return to rest.
    ZoomReset,
    /// Close the viewer.
    Escape,
}

impl ViewerKey {
    /// Maps a DOM `KeyboardEvent.key` value to a bound key.
    ///
    /// Both `+` and `=` zoom in, so the shortcut works with and without
    /// shift on common layouts.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            "+" | "=" => Self::ZoomIn,
            "-" => Self::ZoomOut,
            "0" => Self::ZoomReset,
            "Escape" | "Esc" => Self::Escape,
            _ => return None,
        })
    }
}
