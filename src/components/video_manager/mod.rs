//! Bridge between the player state and the page's `<video>` element.
//!
//! On wasm32 the element is driven directly through `web-sys`. Webview builds
//! (desktop/mobile) send small JSON commands to a JavaScript shim installed
//! with `document::eval`.

use dioxus::prelude::*;
use serde::Deserialize;

#[cfg(target_arch = "wasm32")]
mod web_bridge;
#[cfg(target_arch = "wasm32")]
pub use web_bridge::*;

#[cfg(not(target_arch = "wasm32"))]
mod eval_bridge;
#[cfg(not(target_arch = "wasm32"))]
pub use eval_bridge::*;

mod controller;
pub use controller::VideoController;

pub const VIDEO_ELEMENT_ID: &str = "rustyreel-video";
pub const PLAYER_CONTAINER_ID: &str = "rustyreel-player";

/// Last media error reported by the element, if any.
#[derive(Clone, Copy)]
pub struct PlaybackErrorSignal(pub Signal<Option<String>>);

/// State read back from the element.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct VideoSnapshot {
    #[serde(default)]
    pub current_time: f64,
    #[serde(default)]
    pub duration: f64,
    #[serde(default)]
    pub error_code: Option<u16>,
}

/// User-facing text for a `MediaError.code`.
pub fn media_error_message(code: u16) -> &'static str {
    match code {
        1 => "Playback was aborted before the video loaded.",
        2 => "Network error while loading this video.",
        3 => "Video playback failed due to a decode error.",
        4 => "This video format is not supported.",
        _ => "Unable to load this video.",
    }
}
