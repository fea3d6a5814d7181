// Direct `web-sys` access to the video element for browser builds.
use super::{VideoSnapshot, PLAYER_CONTAINER_ID, VIDEO_ELEMENT_ID};
use dioxus::prelude::*;
use tracing::warn;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlVideoElement};

fn video_element() -> Option<HtmlVideoElement> {
    let document = window()?.document()?;
    document
        .get_element_by_id(VIDEO_ELEMENT_ID)?
        .dyn_into::<HtmlVideoElement>()
        .ok()
}

pub fn video_play() {
    let Some(video) = video_element() else {
        return;
    };
    match video.play() {
        Ok(promise) => {
            spawn(async move {
                if let Err(err) = wasm_bindgen_futures::JsFuture::from(promise).await {
                    warn!("Video play request was rejected: {err:?}");
                }
            });
        }
        Err(err) => warn!("Video play failed: {err:?}"),
    }
}

pub fn video_pause() {
    if let Some(video) = video_element() {
        let _ = video.pause();
    }
}

/// Restarts the current source from the beginning. `canplay` fires again
/// once it has reloaded.
pub fn reload_video() {
    if let Some(video) = video_element() {
        video.load();
    }
}

pub fn seek_to(position: f64) {
    if let Some(video) = video_element() {
        video.set_current_time(position.max(0.0));
    }
}

pub fn set_volume(volume: f64) {
    if let Some(video) = video_element() {
        video.set_volume(volume.clamp(0.0, 1.0));
    }
}

pub fn set_playback_rate(rate: f64) {
    if let Some(video) = video_element() {
        video.set_playback_rate(rate);
    }
}

/// Requests fullscreen for the player container, or leaves fullscreen when
/// something is already fullscreen.
pub fn toggle_fullscreen() {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    if document.fullscreen_element().is_some() {
        document.exit_fullscreen();
        return;
    }
    if let Some(container) = document.get_element_by_id(PLAYER_CONTAINER_ID) {
        if let Err(err) = container.request_fullscreen() {
            warn!("Fullscreen request failed: {err:?}");
        }
    }
}

pub async fn video_snapshot() -> Option<VideoSnapshot> {
    let video = video_element()?;
    Some(VideoSnapshot {
        current_time: video.current_time(),
        duration: video.duration(),
        error_code: video.error().map(|err| err.code()),
    })
}
