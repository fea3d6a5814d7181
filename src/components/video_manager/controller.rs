#[cfg(not(target_arch = "wasm32"))]
use super::install_video_bridge;
use super::{reload_video, set_playback_rate, set_volume, video_pause, video_play};
use crate::playback::PlayerState;
use dioxus::prelude::*;

/// Mirrors the player state onto the video element. Renders nothing.
#[component]
pub fn VideoController() -> Element {
    let player = use_context::<Signal<PlayerState>>();

    // Memos so that time updates do not re-issue play/volume/rate commands.
    let wants_play = use_memo(move || player().is_playing);
    let volume = use_memo(move || player().volume);
    let playback_rate = use_memo(move || player().playback_rate);
    let reload_requests = use_memo(move || player().reload_requests);

    // Keep first: effects run in order and the ones below send commands.
    #[cfg(not(target_arch = "wasm32"))]
    use_effect(move || install_video_bridge());

    use_effect(move || {
        if wants_play() {
            video_play();
        } else {
            video_pause();
        }
    });

    use_effect(move || {
        set_volume(volume());
    });

    use_effect(move || {
        set_playback_rate(playback_rate());
    });

    // `canplay` resumes playback after the reload.
    use_effect(move || {
        if reload_requests() > 0 {
            reload_video();
        }
    });

    rsx! {}
}
