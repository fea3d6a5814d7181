use crate::api::{format_clock, video_at};
use crate::components::{
    media_error_message, seek_to, set_playback_rate, set_volume, video_play, video_snapshot,
    PlaybackErrorSignal, PLAYER_CONTAINER_ID, VIDEO_ELEMENT_ID,
};
use crate::playback::PlayerState;
use dioxus::prelude::*;
use tracing::warn;

mod controls;

use controls::{FullscreenButton, NextButton, PlayPauseButton, SpeedButton, VolumeControl};

#[component]
pub fn VideoPlayer() -> Element {
    let mut player = use_context::<Signal<PlayerState>>();
    let mut playback_error = use_context::<PlaybackErrorSignal>().0;

    let state = player();
    let current = video_at(state.current_index);
    let progress = state.progress_percent();
    let clock = format_clock(state.current_time);

    let on_time_update = move |_| {
        spawn(async move {
            if let Some(snapshot) = video_snapshot().await {
                player
                    .write()
                    .update_time(snapshot.current_time, snapshot.duration);
            }
        });
    };

    // The element starts every new source at its default rate and keeps the
    // last volume, so both are re-applied once it can play.
    let on_can_play = move |_| {
        if playback_error.peek().is_some() {
            playback_error.set(None);
        }
        let state = player.peek().clone();
        set_volume(state.volume);
        set_playback_rate(state.playback_rate);
        if state.is_playing {
            video_play();
        }
    };

    let on_ended = move |_| {
        player.write().is_playing = false;
    };

    let on_media_error = move |_| {
        spawn(async move {
            let code = video_snapshot()
                .await
                .and_then(|snapshot| snapshot.error_code)
                .unwrap_or(0);
            let message = media_error_message(code).to_string();
            warn!(code, "Video element reported an error");
            playback_error.set(Some(message));
            player.write().is_playing = false;
        });
    };

    let on_seek_input = move |e: Event<FormData>| {
        if let Ok(percent) = e.value().parse::<f64>() {
            let target = player.peek().seek_target(percent);
            if let Some(time) = target {
                let duration = player.peek().duration;
                player.write().update_time(time, duration);
                seek_to(time);
            }
        }
    };

    rsx! {
        section { class: "reel-player",
            div { id: PLAYER_CONTAINER_ID, class: "reel-player__container",
                video {
                    id: VIDEO_ELEMENT_ID,
                    class: "reel-player__video",
                    src: current.map(|video| video.src.clone()).unwrap_or_default(),
                    preload: "metadata",
                    onclick: move |_| {
                        player.write().toggle_play();
                    },
                    ontimeupdate: on_time_update,
                    oncanplay: on_can_play,
                    onended: on_ended,
                    onerror: on_media_error,
                }
                if let Some(message) = playback_error() {
                    div { class: "reel-player__error", "{message}" }
                }
                div { class: "reel-player__controls",
                    PlayPauseButton {}
                    input {
                        r#type: "range",
                        min: "0",
                        max: "100",
                        step: "0.1",
                        value: "{progress}",
                        class: "reel-range reel-range--seek",
                        oninput: on_seek_input,
                    }
                    span { class: "reel-clock", "{clock}" }
                    VolumeControl {}
                    SpeedButton {}
                    NextButton {}
                    FullscreenButton {}
                }
            }
            {
                match current {
                    Some(video) => rsx! {
                        h1 { class: "reel-player__title", "{video.title}" }
                        p { class: "reel-player__desc", "{video.desc}" }
                    },
                    None => rsx! {
                        p { class: "reel-player__desc", "No videos available" }
                    },
                }
            }
        }
    }
}
