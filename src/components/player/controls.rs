use crate::api::catalog;
use crate::components::{toggle_fullscreen, Icon};
use crate::db::AppSettings;
use crate::playback::{rate_label, PlayerState};
use dioxus::prelude::*;
use tracing::{info, warn};

const CONTROL_CLASS: &str = "reel-control";

/// Play/Pause button - completely isolated component
#[component]
pub(super) fn PlayPauseButton() -> Element {
    let mut player = use_context::<Signal<PlayerState>>();
    let playing = player().is_playing;

    rsx! {
        button {
            id: "play-pause-btn",
            r#type: "button",
            class: "{CONTROL_CLASS} reel-control--primary",
            onclick: move |_| {
                player.write().toggle_play();
            },
            if playing {
                Icon { name: "pause".to_string(), class: "reel-icon".to_string() }
            } else {
                Icon { name: "play".to_string(), class: "reel-icon".to_string() }
            }
        }
    }
}

/// Mute button plus volume slider
#[component]
pub(super) fn VolumeControl() -> Element {
    let mut player = use_context::<Signal<PlayerState>>();
    let state = player();
    let icon = state.volume_icon();

    rsx! {
        div { class: "reel-volume",
            button {
                id: "volume-btn",
                r#type: "button",
                class: CONTROL_CLASS,
                onclick: move |_| {
                    player.write().toggle_mute();
                },
                Icon { name: icon.icon_name().to_string(), class: "reel-icon".to_string() }
            }
            input {
                r#type: "range",
                min: "0",
                max: "1",
                step: "0.01",
                value: "{state.volume}",
                class: "reel-range reel-range--volume",
                oninput: move |e: Event<FormData>| {
                    if let Ok(value) = e.value().parse::<f64>() {
                        player.write().set_volume(value);
                    }
                },
            }
        }
    }
}

/// Speed button - each click adds one step, wrapping back to normal speed
#[component]
pub(super) fn SpeedButton() -> Element {
    let mut player = use_context::<Signal<PlayerState>>();
    let settings = use_context::<Signal<AppSettings>>();
    let rate = rate_label(player().playback_rate);

    rsx! {
        button {
            id: "speed-btn",
            r#type: "button",
            class: CONTROL_CLASS,
            title: "Playback speed",
            onclick: move |_| {
                let (step, max_rate) = {
                    let settings = settings.peek();
                    (settings.speed_step, settings.max_playback_rate)
                };
                let rate = player.write().speed_up(step, max_rate);
                info!("Playback rate set to {rate}");
            },
            Icon { name: "forward-fast".to_string(), class: "reel-icon".to_string() }
            span { class: "reel-rate", "{rate}" }
        }
    }
}

#[component]
pub(super) fn FullscreenButton() -> Element {
    rsx! {
        button {
            id: "fullscreen-btn",
            r#type: "button",
            class: CONTROL_CLASS,
            title: "Fullscreen",
            onclick: move |_| toggle_fullscreen(),
            Icon { name: "expand".to_string(), class: "reel-icon".to_string() }
        }
    }
}

/// Next button - moves through the catalog and wraps at the end
#[component]
pub(super) fn NextButton() -> Element {
    let mut player = use_context::<Signal<PlayerState>>();

    rsx! {
        button {
            id: "next-btn",
            r#type: "button",
            class: CONTROL_CLASS,
            title: "Next video",
            onclick: move |_| {
                let videos = catalog();
                match player.write().advance(videos.len()) {
                    Some(index) => info!("Switching to video {index}"),
                    None => warn!("Video not found: the catalog is empty"),
                }
            },
            Icon { name: "forward-step".to_string(), class: "reel-icon".to_string() }
        }
    }
}
