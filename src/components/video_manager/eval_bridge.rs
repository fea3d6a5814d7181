// Webview builds talk to the video element through a small JS shim.
use super::{VideoSnapshot, PLAYER_CONTAINER_ID, VIDEO_ELEMENT_ID};
use dioxus::prelude::*;
use serde_json::json;

const VIDEO_BRIDGE_BOOTSTRAP_JS: &str = r#"
(function () {
    if (window.__rustyreelVideoBridge) return;
    const video = () => document.getElementById(window.__rustyreelVideoId);
    window.__rustyreelVideoBridge = {
        apply(cmd) {
            if (cmd.type === "fullscreen") {
                if (!document.fullscreenElement) {
                    const container = document.getElementById(cmd.container);
                    if (container && container.requestFullscreen) container.requestFullscreen();
                } else if (document.exitFullscreen) {
                    document.exitFullscreen();
                }
                return;
            }
            const el = video();
            if (!el) return;
            switch (cmd.type) {
                case "play": {
                    const p = el.play();
                    if (p && p.catch) p.catch(() => {});
                    break;
                }
                case "pause": el.pause(); break;
                case "reload": el.load(); break;
                case "seek": el.currentTime = cmd.position; break;
                case "volume": el.volume = cmd.volume; break;
                case "rate": el.playbackRate = cmd.rate; break;
            }
        },
        snapshot() {
            const el = video();
            if (!el) return null;
            return {
                current_time: Number.isFinite(el.currentTime) ? el.currentTime : 0,
                duration: Number.isFinite(el.duration) ? el.duration : 0,
                error_code: el.error ? el.error.code : null,
            };
        },
    };
})();
"#;

fn bootstrap_script() -> String {
    format!(
        "window.__rustyreelVideoId = {};{VIDEO_BRIDGE_BOOTSTRAP_JS}",
        json!(VIDEO_ELEMENT_ID)
    )
}

fn command_script(value: &serde_json::Value) -> String {
    format!(
        r#"(function () {{
            const bridge = window.__rustyreelVideoBridge;
            if (!bridge) return false;
            bridge.apply({value});
            return true;
        }})();"#
    )
}

/// Installs the JS shim. Commands sent before this are dropped by the page.
pub fn install_video_bridge() {
    let _ = document::eval(&bootstrap_script());
}

fn video_command(value: serde_json::Value) {
    let _ = document::eval(&command_script(&value));
}

pub fn video_play() {
    video_command(json!({ "type": "play" }));
}

pub fn video_pause() {
    video_command(json!({ "type": "pause" }));
}

pub fn reload_video() {
    video_command(json!({ "type": "reload" }));
}

pub fn seek_to(position: f64) {
    video_command(json!({ "type": "seek", "position": position.max(0.0) }));
}

pub fn set_volume(volume: f64) {
    video_command(json!({ "type": "volume", "volume": volume.clamp(0.0, 1.0) }));
}

pub fn set_playback_rate(rate: f64) {
    video_command(json!({ "type": "rate", "rate": rate }));
}

pub fn toggle_fullscreen() {
    video_command(json!({ "type": "fullscreen", "container": PLAYER_CONTAINER_ID }));
}

pub async fn video_snapshot() -> Option<VideoSnapshot> {
    let eval = document::eval(
        r#"const bridge = window.__rustyreelVideoBridge;
        return bridge ? bridge.snapshot() : null;"#,
    );
    eval.join::<Option<VideoSnapshot>>().await.ok().flatten()
}
