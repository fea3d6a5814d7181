use crate::components::{
    CommentPanel, PlaybackErrorSignal, VideoController, VideoList, VideoPlayer,
};
use crate::db::{initialize_database, load_settings, save_settings, AppSettings};
use crate::playback::PlayerState;
use crate::scroll::ScrollMetrics;
use crate::throttle::Throttle;
#[cfg(target_arch = "wasm32")]
use dioxus::core::{Runtime, RuntimeGuard};
use dioxus::prelude::*;
use tracing::{info, warn};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use web_sys::window;

/// Latest throttled page measurement taken on scroll or resize.
#[derive(Clone, Copy)]
pub struct ScrollProbeSignal(pub Signal<Option<ScrollMetrics>>);

#[cfg(not(target_arch = "wasm32"))]
const SCROLL_EVENTS_JS: &str = r#"
const notify = () => dioxus.send(true);
window.addEventListener("scroll", notify, { passive: true });
window.addEventListener("resize", notify);
await new Promise(() => {});
"#;

#[component]
pub fn AppShell() -> Element {
    let mut app_settings = use_signal(AppSettings::default);
    let mut player = use_signal(PlayerState::default);
    let playback_error = use_signal(|| None::<String>);
    let scroll_probe = use_signal(|| None::<ScrollMetrics>);
    let mut settings_loaded = use_signal(|| false);

    use_context_provider(|| app_settings);
    use_context_provider(|| player);
    use_context_provider(|| PlaybackErrorSignal(playback_error));
    use_context_provider(|| ScrollProbeSignal(scroll_probe));

    // Initialize storage and load saved settings on mount
    use_effect(move || {
        spawn(async move {
            if let Err(err) = initialize_database().await {
                warn!("Failed to initialize settings storage: {err}");
            }
            match load_settings().await {
                Ok(settings) => {
                    info!(
                        per_page = settings.per_page,
                        throttle_ms = settings.scroll_throttle_ms,
                        "Loaded settings"
                    );
                    {
                        let mut state = player.write();
                        state.set_volume(settings.volume);
                        state.playback_rate = settings.playback_rate;
                    }
                    app_settings.set(settings);
                }
                Err(err) => warn!("Failed to load settings, using defaults: {err}"),
            }
            settings_loaded.set(true);
        });
    });

    // Persist volume and speed whenever they change after startup
    let saved_volume = use_memo(move || player().volume);
    let saved_rate = use_memo(move || player().playback_rate);
    use_effect(move || {
        let volume = saved_volume();
        let playback_rate = saved_rate();
        if !settings_loaded() {
            return;
        }
        let mut settings = app_settings.peek().clone();
        if settings.volume == volume && settings.playback_rate == playback_rate {
            return;
        }
        settings.volume = volume;
        settings.playback_rate = playback_rate;
        app_settings.set(settings.clone());
        spawn(async move {
            if let Err(err) = save_settings(settings).await {
                warn!("Failed to save settings: {err}");
            }
        });
    });

    // Window scroll/resize listeners feeding the throttled probe
    #[cfg(target_arch = "wasm32")]
    use_effect(move || {
        let Some(win) = window() else {
            return;
        };

        let runtime = Runtime::current();
        let throttle = Throttle::new(app_settings.peek().scroll_throttle_ms);
        let probe = scroll_probe;

        let on_change = Closure::wrap(Box::new(move || {
            let runtime = runtime.clone();
            let mut probe = probe;
            throttle.call(move || {
                let _guard = RuntimeGuard::new(runtime);
                if let Some(metrics) = crate::scroll::measure_window() {
                    probe.set(Some(metrics));
                }
            });
        }) as Box<dyn FnMut()>);

        let _ = win.add_event_listener_with_callback("scroll", on_change.as_ref().unchecked_ref());
        let _ = win.add_event_listener_with_callback("resize", on_change.as_ref().unchecked_ref());
        on_change.forget();
    });

    #[cfg(not(target_arch = "wasm32"))]
    use_effect(move || {
        let throttle = Throttle::new(app_settings.peek().scroll_throttle_ms);
        let probe = scroll_probe;
        spawn(async move {
            let mut eval = document::eval(SCROLL_EVENTS_JS);
            loop {
                match eval.recv::<bool>().await {
                    Ok(_) => {
                        let mut probe = probe;
                        // Measure when the timer fires, not when the event did.
                        throttle.call(move || {
                            spawn(async move {
                                if let Some(metrics) = crate::scroll::measure_page().await {
                                    probe.set(Some(metrics));
                                }
                            });
                        });
                    }
                    Err(err) => {
                        warn!("Scroll probe stopped: {err:?}");
                        break;
                    }
                }
            }
        });
    });

    rsx! {
        div { class: "reel-shell",
            main { class: "reel-main",
                VideoPlayer {}
                CommentPanel {}
            }
            VideoList {}
        }

        // Video controller - mirrors player state onto the element
        VideoController {}
    }
}
