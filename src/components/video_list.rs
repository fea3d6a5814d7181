use crate::api::{catalog, find_by_src, FeedError, ListEntry, MockFeed, Video, VideoPage};
use crate::components::{Icon, ScrollProbeSignal};
use crate::db::AppSettings;
use crate::diagnostics::log_perf;
use crate::playback::PlayerState;
use crate::scroll::ScrollMetrics;
use crate::utils::truncate_title;
use chrono::Utc;
use dioxus::prelude::*;
use futures_util::{Stream, StreamExt};
use tracing::{error, info, warn};

/// Why a drain of the feed was started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadTrigger {
    Mount,
    NearBottom,
}

/// A probe asks for more videos only near the bottom and only when no drain
/// is running.
pub fn should_load_more(metrics: &ScrollMetrics, loading: bool) -> bool {
    !loading && metrics.near_bottom()
}

/// Drains every page of `feed`. See [`drain_pages`].
pub async fn drain_feed<F>(feed: &MockFeed, on_page: F) -> Result<usize, FeedError>
where
    F: FnMut(Vec<Video>),
{
    drain_pages(feed.pages(), on_page).await
}

/// Hands each page's videos to `on_page` in order. Returns how many videos
/// were handed over. A failing page stops the drain; pages already delivered
/// stay delivered.
pub async fn drain_pages<S, F>(pages: S, mut on_page: F) -> Result<usize, FeedError>
where
    S: Stream<Item = Result<VideoPage, FeedError>>,
    F: FnMut(Vec<Video>),
{
    let mut delivered = 0;
    let mut pages = std::pin::pin!(pages);
    while let Some(page) = pages.next().await {
        let page = page?;
        delivered += page.videos.len();
        on_page(page.videos);
    }
    Ok(delivered)
}

#[component]
pub fn VideoList() -> Element {
    let settings = use_context::<Signal<AppSettings>>();
    let probe = use_context::<ScrollProbeSignal>().0;
    let mut player = use_context::<Signal<PlayerState>>();
    let mut entries = use_signal(Vec::<ListEntry>::new);
    let mut loading = use_signal(|| false);

    let loader = use_coroutine(move |mut rx: UnboundedReceiver<LoadTrigger>| async move {
        while let Some(trigger) = rx.next().await {
            let (per_page, delay_ms) = {
                let settings = settings.peek();
                (settings.per_page, settings.fetch_delay_ms)
            };
            let feed = MockFeed::new(catalog().to_vec(), per_page, delay_ms);
            let started_at = Utc::now();
            info!(?trigger, per_page = feed.per_page(), "Loading videos");

            let result = drain_feed(&feed, |videos| {
                entries.with_mut(|list| list.extend(videos.into_iter().map(ListEntry::new)));
            })
            .await;

            match result {
                Ok(count) => log_perf(
                    "video list drain",
                    started_at,
                    &format!("{count} videos, {} listed", entries.peek().len()),
                ),
                Err(err) => error!("An error occurred while loading more videos: {err}"),
            }
            loading.set(false);
        }
    });

    use_effect(move || {
        loading.set(true);
        loader.send(LoadTrigger::Mount);
    });

    use_effect(move || {
        let Some(metrics) = probe() else {
            return;
        };
        if !should_load_more(&metrics, *loading.peek()) {
            return;
        }
        loading.set(true);
        loader.send(LoadTrigger::NearBottom);
    });

    let title_max_chars = settings().title_max_chars;

    rsx! {
        aside { class: "reel-list",
            for entry in entries() {
                VideoListItem {
                    key: "{entry.key}",
                    video: entry.video.clone(),
                    title_max_chars,
                    on_select: move |video: Video| {
                        match find_by_src(&video.src) {
                            Some(index) => player.write().select(index),
                            None => warn!("Video not found: {}", video.src),
                        }
                    },
                }
            }
            if loading() {
                div { class: "reel-list__loading",
                    Icon { name: "loader".to_string(), class: "reel-icon".to_string() }
                    "Loading..."
                }
            }
        }
    }
}

#[component]
fn VideoListItem(video: Video, title_max_chars: usize, on_select: EventHandler<Video>) -> Element {
    let title = truncate_title(&video.title, title_max_chars);

    rsx! {
        div {
            class: "reel-list__item",
            onclick: {
                let video = video.clone();
                move |_| on_select.call(video.clone())
            },
            video {
                class: "reel-list__preview",
                src: "{video.src}",
                preload: "metadata",
                muted: true,
            }
            p { class: "reel-list__title", title: "{video.title}", "{title}" }
        }
    }
}
