//! Utility helpers for RustyReel

/// Shortens a title for the sidebar list. Titles longer than `max_chars`
/// characters keep their first `max_chars` characters followed by `...`.
pub fn truncate_title<S: AsRef<str>>(title: S, max_chars: usize) -> String {
    let title = title.as_ref();
    if title.chars().count() <= max_chars {
        return title.to_string();
    }
    let mut out: String = title.chars().take(max_chars).collect();
    out.push_str("...");
    out
}

/// Waits for `ms` milliseconds on whichever executor the app runs on.
#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u32) {
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u32) {
    tokio::time::sleep(std::time::Duration::from_millis(ms as u64)).await;
}
