use crate::api::models::{Video, VideoPage};
use crate::utils::sleep_ms;
use futures_util::stream::{self, Stream};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_PER_PAGE: usize = 5;
pub const DEFAULT_FETCH_DELAY_MS: u32 = 150;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FeedError {
    #[error("page {0} is out of range; pages start at 1")]
    InvalidPage(u32),
}

/// Stand-in for a paginated video endpoint. Serves slices of a fixed catalog
/// after a fixed delay.
#[derive(Debug, Clone)]
pub struct MockFeed {
    videos: Arc<Vec<Video>>,
    per_page: usize,
    delay_ms: u32,
}

impl MockFeed {
    pub fn new(videos: Vec<Video>, per_page: usize, delay_ms: u32) -> Self {
        Self {
            videos: Arc::new(videos),
            per_page: per_page.max(1),
            delay_ms,
        }
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    /// Fetches one page. Pages are 1-based.
    pub async fn get_videos(&self, page: u32) -> Result<VideoPage, FeedError> {
        if page == 0 {
            return Err(FeedError::InvalidPage(page));
        }
        let offset = (page as usize - 1).saturating_mul(self.per_page);
        let end = offset.saturating_add(self.per_page);
        let videos = self
            .videos
            .get(offset.min(self.videos.len())..end.min(self.videos.len()))
            .map(<[Video]>::to_vec)
            .unwrap_or_default();
        let next_page = (self.videos.len() > end).then(|| page + 1);

        sleep_ms(self.delay_ms).await;
        debug!(page, returned = videos.len(), ?next_page, "served feed page");
        Ok(VideoPage { videos, next_page })
    }

    /// Walks the feed from page 1, following next-page links until none is
    /// left. A failed page is yielded and ends the stream.
    pub fn pages(&self) -> impl Stream<Item = Result<VideoPage, FeedError>> + '_ {
        stream::unfold(Some(1u32), move |cursor| async move {
            let page = cursor?;
            match self.get_videos(page).await {
                Ok(result) => {
                    let next = result.next_page;
                    Some((Ok(result), next))
                }
                Err(err) => Some((Err(err), None)),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::StreamExt;

    fn videos(count: usize) -> Vec<Video> {
        (1..=count)
            .map(|n| Video {
                src: format!("./video/{n}.mp4"),
                desc: format!("desc {n}"),
                title: format!("title {n}"),
            })
            .collect()
    }

    #[tokio::test]
    async fn short_catalog_fits_on_one_page() {
        let feed = MockFeed::new(videos(4), 5, 0);
        let page = feed.get_videos(1).await.unwrap();
        assert_eq!(page.videos.len(), 4);
        assert_eq!(page.next_page, None);
    }

    #[tokio::test]
    async fn exact_multiple_has_no_trailing_page() {
        let feed = MockFeed::new(videos(10), 5, 0);
        let first = feed.get_videos(1).await.unwrap();
        assert_eq!(first.next_page, Some(2));
        let second = feed.get_videos(2).await.unwrap();
        assert_eq!(second.videos.len(), 5);
        assert_eq!(second.videos[0].src, "./video/6.mp4");
        assert_eq!(second.next_page, None);
    }

    #[tokio::test]
    async fn page_past_the_end_is_empty() {
        let feed = MockFeed::new(videos(3), 2, 0);
        let page = feed.get_videos(7).await.unwrap();
        assert!(page.videos.is_empty());
        assert_eq!(page.next_page, None);
    }

    #[tokio::test]
    async fn page_zero_is_rejected() {
        let feed = MockFeed::new(videos(3), 2, 0);
        assert_eq!(feed.get_videos(0).await, Err(FeedError::InvalidPage(0)));
    }

    #[tokio::test]
    async fn zero_per_page_is_clamped() {
        let feed = MockFeed::new(videos(2), 0, 0);
        assert_eq!(feed.per_page(), 1);
        let page = feed.get_videos(2).await.unwrap();
        assert_eq!(page.videos[0].src, "./video/2.mp4");
        assert_eq!(page.next_page, None);
    }

    #[tokio::test]
    async fn draining_visits_every_page_in_order() {
        let feed = MockFeed::new(videos(12), 5, 0);
        let pages: Vec<_> = feed.pages().collect().await;
        assert_eq!(pages.len(), 3);
        let srcs: Vec<String> = pages
            .into_iter()
            .flat_map(|page| page.unwrap().videos)
            .map(|v| v.src)
            .collect();
        assert_eq!(srcs.len(), 12);
        assert_eq!(srcs.first().map(String::as_str), Some("./video/1.mp4"));
        assert_eq!(srcs.last().map(String::as_str), Some("./video/12.mp4"));
    }

    #[tokio::test]
    async fn draining_an_empty_catalog_yields_one_empty_page() {
        let feed = MockFeed::new(Vec::new(), 5, 0);
        let pages: Vec<_> = feed.pages().collect().await;
        assert_eq!(pages, vec![Ok(VideoPage::default())]);
    }

    #[tokio::test]
    async fn pages_arrive_after_the_delay() {
        let feed = MockFeed::new(videos(1), 5, 20);
        let started = std::time::Instant::now();
        feed.get_videos(1).await.unwrap();
        assert!(started.elapsed() >= std::time::Duration::from_millis(20));
    }
}
