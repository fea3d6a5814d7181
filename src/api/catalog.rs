use crate::api::models::Video;
use once_cell::sync::Lazy;
use tracing::error;

const CATALOG_JSON: &str = include_str!("catalog.json");

/// Every video the feed knows about, in feed order.
pub static VIDEO_CATALOG: Lazy<Vec<Video>> = Lazy::new(|| parse_catalog(CATALOG_JSON));

fn parse_catalog(raw: &str) -> Vec<Video> {
    match serde_json::from_str::<Vec<Video>>(raw) {
        Ok(videos) => videos,
        Err(err) => {
            error!("Failed to parse video catalog: {err}");
            Vec::new()
        }
    }
}

pub fn catalog() -> &'static [Video] {
    VIDEO_CATALOG.as_slice()
}

pub fn video_at(index: usize) -> Option<&'static Video> {
    catalog().get(index)
}

/// Position of the video with this source in the catalog.
pub fn find_by_src(src: &str) -> Option<usize> {
    catalog().iter().position(|video| video.src == src)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_has_four_videos() {
        let videos = catalog();
        assert_eq!(videos.len(), 4);
        assert!(videos.iter().all(|v| !v.src.is_empty() && !v.title.is_empty()));
        assert_eq!(videos[0].src, "./video/1.mp4");
    }

    #[test]
    fn lookup_by_source() {
        assert_eq!(find_by_src("./video/5.mp4"), Some(2));
        assert_eq!(find_by_src("./video/404.mp4"), None);
    }

    #[test]
    fn video_at_borrows_from_the_catalog() {
        let video = video_at(1).expect("second video");
        assert_eq!(video.src, "./video/9.mp4");
        assert!(std::ptr::eq(video, &catalog()[1]));
        assert!(video_at(4).is_none());
    }

    #[test]
    fn malformed_catalog_is_empty() {
        assert!(parse_catalog("{not json").is_empty());
    }
}
