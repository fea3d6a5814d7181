use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Video {
    pub src: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub title: String,
}

/// One slice of the feed plus the page number to ask for next, if any.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct VideoPage {
    pub videos: Vec<Video>,
    #[serde(default, rename = "nextPage")]
    pub next_page: Option<u32>,
}

/// A video appended to the sidebar list. The same video can appear more than
/// once, so every entry carries its own key.
#[derive(Debug, Clone, PartialEq)]
pub struct ListEntry {
    pub key: Uuid,
    pub video: Video,
}

impl ListEntry {
    pub fn new(video: Video) -> Self {
        Self {
            key: Uuid::new_v4(),
            video,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: Uuid,
    pub body: String,
    pub posted_at: DateTime<Local>,
}

impl Comment {
    /// Builds a comment from raw form input. Returns `None` for blank input.
    pub fn from_input(input: &str) -> Option<Self> {
        let body = input.trim();
        if body.is_empty() {
            return None;
        }
        Some(Self {
            id: Uuid::new_v4(),
            body: body.to_string(),
            posted_at: Local::now(),
        })
    }

    pub fn posted_label(&self) -> String {
        self.posted_at.format("%H:%M").to_string()
    }
}

/// Formats a playback position as `MM:SS`, or `HH:MM:SS` from one hour on.
pub fn format_clock(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    let hours = total / 3600;
    let mins = (total % 3600) / 60;
    let secs = total % 60;
    if hours >= 1 {
        format!("{:02}:{:02}:{:02}", hours, mins, secs)
    } else {
        format!("{:02}:{:02}", mins, secs)
    }
}
