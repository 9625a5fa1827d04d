//! Raw channel and video records as delivered by a [`crate::VideoSource`],
//! plus the scored wrappers produced by the metrics stage.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::CoreError;

/// A creator channel with its lifetime counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelRecord {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub subscriber_count: u64,
    pub view_count: u64,
    pub video_count: u64,
    pub published_at: DateTime<Utc>,
    #[serde(default)]
    pub custom_url: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
}

impl ChannelRecord {
    /// Rejects records without an id.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidRecord`] when `id` is blank.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.id.trim().is_empty() {
            return Err(CoreError::InvalidRecord {
                id: format!("(title {})", self.title),
                reason: "channel id must be non-empty".to_string(),
            });
        }
        Ok(())
    }
}

/// A single uploaded video with its raw engagement counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoRecord {
    pub id: String,
    pub channel_id: String,
    #[serde(default)]
    pub channel_title: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub published_at: DateTime<Utc>,
    pub view_count: u64,
    #[serde(default)]
    pub like_count: u64,
    #[serde(default)]
    pub comment_count: u64,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Length in seconds, when the source reports one.
    #[serde(default)]
    pub duration_secs: Option<u32>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
}

impl VideoRecord {
    #[must_use]
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.id)
    }

    /// Rejects records missing their id or owning channel.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidRecord`] when `id` or `channel_id` is blank.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.id.trim().is_empty() {
            return Err(CoreError::InvalidRecord {
                id: format!("(title {})", self.title),
                reason: "video id must be non-empty".to_string(),
            });
        }
        if self.channel_id.trim().is_empty() {
            return Err(CoreError::InvalidRecord {
                id: self.id.clone(),
                reason: "video channel_id must be non-empty".to_string(),
            });
        }
        Ok(())
    }
}

/// A channel together with the recent uploads fetched for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelVideos {
    pub channel: ChannelRecord,
    #[serde(default)]
    pub videos: Vec<VideoRecord>,
}

/// A video after the metrics stage. Scores are fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredVideo {
    pub video: VideoRecord,
    /// `(likes + comments) / max(views, 1)`.
    pub engagement_rate: f64,
    /// Composite in `[0, 1]`.
    pub performance_score: f64,
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn video(id: &str, channel_id: &str) -> VideoRecord {
        VideoRecord {
            id: id.to_string(),
            channel_id: channel_id.to_string(),
            channel_title: String::new(),
            title: "Some title".to_string(),
            description: String::new(),
            published_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
            view_count: 10,
            like_count: 1,
            comment_count: 0,
            tags: vec![],
            duration_secs: None,
            thumbnail_url: None,
        }
    }

    #[test]
    fn watch_url_uses_video_id() {
        assert_eq!(
            video("abc123", "UC1").watch_url(),
            "https://www.youtube.com/watch?v=abc123"
        );
    }

    #[test]
    fn validate_rejects_blank_video_id() {
        let err = video("  ", "UC1").validate().unwrap_err();
        assert!(err.to_string().contains("video id"));
    }

    #[test]
    fn blank_ids_are_reported_by_labelled_title() {
        let err = video("", "UC1").validate().unwrap_err();
        assert!(matches!(err, CoreError::InvalidRecord { ref id, .. } if id == "(title Some title)"));

        let channel = ChannelRecord {
            id: String::new(),
            title: "Prompt Lab".to_string(),
            description: String::new(),
            subscriber_count: 1,
            view_count: 1,
            video_count: 1,
            published_at: Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap(),
            custom_url: None,
            country: None,
            thumbnail_url: None,
        };
        assert_eq!(
            channel.validate().unwrap_err().to_string(),
            "invalid record (title Prompt Lab): channel id must be non-empty"
        );
    }

    #[test]
    fn validate_rejects_missing_channel_id() {
        let err = video("abc", "").validate().unwrap_err();
        assert!(matches!(err, CoreError::InvalidRecord { ref id, .. } if id == "abc"));
    }

    #[test]
    fn validate_accepts_well_formed_video() {
        assert!(video("abc", "UC1").validate().is_ok());
    }

    #[test]
    fn video_deserializes_with_optional_fields_absent() {
        let json = r#"{
            "id": "v1",
            "channel_id": "UC1",
            "title": "Intro to LLMs",
            "published_at": "2025-03-01T12:00:00Z",
            "view_count": 1200
        }"#;
        let v: VideoRecord = serde_json::from_str(json).unwrap();
        assert_eq!(v.like_count, 0);
        assert!(v.tags.is_empty());
        assert!(v.duration_secs.is_none());
    }
}
