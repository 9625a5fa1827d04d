//! In-memory [`VideoSource`] backed by a YAML corpus file.
//!
//! Used for offline runs and golden tests. Applies the same keyword,
//! subscriber, view and count filters a live source would.

use std::convert::Infallible;
use std::future::Future;
use std::path::Path;

use serde::Deserialize;

use crate::records::{ChannelRecord, ChannelVideos, VideoRecord};
use crate::source::VideoSource;
use crate::ConfigError;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CorpusFixture {
    pub channels: Vec<ChannelVideos>,
}

impl CorpusFixture {
    #[must_use]
    pub fn new(channels: Vec<ChannelVideos>) -> Self {
        Self { channels }
    }

    /// Parse a corpus from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::FileParse`] on malformed YAML.
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load a corpus file from disk.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::FileIo`] if the file cannot be read, or
    /// [`ConfigError::FileParse`] if it is not a valid corpus.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileIo {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_yaml(&content)
    }

    fn matching_channels(&self, keywords: &[String], min_subscribers: u64) -> Vec<ChannelRecord> {
        let needles: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();
        self.channels
            .iter()
            .filter(|cv| cv.channel.subscriber_count >= min_subscribers)
            .filter(|cv| needles.is_empty() || mentions_any(cv, &needles))
            .map(|cv| cv.channel.clone())
            .collect()
    }

    fn channel_uploads(&self, channel_id: &str, min_views: u64, max_count: usize) -> Vec<VideoRecord> {
        let Some(cv) = self.channels.iter().find(|cv| cv.channel.id == channel_id) else {
            return Vec::new();
        };
        let mut videos: Vec<VideoRecord> = cv
            .videos
            .iter()
            .filter(|v| v.view_count >= min_views)
            .cloned()
            .collect();
        // Newest first, like an uploads playlist.
        videos.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        videos.truncate(max_count);
        videos
    }
}

fn mentions_any(cv: &ChannelVideos, needles: &[String]) -> bool {
    let mut haystack = format!("{} {}", cv.channel.title, cv.channel.description).to_lowercase();
    for v in &cv.videos {
        haystack.push(' ');
        haystack.push_str(&v.title.to_lowercase());
        for tag in &v.tags {
            haystack.push(' ');
            haystack.push_str(&tag.to_lowercase());
        }
    }
    needles.iter().any(|n| haystack.contains(n.as_str()))
}

impl VideoSource for CorpusFixture {
    type Error = Infallible;

    fn channels(
        &self,
        keywords: &[String],
        min_subscribers: u64,
    ) -> impl Future<Output = Result<Vec<ChannelRecord>, Self::Error>> + Send {
        std::future::ready(Ok(self.matching_channels(keywords, min_subscribers)))
    }

    fn videos(
        &self,
        channel_id: &str,
        min_views: u64,
        max_count: usize,
    ) -> impl Future<Output = Result<Vec<VideoRecord>, Self::Error>> + Send {
        std::future::ready(Ok(self.channel_uploads(channel_id, min_views, max_count)))
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    const CORPUS: &str = r#"
channels:
  - channel:
      id: UC_ai
      title: AI Explained
      description: Deep dives into machine learning
      subscriber_count: 250000
      view_count: 40000000
      video_count: 300
      published_at: "2019-05-01T00:00:00Z"
    videos:
      - id: a1
        channel_id: UC_ai
        title: ChatGPT agents explained
        published_at: "2025-06-01T00:00:00Z"
        view_count: 400000
      - id: a2
        channel_id: UC_ai
        title: Older upload
        published_at: "2025-01-01T00:00:00Z"
        view_count: 90000
      - id: a3
        channel_id: UC_ai
        title: Newest upload
        published_at: "2025-07-01T00:00:00Z"
        view_count: 150000
  - channel:
      id: UC_cook
      title: Weeknight Cooking
      subscriber_count: 900000
      view_count: 10000000
      video_count: 120
      published_at: "2018-01-01T00:00:00Z"
    videos: []
"#;

    fn corpus() -> CorpusFixture {
        CorpusFixture::from_yaml(CORPUS).expect("fixture should parse")
    }

    #[test]
    fn channels_filter_by_keyword_and_subscribers() {
        let keywords = vec!["chatgpt".to_string()];
        let found = block_on(corpus().channels(&keywords, 100_000)).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "UC_ai");

        let none = block_on(corpus().channels(&keywords, 1_000_000)).unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn videos_are_filtered_newest_first_and_capped() {
        let videos = block_on(corpus().videos("UC_ai", 100_000, 10)).unwrap();
        let ids: Vec<&str> = videos.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["a3", "a1"]);

        let capped = block_on(corpus().videos("UC_ai", 0, 1)).unwrap();
        assert_eq!(capped.len(), 1);
        assert_eq!(capped[0].id, "a3");
    }

    #[test]
    fn unknown_channel_yields_empty_list() {
        let videos = block_on(corpus().videos("UC_missing", 0, 10)).unwrap();
        assert!(videos.is_empty());
    }

    #[test]
    fn malformed_yaml_is_a_parse_error() {
        let err = CorpusFixture::from_yaml("channels: [ {").unwrap_err();
        assert!(matches!(err, ConfigError::FileParse(_)));
    }
}
