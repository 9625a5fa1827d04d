//! HTTP client for the YouTube Data API v3.
//!
//! Covers the four read endpoints the pipeline needs: channel search,
//! channel details, uploads playlist items and video details. Requests are
//! not retried; quota errors surface as [`YoutubeError::Api`].

use std::collections::HashSet;
use std::future::Future;
use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use vidtrend_core::{ChannelRecord, VideoRecord, VideoSource};

use crate::error::YoutubeError;
use crate::types::{ChannelItem, ListResponse, PlaylistItem, SearchItem, VideoItem};

const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3/";

/// Upper bound the API accepts for `maxResults` and for comma-joined `id` lists.
const MAX_PAGE: usize = 50;

/// Client for the YouTube Data API.
///
/// Use [`YoutubeClient::new`] for production or [`YoutubeClient::with_base_url`]
/// to point at a mock server in tests.
pub struct YoutubeClient {
    client: Client,
    api_key: String,
    base_url: Url,
    results_per_keyword: u32,
}

impl YoutubeClient {
    /// Creates a new client pointed at the production API.
    ///
    /// # Errors
    ///
    /// Returns [`YoutubeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, YoutubeError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`YoutubeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`YoutubeError::Api`] if `base_url` is not
    /// a valid URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, YoutubeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("vidtrend/0.1 (trend-research)")
            .build()?;

        // Trailing slash so endpoint names join under the version path.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| YoutubeError::Api {
            status: 0,
            message: format!("invalid base URL '{base_url}': {e}"),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
            results_per_keyword: 20,
        })
    }

    /// Channel search results requested per keyword (clamped to 1..=50).
    #[must_use]
    pub fn with_results_per_keyword(mut self, n: u32) -> Self {
        self.results_per_keyword = n.clamp(1, 50);
        self
    }

    /// Channel ids matching `query`, in relevance order.
    ///
    /// # Errors
    ///
    /// - [`YoutubeError::Api`] if the API returns an error status.
    /// - [`YoutubeError::Http`] on network failure.
    /// - [`YoutubeError::Deserialize`] if the response has an unexpected shape.
    pub async fn search_channel_ids(&self, query: &str) -> Result<Vec<String>, YoutubeError> {
        let max = self.results_per_keyword.to_string();
        let url = self.build_url(
            "search",
            &[
                ("part", "snippet"),
                ("type", "channel"),
                ("q", query),
                ("maxResults", &max),
            ],
        );
        let page: ListResponse<SearchItem> = self.get(&url, "search").await?;
        Ok(page
            .items
            .into_iter()
            .filter_map(|item| item.id.channel_id)
            .collect())
    }

    /// Full channel details for `ids`, batched 50 per request.
    ///
    /// # Errors
    ///
    /// Same as [`YoutubeClient::search_channel_ids`].
    pub async fn channel_details(
        &self,
        ids: &[String],
    ) -> Result<Vec<ChannelDetails>, YoutubeError> {
        let mut out = Vec::with_capacity(ids.len());
        for chunk in ids.chunks(MAX_PAGE) {
            let joined = chunk.join(",");
            let url = self.build_url(
                "channels",
                &[("part", "snippet,statistics,contentDetails"), ("id", &joined)],
            );
            let page: ListResponse<ChannelItem> = self.get(&url, "channels").await?;
            out.extend(page.items.into_iter().map(ChannelDetails::from_item));
        }
        Ok(out)
    }

    /// Most recent video ids in a playlist, newest first.
    ///
    /// # Errors
    ///
    /// Same as [`YoutubeClient::search_channel_ids`].
    pub async fn playlist_video_ids(
        &self,
        playlist_id: &str,
        max: usize,
    ) -> Result<Vec<String>, YoutubeError> {
        let max = max.clamp(1, MAX_PAGE).to_string();
        let url = self.build_url(
            "playlistItems",
            &[
                ("part", "contentDetails"),
                ("playlistId", playlist_id),
                ("maxResults", &max),
            ],
        );
        let page: ListResponse<PlaylistItem> = self.get(&url, "playlistItems").await?;
        Ok(page
            .items
            .into_iter()
            .map(|item| item.content_details.video_id)
            .collect())
    }

    /// Full video details for `ids`, batched 50 per request, in input order.
    ///
    /// # Errors
    ///
    /// Same as [`YoutubeClient::search_channel_ids`].
    pub async fn video_details(&self, ids: &[String]) -> Result<Vec<VideoRecord>, YoutubeError> {
        let mut out = Vec::with_capacity(ids.len());
        for chunk in ids.chunks(MAX_PAGE) {
            let joined = chunk.join(",");
            let url = self.build_url(
                "videos",
                &[("part", "snippet,statistics,contentDetails"), ("id", &joined)],
            );
            let page: ListResponse<VideoItem> = self.get(&url, "videos").await?;
            let mut records: Vec<VideoRecord> = page.items.into_iter().map(Into::into).collect();
            // The API does not promise to echo ids in request order.
            records.sort_by_key(|r| chunk.iter().position(|id| *id == r.id));
            out.extend(records);
        }
        Ok(out)
    }

    async fn search_channels(
        &self,
        keywords: &[String],
        min_subscribers: u64,
    ) -> Result<Vec<ChannelRecord>, YoutubeError> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut ids: Vec<String> = Vec::new();
        for keyword in keywords {
            let found = self.search_channel_ids(keyword).await?;
            tracing::debug!(keyword = %keyword, channels = found.len(), "channel search");
            for id in found {
                if seen.insert(id.clone()) {
                    ids.push(id);
                }
            }
        }

        let details = self.channel_details(&ids).await?;
        let total = details.len();
        let channels: Vec<ChannelRecord> = details
            .into_iter()
            .map(|view| view.record)
            .filter(|c| c.subscriber_count >= min_subscribers)
            .collect();
        tracing::info!(
            keywords = keywords.len(),
            candidates = total,
            kept = channels.len(),
            "channel discovery complete"
        );
        Ok(channels)
    }

    async fn recent_videos(
        &self,
        channel_id: &str,
        min_views: u64,
        max_count: usize,
    ) -> Result<Vec<VideoRecord>, YoutubeError> {
        let details = self.channel_details(&[channel_id.to_string()]).await?;
        let Some(uploads) = details.into_iter().find_map(|v| v.uploads) else {
            tracing::warn!(channel_id, "channel has no uploads playlist");
            return Ok(Vec::new());
        };

        let ids = self.playlist_video_ids(&uploads, MAX_PAGE).await?;
        let mut videos = self.video_details(&ids).await?;
        videos.retain(|v| v.view_count >= min_views);
        videos.truncate(max_count);
        Ok(videos)
    }

    /// Builds the request URL with percent-encoded query parameters.
    fn build_url(&self, endpoint: &str, params: &[(&str, &str)]) -> Url {
        let mut url = self.base_url.clone();
        {
            let mut path = url.path().to_string();
            path.push_str(endpoint);
            url.set_path(&path);
        }
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in params {
                pairs.append_pair(k, v);
            }
            pairs.append_pair("key", &self.api_key);
        }
        url
    }

    /// Sends a GET request and decodes the JSON body as `T`.
    ///
    /// Non-2xx responses are turned into [`YoutubeError::Api`] using the
    /// message from the API's error envelope when one is present.
    async fn get<T: DeserializeOwned>(&self, url: &Url, context: &str) -> Result<T, YoutubeError> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = api_error_message(&body).unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("unknown error")
                    .to_string()
            });
            return Err(YoutubeError::Api {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&body).map_err(|e| YoutubeError::Deserialize {
            context: context.to_string(),
            source: e,
        })
    }
}

/// A channel record plus the uploads playlist id the API reports for it.
#[derive(Debug, Clone)]
pub struct ChannelDetails {
    pub record: ChannelRecord,
    pub uploads: Option<String>,
}

impl ChannelDetails {
    fn from_item(item: ChannelItem) -> Self {
        let uploads = item.uploads_playlist().map(str::to_owned);
        Self {
            record: item.into(),
            uploads,
        }
    }
}

fn api_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("error")?
        .get("message")?
        .as_str()
        .map(str::to_owned)
}

impl VideoSource for YoutubeClient {
    type Error = YoutubeError;

    fn channels(
        &self,
        keywords: &[String],
        min_subscribers: u64,
    ) -> impl Future<Output = Result<Vec<ChannelRecord>, Self::Error>> + Send {
        self.search_channels(keywords, min_subscribers)
    }

    fn videos(
        &self,
        channel_id: &str,
        min_views: u64,
        max_count: usize,
    ) -> impl Future<Output = Result<Vec<VideoRecord>, Self::Error>> + Send {
        self.recent_videos(channel_id, min_views, max_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(base_url: &str) -> YoutubeClient {
        YoutubeClient::with_base_url("test-key", 30, base_url)
            .expect("client construction should not fail")
    }

    #[test]
    fn build_url_appends_endpoint_and_key() {
        let client = test_client("https://www.googleapis.com/youtube/v3");
        let url = client.build_url("videos", &[("part", "snippet"), ("id", "a1")]);
        assert_eq!(
            url.as_str(),
            "https://www.googleapis.com/youtube/v3/videos?part=snippet&id=a1&key=test-key"
        );
    }

    #[test]
    fn build_url_tolerates_trailing_slash() {
        let client = test_client("http://localhost:1234/");
        let url = client.build_url("search", &[("q", "ai")]);
        assert_eq!(url.as_str(), "http://localhost:1234/search?q=ai&key=test-key");
    }

    #[test]
    fn build_url_encodes_special_characters() {
        let client = test_client("http://localhost:1234");
        let url = client.build_url("search", &[("q", "machine learning & ai")]);
        assert!(
            url.as_str().contains("machine+learning+%26+ai"),
            "query param should be percent-encoded: {url}"
        );
    }

    #[test]
    fn results_per_keyword_is_clamped() {
        let client = test_client("http://localhost:1234").with_results_per_keyword(500);
        assert_eq!(client.results_per_keyword, 50);
    }

    #[test]
    fn api_error_message_reads_envelope() {
        let body = r#"{"error":{"code":403,"message":"quota exceeded"}}"#;
        assert_eq!(api_error_message(body).as_deref(), Some("quota exceeded"));
        assert_eq!(api_error_message("not json"), None);
    }
}
