//! Fetch contract implemented by data collaborators (live API client, fixtures).

use std::future::Future;

use crate::records::{ChannelRecord, VideoRecord};

/// Supplies raw channel and video records to the pipeline.
///
/// Implementations may return fewer records than requested and must return an
/// empty `Vec`, not an error, when nothing matches.
pub trait VideoSource {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Channels matching any of `keywords` with at least `min_subscribers`.
    fn channels(
        &self,
        keywords: &[String],
        min_subscribers: u64,
    ) -> impl Future<Output = Result<Vec<ChannelRecord>, Self::Error>> + Send;

    /// Up to `max_count` recent uploads of `channel_id` with at least `min_views`.
    fn videos(
        &self,
        channel_id: &str,
        min_views: u64,
        max_count: usize,
    ) -> impl Future<Output = Result<Vec<VideoRecord>, Self::Error>> + Send;
}
