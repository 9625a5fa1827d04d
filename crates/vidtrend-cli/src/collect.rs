//! Corpus collection from a [`VideoSource`].
//!
//! Channel discovery failures abort the run. Per-channel upload failures are
//! logged and skipped so one bad channel does not lose the rest.

use std::collections::HashSet;

use futures::stream::{self, StreamExt};
use vidtrend_core::{ChannelRecord, ChannelVideos, PipelineConfig, VideoSource};

/// Channels whose uploads are fetched at the same time.
pub(crate) const FETCH_CONCURRENCY: usize = 4;

/// Discover channels for the configured keywords and fetch their recent
/// uploads, preserving discovery order.
///
/// # Errors
///
/// Returns the source's error if channel discovery fails.
pub(crate) async fn collect_corpus<S: VideoSource>(
    source: &S,
    config: &PipelineConfig,
    concurrency: usize,
) -> Result<Vec<ChannelVideos>, S::Error> {
    let found = source
        .channels(&config.ai_keywords, config.min_subscribers)
        .await?;

    let mut seen: HashSet<String> = HashSet::new();
    let channels: Vec<ChannelRecord> = found
        .into_iter()
        .filter(|c| seen.insert(c.id.clone()))
        .collect();
    tracing::info!(channels = channels.len(), "fetching recent uploads");

    let corpus: Vec<ChannelVideos> = stream::iter(channels)
        .map(|channel| async move {
            let result = source
                .videos(
                    &channel.id,
                    config.min_views,
                    config.max_videos_per_channel,
                )
                .await;
            (channel, result)
        })
        .buffered(concurrency.max(1))
        .filter_map(|(channel, result)| async move {
            match result {
                Ok(videos) => {
                    tracing::debug!(channel_id = %channel.id, videos = videos.len(), "uploads fetched");
                    Some(ChannelVideos { channel, videos })
                }
                Err(e) => {
                    tracing::warn!(
                        channel_id = %channel.id,
                        error = %e,
                        "skipping channel: upload fetch failed"
                    );
                    None
                }
            }
        })
        .collect()
        .await;

    let videos: usize = corpus.iter().map(|cv| cv.videos.len()).sum();
    tracing::info!(channels = corpus.len(), videos, "corpus collected");
    Ok(corpus)
}
