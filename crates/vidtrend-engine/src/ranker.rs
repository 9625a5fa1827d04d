//! Influencer ranking.

#![allow(clippy::cast_precision_loss)]

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use vidtrend_core::{ChannelVideos, InfluencerProfile, PipelineConfig};

use crate::metrics;

/// Drop channels below the subscriber threshold and videos below the view
/// threshold, keeping at most `max_videos_per_channel` uploads per channel.
///
/// Channels repeated across keyword searches are kept once, first wins.
#[must_use]
pub fn eligible_channels(corpus: &[ChannelVideos], config: &PipelineConfig) -> Vec<ChannelVideos> {
    let mut seen: HashSet<&str> = HashSet::new();
    corpus
        .iter()
        .filter(|cv| cv.channel.subscriber_count >= config.min_subscribers)
        .filter(|cv| seen.insert(cv.channel.id.as_str()))
        .map(|cv| ChannelVideos {
            channel: cv.channel.clone(),
            videos: cv
                .videos
                .iter()
                .filter(|v| v.view_count >= config.min_views)
                .take(config.max_videos_per_channel)
                .cloned()
                .collect(),
        })
        .collect()
}

/// Score and order channels, best first, keeping the top `top_influencers`.
///
/// The composite is `growth/ceiling`, AI relevance and log-scaled subscribers
/// (relative to the largest channel in the batch), each in `[0, 1]` and
/// weighted by [`vidtrend_core::RankWeights`]. Ties keep the lower channel id first.
///
/// A channel with no uploads left after the view filter scores 0 for both
/// growth and relevance.
#[must_use]
pub fn rank_influencers(
    corpus: &[ChannelVideos],
    config: &PipelineConfig,
    now: DateTime<Utc>,
) -> Vec<InfluencerProfile> {
    let eligible = eligible_channels(corpus, config);
    let max_subscribers = eligible
        .iter()
        .map(|cv| cv.channel.subscriber_count)
        .max()
        .unwrap_or(0);
    let weights = &config.rank_weights;

    let mut profiles: Vec<InfluencerProfile> = eligible
        .into_iter()
        .map(|cv| {
            let growth = if cv.videos.is_empty() {
                0.0
            } else {
                metrics::growth_score(&cv.channel, now, config.growth_ceiling)
            };
            let relevance = metrics::ai_relevance_score(
                &cv.videos,
                &config.ai_keywords,
                config.relevance_saturation,
            );
            let audience = metrics::log_normalize(cv.channel.subscriber_count, max_subscribers);
            let rank_score = weights.growth * (growth / config.growth_ceiling)
                + weights.relevance * relevance
                + weights.subscribers * audience;
            InfluencerProfile {
                videos_considered: cv.videos.len(),
                channel: cv.channel,
                growth_score: growth,
                ai_relevance_score: relevance,
                rank_score,
                rank: 0,
            }
        })
        .collect();

    profiles.sort_by(|a, b| {
        b.rank_score
            .total_cmp(&a.rank_score)
            .then_with(|| a.channel.id.cmp(&b.channel.id))
    });
    profiles.truncate(config.top_influencers);
    for (i, p) in profiles.iter_mut().enumerate() {
        p.rank = i + 1;
    }
    profiles
}
