//! Per-video and per-channel scores.
//!
//! Every function here is pure: the batch maximum and the reference time are
//! computed once by the caller and passed in, so scores never depend on the
//! wall clock or on the order videos arrive in.

#![allow(clippy::cast_precision_loss)]

use chrono::{DateTime, Utc};
use vidtrend_core::{ChannelRecord, PerformanceWeights, PipelineConfig, ScoredVideo, VideoRecord};

use crate::error::EngineError;
use crate::text;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Batch-level inputs to the performance composite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatchStats {
    pub max_views: u64,
    pub now: DateTime<Utc>,
}

impl BatchStats {
    #[must_use]
    pub fn from_videos<'a>(
        videos: impl IntoIterator<Item = &'a VideoRecord>,
        now: DateTime<Utc>,
    ) -> Self {
        let max_views = videos.into_iter().map(|v| v.view_count).max().unwrap_or(0);
        Self { max_views, now }
    }
}

/// `(likes + comments) / max(views, 1)`. Unbounded above; callers clamp.
#[must_use]
pub fn engagement_rate(video: &VideoRecord) -> f64 {
    let interactions = video.like_count.saturating_add(video.comment_count) as f64;
    interactions / video.view_count.max(1) as f64
}

/// Log-scaled `value / max` in `[0, 1]`. Zero when the batch max is zero.
#[must_use]
pub fn log_normalize(value: u64, max: u64) -> f64 {
    if max == 0 {
        return 0.0;
    }
    let scaled = (value as f64).ln_1p() / (max as f64).ln_1p();
    scaled.clamp(0.0, 1.0)
}

/// Linear decay from 1 at `now` to 0 at `window_days` old.
/// Future-dated uploads count as brand new. A non-positive window gives 0.
#[must_use]
pub fn recency(published_at: DateTime<Utc>, now: DateTime<Utc>, window_days: f64) -> f64 {
    if window_days.is_nan() || window_days <= 0.0 {
        return 0.0;
    }
    let age_days = ((now - published_at).num_seconds() as f64 / SECONDS_PER_DAY).max(0.0);
    ((window_days - age_days).max(0.0) / window_days).clamp(0.0, 1.0)
}

#[must_use]
pub fn performance_score(
    video: &VideoRecord,
    batch: &BatchStats,
    weights: &PerformanceWeights,
    window_days: f64,
) -> f64 {
    let views = log_normalize(video.view_count, batch.max_views);
    let engagement = engagement_rate(video).min(1.0);
    let fresh = recency(video.published_at, batch.now, window_days);
    weights.views * views + weights.engagement * engagement + weights.recency * fresh
}

/// Average views per day since the channel was created, clipped to `ceiling`.
#[must_use]
pub fn growth_score(channel: &ChannelRecord, now: DateTime<Utc>, ceiling: f64) -> f64 {
    let age_days = (now - channel.published_at).num_days().max(1);
    (channel.view_count as f64 / age_days as f64).min(ceiling)
}

/// Mean over `videos` of `min(distinct keyword hits, saturation) / saturation`.
///
/// Keywords are matched case-insensitively as whole-word phrases against the
/// title, description and tags. An empty video list scores zero.
#[must_use]
pub fn ai_relevance_score(videos: &[VideoRecord], keywords: &[String], saturation: usize) -> f64 {
    if videos.is_empty() || saturation == 0 {
        return 0.0;
    }
    let phrases: Vec<Vec<String>> = keywords
        .iter()
        .map(|k| text::words(k))
        .filter(|p| !p.is_empty())
        .collect();

    let total: f64 = videos
        .iter()
        .map(|video| {
            let haystack = video_words(video);
            let mut hit: Vec<&[String]> = Vec::new();
            for phrase in &phrases {
                if !hit.contains(&phrase.as_slice()) && text::contains_phrase(&haystack, phrase) {
                    hit.push(phrase);
                }
            }
            hit.len().min(saturation) as f64 / saturation as f64
        })
        .sum();
    total / videos.len() as f64
}

fn video_words(video: &VideoRecord) -> Vec<String> {
    let mut words = text::words(&video.title);
    // Separator tokens keep phrases from matching across field boundaries.
    words.push(String::new());
    words.extend(text::words(&video.description));
    for tag in &video.tags {
        words.push(String::new());
        words.extend(text::words(tag));
    }
    words
}

/// Validate and score a batch of videos against one shared [`BatchStats`].
///
/// Output order matches input order.
///
/// # Errors
///
/// Returns [`EngineError::Config`] if `config` fails validation, or
/// [`EngineError::Record`] for the first video missing its id or channel.
pub fn score_videos(
    videos: &[VideoRecord],
    config: &PipelineConfig,
    now: DateTime<Utc>,
) -> Result<Vec<ScoredVideo>, EngineError> {
    config.validate()?;
    for video in videos {
        video.validate()?;
    }
    let batch = BatchStats::from_videos(videos, now);
    Ok(videos
        .iter()
        .map(|video| ScoredVideo {
            video: video.clone(),
            engagement_rate: engagement_rate(video),
            performance_score: performance_score(
                video,
                &batch,
                &config.performance_weights,
                config.recency_window_days,
            ),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 9, 1, 0, 0, 0).unwrap()
    }

    fn video(id: &str, views: u64, likes: u64, comments: u64) -> VideoRecord {
        VideoRecord {
            id: id.to_string(),
            channel_id: "UC1".to_string(),
            channel_title: "Channel".to_string(),
            title: format!("Video {id}"),
            description: String::new(),
            published_at: now() - Duration::days(10),
            view_count: views,
            like_count: likes,
            comment_count: comments,
            tags: Vec::new(),
            duration_secs: None,
            thumbnail_url: None,
        }
    }

    fn channel(views: u64, age_days: i64) -> ChannelRecord {
        ChannelRecord {
            id: "UC1".to_string(),
            title: "Channel".to_string(),
            description: String::new(),
            subscriber_count: 100_000,
            view_count: views,
            video_count: 10,
            published_at: now() - Duration::days(age_days),
            custom_url: None,
            country: None,
            thumbnail_url: None,
        }
    }

    #[test]
    fn engagement_rate_handles_zero_views() {
        let v = video("a", 0, 5, 5);
        assert!((engagement_rate(&v) - 10.0).abs() < 1e-12);
        let silent = video("b", 0, 0, 0);
        assert!(engagement_rate(&silent).abs() < f64::EPSILON);
    }

    #[test]
    fn log_normalize_is_bounded() {
        assert!(log_normalize(10, 0).abs() < f64::EPSILON);
        assert!((log_normalize(1_000, 1_000) - 1.0).abs() < 1e-12);
        let mid = log_normalize(1_000, 1_000_000);
        assert!(mid > 0.0 && mid < 1.0);
    }

    #[test]
    fn recency_decays_linearly_and_floors_at_zero() {
        let n = now();
        assert!((recency(n, n, 100.0) - 1.0).abs() < 1e-12);
        assert!((recency(n - Duration::days(50), n, 100.0) - 0.5).abs() < 1e-9);
        assert!(recency(n - Duration::days(400), n, 100.0).abs() < f64::EPSILON);
        assert!((recency(n + Duration::days(3), n, 100.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn performance_ranks_follow_views_when_engagement_is_proportional() {
        let videos = vec![
            video("small", 100_000, 5_000, 500),
            video("big", 1_000_000, 50_000, 5_000),
            video("mid", 500_000, 25_000, 2_500),
        ];
        let scored = score_videos(&videos, &PipelineConfig::default(), now()).unwrap();
        let mut ordered: Vec<&ScoredVideo> = scored.iter().collect();
        ordered.sort_by(|a, b| b.performance_score.total_cmp(&a.performance_score));
        let ids: Vec<&str> = ordered.iter().map(|s| s.video.id.as_str()).collect();
        assert_eq!(ids, vec!["big", "mid", "small"]);
        for s in &scored {
            assert!((s.engagement_rate - 0.055).abs() < 1e-9);
            assert!((0.0..=1.0).contains(&s.performance_score));
        }
    }

    #[test]
    fn performance_is_clamped_when_engagement_exceeds_views() {
        let videos = vec![video("odd", 10, 500, 500)];
        let scored = score_videos(&videos, &PipelineConfig::default(), now()).unwrap();
        assert!(scored[0].performance_score <= 1.0);
    }

    #[test]
    fn zero_window_gives_no_recency_credit() {
        let n = now();
        assert!(recency(n, n, 0.0).abs() < f64::EPSILON);
        assert!(recency(n - Duration::days(3), n, -5.0).abs() < f64::EPSILON);
        assert!(recency(n, n, f64::NAN).abs() < f64::EPSILON);
    }

    #[test]
    fn score_videos_rejects_invalid_config() {
        let config = PipelineConfig {
            recency_window_days: 0.0,
            ..PipelineConfig::default()
        };
        let err = score_videos(&[video("a", 10, 0, 0)], &config, now()).unwrap_err();
        assert!(matches!(err, EngineError::Config(_)));
    }

    #[test]
    fn all_zero_counters_score_finite_and_bounded() {
        let videos = vec![video("a", 0, 0, 0), video("b", 0, 0, 0), video("c", 0, 0, 0)];
        let scored = score_videos(&videos, &PipelineConfig::default(), now()).unwrap();
        assert_eq!(scored.len(), 3);
        for s in &scored {
            assert!(s.engagement_rate.is_finite());
            assert!((0.0..=1.0).contains(&s.engagement_rate));
            assert!(s.performance_score.is_finite());
            assert!((0.0..=1.0).contains(&s.performance_score));
        }
    }

    #[test]
    fn score_videos_rejects_records_without_channel() {
        let mut v = video("a", 10, 0, 0);
        v.channel_id = String::new();
        let err = score_videos(&[v], &PipelineConfig::default(), now()).unwrap_err();
        assert!(matches!(err, EngineError::Record(_)));
    }

    #[test]
    fn growth_is_views_per_day_with_ceiling() {
        let c = channel(1_000_000, 100);
        assert!((growth_score(&c, now(), 1e6) - 10_000.0).abs() < 1e-9);
        assert!((growth_score(&c, now(), 500.0) - 500.0).abs() < 1e-9);
    }

    #[test]
    fn growth_treats_brand_new_channels_as_one_day_old() {
        let c = channel(3_000, 0);
        assert!((growth_score(&c, now(), 1e6) - 3_000.0).abs() < 1e-9);
    }

    #[test]
    fn relevance_counts_distinct_phrases_up_to_saturation() {
        let keywords = vec![
            "chatgpt".to_string(),
            "machine learning".to_string(),
            "ai".to_string(),
        ];
        let mut both = video("a", 1, 0, 0);
        both.title = "ChatGPT and Machine Learning basics".to_string();
        let mut one = video("b", 1, 0, 0);
        one.tags = vec!["#ChatGPT".to_string()];
        let mut none = video("c", 1, 0, 0);
        none.title = "Maintaining a garden".to_string();

        let score = ai_relevance_score(&[both, one, none], &keywords, 2);
        assert!((score - 0.5).abs() < 1e-12);
    }

    #[test]
    fn relevance_does_not_match_inside_words() {
        let mut v = video("a", 1, 0, 0);
        v.title = "Maintaining rain gauges".to_string();
        assert!(ai_relevance_score(&[v], &["ai".to_string()], 1).abs() < f64::EPSILON);
    }

    #[test]
    fn relevance_of_empty_list_is_zero() {
        assert!(ai_relevance_score(&[], &["ai".to_string()], 2).abs() < f64::EPSILON);
    }
}
