//! Flat row shapes for the output tables, one struct per [`crate::Table`].

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::ideas::{ContentIdea, Script};
use crate::rankings::{HashtagEntry, InfluencerProfile, TrendEntry};
use crate::records::ScoredVideo;

const SNIPPET_CHARS: usize = 200;
const LIST_SEPARATOR: &str = ";";

#[derive(Debug, Clone, Serialize)]
pub struct InfluencerVideoRow {
    pub video_id: String,
    pub title: String,
    pub channel_title: String,
    pub channel_id: String,
    pub view_count: u64,
    pub like_count: u64,
    pub comment_count: u64,
    pub published_at: DateTime<Utc>,
    pub duration_secs: Option<u32>,
    pub thumbnail_url: Option<String>,
    pub video_url: String,
    pub tags: String,
    pub engagement_rate: f64,
    pub performance_score: f64,
    pub description_snippet: String,
}

impl From<&ScoredVideo> for InfluencerVideoRow {
    fn from(scored: &ScoredVideo) -> Self {
        let v = &scored.video;
        Self {
            video_id: v.id.clone(),
            title: v.title.clone(),
            channel_title: v.channel_title.clone(),
            channel_id: v.channel_id.clone(),
            view_count: v.view_count,
            like_count: v.like_count,
            comment_count: v.comment_count,
            published_at: v.published_at,
            duration_secs: v.duration_secs,
            thumbnail_url: v.thumbnail_url.clone(),
            video_url: v.watch_url(),
            tags: v.tags.join(LIST_SEPARATOR),
            engagement_rate: round4(scored.engagement_rate),
            performance_score: round4(scored.performance_score),
            description_snippet: snippet(&v.description),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct VideoIdeaRow {
    pub id: usize,
    pub title: String,
    pub category: String,
    pub hashtags: String,
    pub thumbnail_concept: String,
    pub trend_score: f64,
    pub estimated_views: u64,
    pub difficulty: String,
    pub target_audience: String,
    pub key_topics: String,
}

impl From<&ContentIdea> for VideoIdeaRow {
    fn from(idea: &ContentIdea) -> Self {
        Self {
            id: idea.id,
            title: idea.title.clone(),
            category: idea.category.to_string(),
            hashtags: idea.hashtags.join(LIST_SEPARATOR),
            thumbnail_concept: idea.thumbnail_concept.clone(),
            trend_score: round4(idea.trend_score),
            estimated_views: idea.estimated_views,
            difficulty: idea.difficulty.to_string(),
            target_audience: idea.target_audience.to_string(),
            key_topics: idea.topics.join(LIST_SEPARATOR),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct VideoScriptRow {
    pub idea_id: usize,
    pub title: String,
    pub category: String,
    pub script: String,
    pub hashtags: String,
    pub thumbnail_concept: String,
    pub estimated_duration: String,
    pub estimated_minutes: f64,
    pub word_count: usize,
    pub target_met: bool,
    pub key_points: String,
    pub call_to_action: String,
}

impl From<&Script> for VideoScriptRow {
    fn from(script: &Script) -> Self {
        Self {
            idea_id: script.idea_id,
            title: script.title.clone(),
            category: script.category.to_string(),
            script: script.render(),
            hashtags: script.hashtags.join(LIST_SEPARATOR),
            thumbnail_concept: script.thumbnail_concept.clone(),
            estimated_duration: script.duration_label(),
            estimated_minutes: round4(script.estimated_minutes),
            word_count: script.word_count,
            target_met: script.target_met,
            key_points: script.key_points().join(LIST_SEPARATOR),
            call_to_action: script.call_to_action().unwrap_or_default().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct InfluencerRow {
    pub rank: usize,
    pub channel_id: String,
    pub channel_title: String,
    pub subscriber_count: u64,
    pub video_count: u64,
    pub view_count: u64,
    pub published_at: DateTime<Utc>,
    pub growth_score: f64,
    pub ai_relevance_score: f64,
    pub rank_score: f64,
    pub videos_considered: usize,
    pub custom_url: Option<String>,
    pub country: Option<String>,
    pub thumbnail_url: Option<String>,
    pub description_snippet: String,
}

impl From<&InfluencerProfile> for InfluencerRow {
    fn from(p: &InfluencerProfile) -> Self {
        let c = &p.channel;
        Self {
            rank: p.rank,
            channel_id: c.id.clone(),
            channel_title: c.title.clone(),
            subscriber_count: c.subscriber_count,
            video_count: c.video_count,
            view_count: c.view_count,
            published_at: c.published_at,
            growth_score: round4(p.growth_score),
            ai_relevance_score: round4(p.ai_relevance_score),
            rank_score: round4(p.rank_score),
            videos_considered: p.videos_considered,
            custom_url: c.custom_url.clone(),
            country: c.country.clone(),
            thumbnail_url: c.thumbnail_url.clone(),
            description_snippet: snippet(&c.description),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TrendingTopicRow {
    pub rank: usize,
    pub topic: String,
    pub frequency: usize,
    pub weight: f64,
}

impl From<&TrendEntry> for TrendingTopicRow {
    fn from(t: &TrendEntry) -> Self {
        Self {
            rank: t.rank,
            topic: t.keyword.clone(),
            frequency: t.count,
            weight: round4(t.weight),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SuccessfulHashtagRow {
    pub rank: usize,
    pub hashtag: String,
    pub frequency: usize,
    pub weight: f64,
}

impl From<&HashtagEntry> for SuccessfulHashtagRow {
    fn from(h: &HashtagEntry) -> Self {
        Self {
            rank: h.rank,
            hashtag: h.hashtag.clone(),
            frequency: h.count,
            weight: round4(h.weight),
        }
    }
}

fn round4(x: f64) -> f64 {
    (x * 10_000.0).round() / 10_000.0
}

fn snippet(text: &str) -> String {
    if text.chars().count() <= SNIPPET_CHARS {
        return text.to_string();
    }
    let mut out: String = text.chars().take(SNIPPET_CHARS).collect();
    out.push_str("...");
    out
}
