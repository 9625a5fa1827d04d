//! Tuning knobs consumed by every pipeline stage.
//!
//! A [`PipelineConfig`] is built once (defaults, then an optional YAML file,
//! then environment overrides), validated with [`PipelineConfig::validate`],
//! and passed by reference into each stage. Nothing in the engine reads
//! process-wide state.

use std::collections::BTreeSet;

use serde::{Deserialize, Deserializer};

use crate::ConfigError;

const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

const DEFAULT_AI_KEYWORDS: &[&str] = &[
    "artificial intelligence",
    "machine learning",
    "deep learning",
    "ai tutorial",
    "neural networks",
    "chatgpt",
    "generative ai",
    "ai tools",
    "automation",
    "ai news",
];

const DEFAULT_STOP_WORDS: &[&str] = &[
    "the", "and", "for", "are", "but", "not", "you", "your", "all", "any", "can", "had", "her",
    "was", "one", "our", "out", "has", "have", "his", "how", "its", "new", "now", "see", "who",
    "did", "get", "got", "let", "may", "use", "way", "with", "this", "that", "from", "they",
    "will", "what", "when", "where", "which", "while", "about", "into", "more", "most", "some",
    "than", "then", "them", "there", "these", "those", "their", "just", "like", "also", "only",
    "over", "very", "been", "being", "were", "here", "make", "made", "each", "even", "much",
    "many", "such", "want", "does", "doing", "done", "should", "would", "could", "because",
    "after", "before", "again", "other", "every", "through", "video", "videos", "channel",
    "subscribe", "watch", "link", "links", "below", "http", "https", "www", "com",
];

/// Sub-weights of the per-video performance composite. Must sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct PerformanceWeights {
    pub views: f64,
    pub engagement: f64,
    pub recency: f64,
}

impl Default for PerformanceWeights {
    fn default() -> Self {
        Self {
            views: 0.5,
            engagement: 0.3,
            recency: 0.2,
        }
    }
}

/// Weights of the influencer composite. Must sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct RankWeights {
    pub growth: f64,
    pub relevance: f64,
    pub subscribers: f64,
}

impl Default for RankWeights {
    fn default() -> Self {
        Self {
            growth: 0.3,
            relevance: 0.3,
            subscribers: 0.4,
        }
    }
}

/// Weights of the idea score. Must sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct IdeaWeights {
    pub trend: f64,
    pub hashtag: f64,
}

impl Default for IdeaWeights {
    fn default() -> Self {
        Self {
            trend: 0.7,
            hashtag: 0.3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Phrases that mark a video as AI content; matched case-insensitively on word boundaries.
    pub ai_keywords: Vec<String>,
    /// Lowercased on load so they match the lowercased tokens.
    #[serde(deserialize_with = "lowercase_set")]
    pub stop_words: BTreeSet<String>,
    pub performance_weights: PerformanceWeights,
    pub rank_weights: RankWeights,
    pub idea_weights: IdeaWeights,
    pub min_subscribers: u64,
    pub min_views: u64,
    pub max_videos_per_channel: usize,
    /// Upper clip for views-per-day growth.
    pub growth_ceiling: f64,
    /// Videos older than this get no recency credit.
    pub recency_window_days: f64,
    /// Distinct keyword hits at which a video counts as fully AI-relevant.
    pub relevance_saturation: usize,
    pub min_token_len: usize,
    pub top_trends: usize,
    pub top_hashtags: usize,
    pub top_influencers: usize,
    /// How many of the top trends the idea generator draws topics from.
    pub idea_topic_pool: usize,
    pub idea_hashtag_count: usize,
    pub idea_retry_cap: usize,
    /// Percentile (0-1) of historical views that a 100-score idea is projected to reach.
    pub view_percentile: f64,
    pub script_min_words: usize,
    pub script_max_words: usize,
    pub words_per_minute: f64,
    /// Maximum uses of any single elaboration sentence template per script.
    pub filler_repetition_cap: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            ai_keywords: DEFAULT_AI_KEYWORDS.iter().map(|s| (*s).to_string()).collect(),
            stop_words: DEFAULT_STOP_WORDS.iter().map(|s| (*s).to_string()).collect(),
            performance_weights: PerformanceWeights::default(),
            rank_weights: RankWeights::default(),
            idea_weights: IdeaWeights::default(),
            min_subscribers: 50_000,
            min_views: 100_000,
            max_videos_per_channel: 20,
            growth_ceiling: 1_000_000.0,
            recency_window_days: 365.0,
            relevance_saturation: 2,
            min_token_len: 3,
            top_trends: 50,
            top_hashtags: 50,
            top_influencers: 20,
            idea_topic_pool: 20,
            idea_hashtag_count: 8,
            idea_retry_cap: 5,
            view_percentile: 0.75,
            script_min_words: 500,
            script_max_words: 2000,
            words_per_minute: 155.0,
            filler_repetition_cap: 2,
        }
    }
}

impl PipelineConfig {
    /// Check every weight, bound and size before any stage runs.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidConfiguration`] naming the first offending setting.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let pw = &self.performance_weights;
        check_weight_set(
            "performance_weights",
            &[
                ("views", pw.views),
                ("engagement", pw.engagement),
                ("recency", pw.recency),
            ],
        )?;
        let rw = &self.rank_weights;
        check_weight_set(
            "rank_weights",
            &[
                ("growth", rw.growth),
                ("relevance", rw.relevance),
                ("subscribers", rw.subscribers),
            ],
        )?;
        let iw = &self.idea_weights;
        check_weight_set(
            "idea_weights",
            &[("trend", iw.trend), ("hashtag", iw.hashtag)],
        )?;

        check_positive("growth_ceiling", self.growth_ceiling)?;
        check_positive("recency_window_days", self.recency_window_days)?;
        check_positive("words_per_minute", self.words_per_minute)?;

        if !(self.view_percentile.is_finite() && (0.0..=1.0).contains(&self.view_percentile)) {
            return Err(invalid(format!(
                "view_percentile must be within [0, 1], got {}",
                self.view_percentile
            )));
        }
        if self.relevance_saturation == 0 {
            return Err(invalid("relevance_saturation must be at least 1"));
        }
        if self.min_token_len == 0 {
            return Err(invalid("min_token_len must be at least 1"));
        }
        if self.script_min_words > self.script_max_words {
            return Err(invalid(format!(
                "script word range is empty: min {} > max {}",
                self.script_min_words, self.script_max_words
            )));
        }
        if self.max_videos_per_channel == 0 {
            return Err(invalid("max_videos_per_channel must be at least 1"));
        }
        if self.ai_keywords.iter().any(|k| k.trim().is_empty()) {
            return Err(invalid("ai_keywords must not contain blank entries"));
        }
        Ok(())
    }
}

fn lowercase_set<'de, D>(deserializer: D) -> Result<BTreeSet<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let words = Vec::<String>::deserialize(deserializer)?;
    Ok(words
        .iter()
        .map(|w| w.trim().to_lowercase())
        .filter(|w| !w.is_empty())
        .collect())
}

fn invalid(msg: impl Into<String>) -> ConfigError {
    ConfigError::InvalidConfiguration(msg.into())
}

fn check_positive(name: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(format!("{name} must be a positive number, got {value}")))
    }
}

fn check_weight_set(set: &str, weights: &[(&str, f64)]) -> Result<(), ConfigError> {
    for &(name, w) in weights {
        if !w.is_finite() || w < 0.0 {
            return Err(invalid(format!(
                "{set}.{name} must be a non-negative number, got {w}"
            )));
        }
    }
    let sum: f64 = weights.iter().map(|&(_, w)| w).sum();
    if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        return Err(invalid(format!("{set} must sum to 1.0, got {sum}")));
    }
    Ok(())
}
