use serde::Serialize;

use crate::records::ChannelRecord;

/// A ranked keyword mined from the scored corpus.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendEntry {
    pub keyword: String,
    /// Number of scanned videos containing the keyword. Never exceeds the corpus size.
    pub count: usize,
    /// Sum of the performance scores of those videos.
    pub weight: f64,
    /// 1-based position in the ranked output.
    pub rank: usize,
}

/// A ranked `#`-prefixed token. `hashtag` keeps its leading `#`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HashtagEntry {
    pub hashtag: String,
    pub count: usize,
    pub weight: f64,
    pub rank: usize,
}

/// A channel that passed the influencer filters, with its derived scores.
#[derive(Debug, Clone, PartialEq)]
pub struct InfluencerProfile {
    pub channel: ChannelRecord,
    /// Views per day of channel age, clipped to the configured ceiling.
    pub growth_score: f64,
    /// Fraction in `[0, 1]` of recent uploads matching the AI keyword list.
    pub ai_relevance_score: f64,
    /// Weighted composite the ranking is ordered by.
    pub rank_score: f64,
    pub rank: usize,
    /// Videos that passed the view threshold and fed the relevance score.
    pub videos_considered: usize,
}
