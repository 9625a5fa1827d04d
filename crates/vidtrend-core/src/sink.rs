//! Persistence contract for the six output tables.

use serde::Serialize;

/// Output tables written at the end of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    InfluencerVideos,
    VideoIdeas,
    VideoScripts,
    Influencers,
    TrendingTopics,
    SuccessfulHashtags,
}

impl Table {
    pub const ALL: [Table; 6] = [
        Table::InfluencerVideos,
        Table::VideoIdeas,
        Table::VideoScripts,
        Table::Influencers,
        Table::TrendingTopics,
        Table::SuccessfulHashtags,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Table::InfluencerVideos => "influencer_videos",
            Table::VideoIdeas => "video_ideas",
            Table::VideoScripts => "video_scripts",
            Table::Influencers => "influencers",
            Table::TrendingTopics => "trending_topics",
            Table::SuccessfulHashtags => "successful_hashtags",
        }
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Writes one table per call. Each row struct's field order is its column order.
pub trait TableSink {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Persist `rows` as the full contents of `table`.
    ///
    /// # Errors
    ///
    /// Implementation-defined I/O or serialization failures.
    fn write_table<R: Serialize>(&mut self, table: Table, rows: &[R]) -> Result<(), Self::Error>;
}
