//! End-to-end run over an already-fetched corpus.

use chrono::{DateTime, Utc};
use vidtrend_core::{
    Category, ChannelVideos, ContentIdea, InfluencerProfile, InfluencerRow, InfluencerVideoRow,
    PipelineConfig, ScoredVideo, Script, SuccessfulHashtagRow, Table, TableSink,
    TrendingTopicRow, VideoIdeaRow, VideoRecord, VideoScriptRow,
};

use crate::error::EngineError;
use crate::ideas::generate_ideas;
use crate::metrics::score_videos;
use crate::ranker::{eligible_channels, rank_influencers};
use crate::script::synthesize_scripts;
use crate::trends::{extract_trends, TrendTables};

/// Per-run inputs that are not tuning knobs.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOptions {
    /// Reference time for recency and growth. Fixed for the whole run.
    pub now: DateTime<Utc>,
    pub idea_count: usize,
    pub script_count: usize,
    pub categories: Vec<Category>,
}

impl RunOptions {
    #[must_use]
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now,
            idea_count: 50,
            script_count: 10,
            categories: Category::ALL.to_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutput {
    pub influencers: Vec<InfluencerProfile>,
    /// Every eligible video, best performer first.
    pub videos: Vec<ScoredVideo>,
    pub trends: TrendTables,
    pub ideas: Vec<ContentIdea>,
    pub scripts: Vec<Script>,
}

impl PipelineOutput {
    /// Write all six tables to `sink`.
    ///
    /// # Errors
    ///
    /// Returns the sink's error for the first table that fails to write.
    pub fn write_tables<S: TableSink>(&self, sink: &mut S) -> Result<(), S::Error> {
        let videos: Vec<InfluencerVideoRow> = self.videos.iter().map(Into::into).collect();
        sink.write_table(Table::InfluencerVideos, &videos)?;
        let ideas: Vec<VideoIdeaRow> = self.ideas.iter().map(Into::into).collect();
        sink.write_table(Table::VideoIdeas, &ideas)?;
        let scripts: Vec<VideoScriptRow> = self.scripts.iter().map(Into::into).collect();
        sink.write_table(Table::VideoScripts, &scripts)?;
        let influencers: Vec<InfluencerRow> = self.influencers.iter().map(Into::into).collect();
        sink.write_table(Table::Influencers, &influencers)?;
        let topics: Vec<TrendingTopicRow> = self.trends.topics.iter().map(Into::into).collect();
        sink.write_table(Table::TrendingTopics, &topics)?;
        let hashtags: Vec<SuccessfulHashtagRow> =
            self.trends.hashtags.iter().map(Into::into).collect();
        sink.write_table(Table::SuccessfulHashtags, &hashtags)?;
        Ok(())
    }

    /// Sum of subscriber counts over the ranked influencers.
    #[must_use]
    pub fn total_subscribers(&self) -> u64 {
        self.influencers
            .iter()
            .map(|p| p.channel.subscriber_count)
            .sum()
    }

    /// Mean view count over every scored video; 0 when there are none.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn average_views(&self) -> f64 {
        if self.videos.is_empty() {
            return 0.0;
        }
        let total: u64 = self.videos.iter().map(|v| v.video.view_count).sum();
        total as f64 / self.videos.len() as f64
    }

    /// Idea counts per category, in [`Category::ALL`] order, zero counts omitted.
    #[must_use]
    pub fn ideas_per_category(&self) -> Vec<(Category, usize)> {
        Category::ALL
            .iter()
            .map(|&c| (c, self.ideas.iter().filter(|i| i.category == c).count()))
            .filter(|&(_, n)| n > 0)
            .collect()
    }

    #[must_use]
    pub fn total_script_words(&self) -> usize {
        self.scripts.iter().map(|s| s.word_count).sum()
    }

    pub fn log_summary(&self) {
        tracing::info!(
            influencers = self.influencers.len(),
            total_subscribers = self.total_subscribers(),
            videos = self.videos.len(),
            average_views = self.average_views().round(),
            topics = self.trends.topics.len(),
            hashtags = self.trends.hashtags.len(),
            ideas = self.ideas.len(),
            scripts = self.scripts.len(),
            script_words = self.total_script_words(),
            "pipeline summary"
        );
        for (category, count) in self.ideas_per_category() {
            tracing::info!(category = category.as_str(), ideas = count, "ideas by category");
        }
        if let Some(top) = self.influencers.first() {
            tracing::info!(channel = %top.channel.title, score = top.rank_score, "top influencer");
        }
        if let Some(top) = self.trends.topics.first() {
            tracing::info!(keyword = %top.keyword, count = top.count, "top trending topic");
        }
        if let Some(top) = self.trends.hashtags.first() {
            tracing::info!(hashtag = %top.hashtag, count = top.count, "top hashtag");
        }
        if let Some(top) = self.ideas.first() {
            tracing::info!(title = %top.title, score = top.trend_score, "top idea");
        }
        let short = self.scripts.iter().filter(|s| !s.target_met).count();
        if short > 0 {
            tracing::warn!(scripts = short, "scripts outside the target word range");
        }
    }
}

/// Run every analysis stage over `corpus`.
///
/// Config is validated before any stage runs. The same corpus, config and
/// options always produce the same output.
///
/// # Errors
///
/// Returns [`EngineError::Config`] for an invalid config, or
/// [`EngineError::Record`] for a channel or video missing its identifiers.
pub fn run_pipeline(
    corpus: &[ChannelVideos],
    config: &PipelineConfig,
    options: &RunOptions,
) -> Result<PipelineOutput, EngineError> {
    config.validate()?;
    for cv in corpus {
        cv.channel.validate()?;
    }

    let eligible = eligible_channels(corpus, config);
    let records: Vec<VideoRecord> = eligible
        .iter()
        .flat_map(|cv| cv.videos.iter().cloned())
        .collect();
    tracing::info!(
        channels = eligible.len(),
        videos = records.len(),
        "scoring eligible corpus"
    );

    let mut videos = score_videos(&records, config, options.now)?;
    videos.sort_by(|a, b| b.performance_score.total_cmp(&a.performance_score));

    let influencers = rank_influencers(&eligible, config, options.now);
    let trends = extract_trends(&videos, config);
    if trends.topics.is_empty() {
        tracing::warn!("no trending topics found in corpus");
    }

    let ideas = generate_ideas(
        &trends,
        &videos,
        &options.categories,
        options.idea_count,
        config,
    );
    let scripts = synthesize_scripts(&ideas, options.script_count, config);

    Ok(PipelineOutput {
        influencers,
        videos,
        trends,
        ideas,
        scripts,
    })
}
