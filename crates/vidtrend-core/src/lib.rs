//! Shared domain types, configuration and collaborator contracts for vidtrend.

pub mod app_config;
pub mod config;
pub mod error;
pub mod fixture;
pub mod ideas;
pub mod pipeline_config;
pub mod rankings;
pub mod records;
pub mod sink;
pub mod source;
pub mod tables;

pub use app_config::AppConfig;
pub use config::{
    load_app_config, load_app_config_from_env, load_app_config_with_pipeline, load_pipeline_config,
};
pub use error::{ConfigError, CoreError};
pub use fixture::CorpusFixture;
pub use ideas::{Category, ContentIdea, Difficulty, Script, ScriptSection, SectionKind};
pub use pipeline_config::{IdeaWeights, PerformanceWeights, PipelineConfig, RankWeights};
pub use rankings::{HashtagEntry, InfluencerProfile, TrendEntry};
pub use records::{ChannelRecord, ChannelVideos, ScoredVideo, VideoRecord};
pub use sink::{Table, TableSink};
pub use source::VideoSource;
pub use tables::{
    InfluencerRow, InfluencerVideoRow, SuccessfulHashtagRow, TrendingTopicRow, VideoIdeaRow,
    VideoScriptRow,
};
