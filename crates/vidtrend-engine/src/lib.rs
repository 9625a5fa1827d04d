//! Scoring, trend mining, ranking and content generation for vidtrend.
//!
//! All stages are synchronous and pure over their inputs. Fetching lives in
//! the source crates and persistence in the binary.

pub mod error;
pub mod ideas;
pub mod metrics;
pub mod pipeline;
pub mod ranker;
pub mod script;
pub mod trends;

mod templates;
mod text;

pub use error::EngineError;
pub use ideas::generate_ideas;
pub use metrics::{score_videos, BatchStats};
pub use pipeline::{run_pipeline, PipelineOutput, RunOptions};
pub use ranker::{eligible_channels, rank_influencers};
pub use script::{synthesize_script, synthesize_scripts};
pub use trends::{extract_trends, TrendTables};
