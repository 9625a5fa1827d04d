//! YouTube Data API v3 source for vidtrend.

pub mod client;
pub mod error;
pub(crate) mod types;

pub use client::{ChannelDetails, YoutubeClient};
pub use error::YoutubeError;
pub use types::parse_duration;
