use std::path::PathBuf;

use crate::pipeline_config::PipelineConfig;

#[derive(Clone)]
pub struct AppConfig {
    pub youtube_api_key: Option<String>,
    pub output_dir: PathBuf,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub search_results_per_keyword: u32,
    pub pipeline_path: Option<PathBuf>,
    pub pipeline: PipelineConfig,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field(
                "youtube_api_key",
                &self.youtube_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("output_dir", &self.output_dir)
            .field("log_level", &self.log_level)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field(
                "search_results_per_keyword",
                &self.search_results_per_keyword,
            )
            .field("pipeline_path", &self.pipeline_path)
            .field("pipeline", &self.pipeline)
            .finish()
    }
}
