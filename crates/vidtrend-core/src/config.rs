use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::app_config::AppConfig;
use crate::pipeline_config::PipelineConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if values are invalid, the pipeline file cannot be
/// loaded, or the resulting pipeline configuration fails validation.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Same as [`load_app_config`].
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Like [`load_app_config`], but reads the pipeline file from `pipeline_path`
/// instead of `VIDTREND_PIPELINE_PATH`.
///
/// # Errors
///
/// Same as [`load_app_config`].
pub fn load_app_config_with_pipeline(pipeline_path: &Path) -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    let explicit = pipeline_path.display().to_string();
    build_app_config(|key| {
        if key == "VIDTREND_PIPELINE_PATH" {
            Ok(explicit.clone())
        } else {
            std::env::var(key)
        }
    })
}

/// Load a [`PipelineConfig`] from a YAML file. Fields absent from the file keep
/// their defaults. The result is not validated here.
///
/// # Errors
///
/// Returns [`ConfigError::FileIo`] or [`ConfigError::FileParse`].
pub fn load_pipeline_config(path: &Path) -> Result<PipelineConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileIo {
        path: path.display().to_string(),
        source: e,
    })?;
    let cfg: PipelineConfig = serde_yaml::from_str(&content)?;
    Ok(cfg)
}

/// Core parsing/validation logic, decoupled from the real environment so it
/// can be exercised with a plain `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let youtube_api_key = lookup("YOUTUBE_API_KEY").ok().filter(|k| !k.is_empty());
    let output_dir = PathBuf::from(or_default("VIDTREND_OUTPUT_DIR", "output"));
    let log_level = or_default("VIDTREND_LOG_LEVEL", "info");
    let request_timeout_secs = parse_var(
        "VIDTREND_REQUEST_TIMEOUT_SECS",
        &or_default("VIDTREND_REQUEST_TIMEOUT_SECS", "30"),
    )?;
    let search_results_per_keyword = parse_var(
        "VIDTREND_SEARCH_RESULTS_PER_KEYWORD",
        &or_default("VIDTREND_SEARCH_RESULTS_PER_KEYWORD", "20"),
    )?;

    let pipeline_path = lookup("VIDTREND_PIPELINE_PATH").ok().map(PathBuf::from);
    let mut pipeline = match &pipeline_path {
        Some(path) => load_pipeline_config(path)?,
        None => PipelineConfig::default(),
    };
    apply_env_overrides(&mut pipeline, &lookup)?;
    pipeline.validate()?;

    Ok(AppConfig {
        youtube_api_key,
        output_dir,
        log_level,
        request_timeout_secs,
        search_results_per_keyword,
        pipeline_path,
        pipeline,
    })
}

/// Environment variables win over both defaults and the pipeline file.
fn apply_env_overrides<F>(pipeline: &mut PipelineConfig, lookup: &F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    fn set<T: FromStr, F>(lookup: &F, var: &str, slot: &mut T) -> Result<(), ConfigError>
    where
        T::Err: std::fmt::Display,
        F: Fn(&str) -> Result<String, std::env::VarError>,
    {
        if let Ok(raw) = lookup(var) {
            *slot = parse_var(var, &raw)?;
        }
        Ok(())
    }

    set(lookup, "VIDTREND_MIN_SUBSCRIBERS", &mut pipeline.min_subscribers)?;
    set(lookup, "VIDTREND_MIN_VIEWS", &mut pipeline.min_views)?;
    set(
        lookup,
        "VIDTREND_MAX_VIDEOS_PER_CHANNEL",
        &mut pipeline.max_videos_per_channel,
    )?;
    set(lookup, "VIDTREND_TOP_INFLUENCERS", &mut pipeline.top_influencers)?;
    set(lookup, "VIDTREND_TOP_TRENDS", &mut pipeline.top_trends)?;
    set(lookup, "VIDTREND_TOP_HASHTAGS", &mut pipeline.top_hashtags)?;
    set(lookup, "VIDTREND_SCRIPT_MIN_WORDS", &mut pipeline.script_min_words)?;
    set(lookup, "VIDTREND_SCRIPT_MAX_WORDS", &mut pipeline.script_max_words)?;
    set(lookup, "VIDTREND_WORDS_PER_MINUTE", &mut pipeline.words_per_minute)?;

    if let Ok(raw) = lookup("VIDTREND_AI_KEYWORDS") {
        let keywords: Vec<String> = raw
            .split(',')
            .map(|k| k.trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        if keywords.is_empty() {
            return Err(ConfigError::InvalidEnvVar {
                var: "VIDTREND_AI_KEYWORDS".to_string(),
                reason: "expected a comma-separated list with at least one keyword".to_string(),
            });
        }
        pipeline.ai_keywords = keywords;
    }
    Ok(())
}

fn parse_var<T: FromStr>(var: &str, raw: &str) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    raw.trim().parse::<T>().map_err(|e| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
