//! End-to-end runs over the sample corpus in `config/corpus.yaml`.

use std::collections::{BTreeMap, HashSet};
use std::convert::Infallible;

use chrono::{DateTime, TimeZone, Utc};
use serde::Serialize;
use vidtrend_core::{CorpusFixture, PipelineConfig, Table, TableSink};
use vidtrend_engine::{run_pipeline, EngineError, PipelineOutput, RunOptions};

const CORPUS: &str = include_str!("../../../config/corpus.yaml");

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 9, 1, 0, 0, 0).unwrap()
}

fn options() -> RunOptions {
    RunOptions {
        idea_count: 12,
        script_count: 3,
        ..RunOptions::new(now())
    }
}

fn run(config: &PipelineConfig) -> PipelineOutput {
    let corpus = CorpusFixture::from_yaml(CORPUS).expect("sample corpus should parse");
    run_pipeline(&corpus.channels, config, &options()).expect("pipeline should succeed")
}

#[derive(Default)]
struct MemorySink {
    tables: BTreeMap<&'static str, Vec<serde_json::Value>>,
}

impl TableSink for MemorySink {
    type Error = Infallible;

    fn write_table<R: Serialize>(&mut self, table: Table, rows: &[R]) -> Result<(), Self::Error> {
        let values = rows
            .iter()
            .map(|r| serde_json::to_value(r).expect("rows serialize"))
            .collect();
        self.tables.insert(table.name(), values);
        Ok(())
    }
}

#[test]
fn influencer_ranking_prefers_ai_channels_and_applies_thresholds() {
    let out = run(&PipelineConfig::default());
    let ids: Vec<&str> = out.influencers.iter().map(|p| p.channel.id.as_str()).collect();

    assert_eq!(ids[0], "UC_ai_explained");
    assert!(!ids.contains(&"UC_tiny_ai"), "below subscriber threshold");
    let ranks: Vec<usize> = out.influencers.iter().map(|p| p.rank).collect();
    assert_eq!(ranks, (1..=out.influencers.len()).collect::<Vec<_>>());

    let cooking = ids.iter().position(|id| *id == "UC_weeknight_cooking");
    let prompt_lab = ids.iter().position(|id| *id == "UC_prompt_lab");
    assert!(prompt_lab < cooking);
}

#[test]
fn low_view_uploads_are_excluded_from_scored_videos() {
    let out = run(&PipelineConfig::default());
    assert!(out.videos.iter().all(|v| v.video.view_count >= 100_000));
    assert!(!out.videos.iter().any(|v| v.video.id == "cwa_003"));
    assert!(out
        .videos
        .windows(2)
        .all(|w| w[0].performance_score >= w[1].performance_score));
}

#[test]
fn chatgpt_leads_topics_and_hashtags() {
    let out = run(&PipelineConfig::default());
    assert_eq!(out.trends.topics[0].keyword, "chatgpt");
    assert_eq!(out.trends.topics[0].count, 4);
    assert_eq!(out.trends.hashtags[0].hashtag, "#chatgpt");
    assert_eq!(out.trends.hashtags[0].count, 3);
    let ai = out.trends.hashtags.iter().find(|h| h.hashtag == "#ai");
    assert_eq!(ai.map(|h| h.count), Some(2));
}

#[test]
fn ideas_and_scripts_meet_their_contracts() {
    let config = PipelineConfig::default();
    let out = run(&config);

    assert_eq!(out.ideas.len(), 12);
    let titles: HashSet<&str> = out.ideas.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles.len(), 12);
    assert!(out
        .ideas
        .windows(2)
        .all(|w| w[0].trend_score >= w[1].trend_score));

    assert_eq!(out.scripts.len(), 3);
    for (script, idea) in out.scripts.iter().zip(&out.ideas) {
        assert_eq!(script.idea_id, idea.id);
        assert!(script.target_met, "{} words", script.word_count);
        assert!((config.script_min_words..=config.script_max_words).contains(&script.word_count));
    }
}

#[test]
fn identical_inputs_produce_identical_output() {
    let config = PipelineConfig::default();
    assert_eq!(run(&config), run(&config));
}

#[test]
fn invalid_weights_fail_before_any_stage_runs() {
    let mut config = PipelineConfig::default();
    config.rank_weights.growth = 0.9;
    let corpus = CorpusFixture::from_yaml(CORPUS).unwrap();
    let err = run_pipeline(&corpus.channels, &config, &options()).unwrap_err();
    assert!(matches!(err, EngineError::Config(_)));
}

#[test]
fn empty_corpus_runs_to_empty_tables() {
    let out = run_pipeline(&[], &PipelineConfig::default(), &options()).unwrap();
    assert!(out.influencers.is_empty());
    assert!(out.trends.topics.is_empty());
    assert!(out.ideas.is_empty());
    assert!(out.scripts.is_empty());
}

#[test]
fn all_six_tables_are_written() {
    let out = run(&PipelineConfig::default());
    let mut sink = MemorySink::default();
    out.write_tables(&mut sink).unwrap();

    let names: Vec<&str> = sink.tables.keys().copied().collect();
    let mut expected: Vec<&str> = Table::ALL.iter().map(|t| t.name()).collect();
    expected.sort_unstable();
    assert_eq!(names, expected);

    let ideas = &sink.tables["video_ideas"];
    assert_eq!(ideas.len(), 12);
    assert_eq!(ideas[0]["id"], 1);
    let topics = &sink.tables["trending_topics"];
    assert_eq!(topics[0]["topic"], "chatgpt");
}

#[test]
fn summary_totals_agree_with_tables() {
    let out = run(&PipelineConfig::default());

    let subscribers: u64 = out
        .influencers
        .iter()
        .map(|p| p.channel.subscriber_count)
        .sum();
    assert_eq!(out.total_subscribers(), subscribers);
    assert!(out.average_views() >= 100_000.0);

    let per_category: usize = out.ideas_per_category().iter().map(|(_, n)| n).sum();
    assert_eq!(per_category, out.ideas.len());
    assert!(out.total_script_words() >= 3 * 500);
}

#[test]
fn empty_output_summary_is_zero() {
    let out = run_pipeline(&[], &PipelineConfig::default(), &options()).unwrap();
    assert_eq!(out.total_subscribers(), 0);
    assert!(out.average_views().abs() < f64::EPSILON);
    assert!(out.ideas_per_category().is_empty());
    assert_eq!(out.total_script_words(), 0);
}
