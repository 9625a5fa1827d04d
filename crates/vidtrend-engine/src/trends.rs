//! Keyword and hashtag mining over scored videos.

use std::collections::{BTreeSet, HashMap};

use vidtrend_core::{HashtagEntry, PipelineConfig, ScoredVideo, TrendEntry};

use crate::text;

/// Ranked keyword and hashtag tables from one batch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrendTables {
    pub topics: Vec<TrendEntry>,
    pub hashtags: Vec<HashtagEntry>,
}

#[derive(Default)]
struct Tally {
    count: usize,
    weight: f64,
}

/// Count tokens across titles, descriptions and tags, weighting each
/// occurrence by the owning video's performance score.
///
/// A token counts at most once per video. Ranking is by weight, then count,
/// then the token itself, so equal inputs always produce equal tables.
#[must_use]
pub fn extract_trends(videos: &[ScoredVideo], config: &PipelineConfig) -> TrendTables {
    let mut words: HashMap<String, Tally> = HashMap::new();
    let mut hashtags: HashMap<String, Tally> = HashMap::new();

    for scored in videos {
        let v = &scored.video;
        let mut seen: BTreeSet<String> = BTreeSet::new();
        let fields = std::iter::once(v.title.as_str())
            .chain(std::iter::once(v.description.as_str()))
            .chain(v.tags.iter().map(String::as_str));
        for field in fields {
            for token in text::tokens(field) {
                if keep_token(&token, config) {
                    seen.insert(token);
                }
            }
        }
        for token in seen {
            let table = if token.starts_with('#') {
                &mut hashtags
            } else {
                &mut words
            };
            let tally = table.entry(token).or_default();
            tally.count += 1;
            tally.weight += scored.performance_score;
        }
    }

    let topics = rank(words, config.top_trends)
        .into_iter()
        .enumerate()
        .map(|(i, (keyword, tally))| TrendEntry {
            keyword,
            count: tally.count,
            weight: tally.weight,
            rank: i + 1,
        })
        .collect();
    let hashtags = rank(hashtags, config.top_hashtags)
        .into_iter()
        .enumerate()
        .map(|(i, (hashtag, tally))| HashtagEntry {
            hashtag,
            count: tally.count,
            weight: tally.weight,
            rank: i + 1,
        })
        .collect();

    TrendTables { topics, hashtags }
}

/// Plain words must reach `min_token_len`; hashtags only need a body, so
/// `#ai` and `#ml` survive.
fn keep_token(token: &str, config: &PipelineConfig) -> bool {
    let (bare, long_enough) = match token.strip_prefix('#') {
        Some(bare) => (bare, !bare.is_empty()),
        None => (token, token.chars().count() >= config.min_token_len),
    };
    long_enough && !config.stop_words.contains(bare)
}

fn rank(table: HashMap<String, Tally>, limit: usize) -> Vec<(String, Tally)> {
    let mut entries: Vec<(String, Tally)> = table.into_iter().collect();
    entries.sort_by(|(ka, a), (kb, b)| {
        b.weight
            .total_cmp(&a.weight)
            .then(b.count.cmp(&a.count))
            .then_with(|| ka.cmp(kb))
    });
    entries.truncate(limit);
    entries
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use vidtrend_core::VideoRecord;

    use super::*;

    fn scored(id: &str, title: &str, tags: &[&str], score: f64) -> ScoredVideo {
        ScoredVideo {
            video: VideoRecord {
                id: id.to_string(),
                channel_id: "UC1".to_string(),
                channel_title: String::new(),
                title: title.to_string(),
                description: String::new(),
                published_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
                view_count: 1_000,
                like_count: 0,
                comment_count: 0,
                tags: tags.iter().map(|t| (*t).to_string()).collect(),
                duration_secs: None,
                thumbnail_url: None,
            },
            engagement_rate: 0.0,
            performance_score: score,
        }
    }

    #[test]
    fn keyword_in_half_the_videos_ranks_first() {
        let titles = [
            "ChatGPT prompts",
            "Sourdough basics",
            "ChatGPT coding",
            "Garden tour",
            "Using ChatGPT daily",
            "Bike repair",
            "ChatGPT memory",
            "Chess openings",
            "ChatGPT voice",
            "Travel vlog",
        ];
        let videos: Vec<ScoredVideo> = titles
            .iter()
            .enumerate()
            .map(|(i, title)| scored(&format!("v{i}"), title, &[], 0.5))
            .collect();
        let tables = extract_trends(&videos, &PipelineConfig::default());
        assert_eq!(tables.topics[0].keyword, "chatgpt");
        assert_eq!(tables.topics[0].count, 5);
        assert_eq!(tables.topics[0].rank, 1);
    }

    #[test]
    fn token_counts_once_per_video() {
        let v = scored("a", "Python python PYTHON", &["python"], 1.0);
        let tables = extract_trends(&[v], &PipelineConfig::default());
        let python = tables.topics.iter().find(|t| t.keyword == "python").unwrap();
        assert_eq!(python.count, 1);
        assert!((python.weight - 1.0).abs() < 1e-12);
    }

    #[test]
    fn hashtags_are_ranked_separately() {
        let videos = vec![
            scored("a", "Learn #Python fast", &[], 0.9),
            scored("b", "More #python and #AI", &[], 0.4),
        ];
        let tables = extract_trends(&videos, &PipelineConfig::default());
        let tags: Vec<(&str, usize)> = tables
            .hashtags
            .iter()
            .map(|h| (h.hashtag.as_str(), h.count))
            .collect();
        assert_eq!(tags, vec![("#python", 2), ("#ai", 1)]);
        assert!(tables.topics.iter().all(|t| !t.keyword.starts_with('#')));
    }

    #[test]
    fn short_hashtags_are_kept_but_short_words_are_not() {
        let v = scored("a", "#AI #ML #ChatGPT news", &["ml"], 1.0);
        let tables = extract_trends(&[v], &PipelineConfig::default());
        let tags: Vec<&str> = tables.hashtags.iter().map(|h| h.hashtag.as_str()).collect();
        assert_eq!(tags, vec!["#ai", "#chatgpt", "#ml"]);
        let keywords: Vec<&str> = tables.topics.iter().map(|t| t.keyword.as_str()).collect();
        assert_eq!(keywords, vec!["news"]);
    }

    #[test]
    fn stop_word_hashtags_are_dropped() {
        let v = scored("a", "#Subscribe for #Agents", &[], 1.0);
        let tables = extract_trends(&[v], &PipelineConfig::default());
        let tags: Vec<&str> = tables.hashtags.iter().map(|h| h.hashtag.as_str()).collect();
        assert_eq!(tags, vec!["#agents"]);
    }

    #[test]
    fn dropping_a_video_never_raises_its_token_counts() {
        let config = PipelineConfig {
            top_trends: 100,
            top_hashtags: 100,
            ..PipelineConfig::default()
        };
        let videos = vec![
            scored("a", "ChatGPT agents for coding #AI", &["python"], 0.8),
            scored("b", "Claude agents review #AI #LLM", &[], 0.6),
            scored("c", "Python automation with ChatGPT", &["coding"], 0.3),
            scored("d", "Gemini news roundup", &["agents"], 0.9),
        ];
        let before = extract_trends(&videos, &config);

        for dropped in 0..videos.len() {
            let rest: Vec<ScoredVideo> = videos
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != dropped)
                .map(|(_, v)| v.clone())
                .collect();
            let after = extract_trends(&rest, &config);
            let own = extract_trends(&videos[dropped..=dropped], &config);

            let topic_count = |t: &TrendTables, k: &str| {
                t.topics.iter().find(|e| e.keyword == k).map_or(0, |e| e.count)
            };
            let tag_count = |t: &TrendTables, k: &str| {
                t.hashtags.iter().find(|e| e.hashtag == k).map_or(0, |e| e.count)
            };
            for entry in &own.topics {
                let k = entry.keyword.as_str();
                assert!(topic_count(&after, k) < topic_count(&before, k), "{k}");
            }
            for entry in &own.hashtags {
                let k = entry.hashtag.as_str();
                assert!(tag_count(&after, k) < tag_count(&before, k), "{k}");
            }
        }
    }

    #[test]
    fn stop_words_and_short_tokens_are_dropped() {
        let v = scored("a", "The AI way to get going", &[], 1.0);
        let tables = extract_trends(&[v], &PipelineConfig::default());
        let keywords: Vec<&str> = tables.topics.iter().map(|t| t.keyword.as_str()).collect();
        assert_eq!(keywords, vec!["going"]);
    }

    #[test]
    fn ties_break_on_count_then_token() {
        let videos = vec![
            scored("a", "zebra apple", &[], 0.5),
            scored("b", "mango", &[], 1.0),
        ];
        let tables = extract_trends(&videos, &PipelineConfig::default());
        let keywords: Vec<&str> = tables.topics.iter().map(|t| t.keyword.as_str()).collect();
        assert_eq!(keywords, vec!["mango", "apple", "zebra"]);
    }

    #[test]
    fn output_is_capped_at_top_n() {
        let config = PipelineConfig {
            top_trends: 2,
            ..PipelineConfig::default()
        };
        let v = scored("a", "alpha bravo charlie delta", &[], 1.0);
        let tables = extract_trends(&[v], &config);
        assert_eq!(tables.topics.len(), 2);
        assert_eq!(tables.topics[1].rank, 2);
    }

    #[test]
    fn empty_batch_yields_empty_tables() {
        let tables = extract_trends(&[], &PipelineConfig::default());
        assert_eq!(tables, TrendTables::default());
    }
}
