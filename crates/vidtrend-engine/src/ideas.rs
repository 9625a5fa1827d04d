//! Content idea generation from mined trends.
//!
//! Ideas are produced round-robin across the requested categories. Each
//! category walks a deterministic sequence of (template, topic) candidates;
//! a candidate whose title was already used is skipped and the next one is
//! tried, up to `idea_retry_cap` extra attempts per slot.

#![allow(clippy::cast_precision_loss)]

use std::collections::HashSet;

use vidtrend_core::{Category, ContentIdea, HashtagEntry, PipelineConfig, ScoredVideo, TrendEntry};

use crate::templates::{self, CategoryTemplate};
use crate::text;
use crate::trends::TrendTables;

/// Generate up to `count` ideas, sorted by `trend_score` descending with ids `1..`.
///
/// Returns fewer than `count` only when every category has run out of
/// distinct titles. With no trends or no categories the result is empty.
#[must_use]
pub fn generate_ideas(
    trends: &TrendTables,
    videos: &[ScoredVideo],
    categories: &[Category],
    count: usize,
    config: &PipelineConfig,
) -> Vec<ContentIdea> {
    let pool_len = config.idea_topic_pool.min(trends.topics.len());
    if pool_len == 0 || categories.is_empty() || count == 0 {
        if count > 0 {
            tracing::warn!(
                topics = trends.topics.len(),
                categories = categories.len(),
                "not enough trend data to generate ideas"
            );
        }
        return Vec::new();
    }

    let mut generator = Generator::new(
        &trends.topics[..pool_len],
        &trends.hashtags,
        categories,
        config,
    );
    let baseline = view_percentile(videos, config.view_percentile);

    let mut ideas: Vec<ContentIdea> = Vec::with_capacity(count);
    for slot in generator.schedule(count) {
        if let Some(idea) = generator.attempt(slot, baseline) {
            ideas.push(idea);
        }
    }
    // Omitted slots are refilled from categories that still have material.
    while ideas.len() < count && !generator.all_exhausted() {
        for slot in 0..categories.len() {
            if ideas.len() >= count {
                break;
            }
            if let Some(idea) = generator.attempt(slot, baseline) {
                ideas.push(idea);
            }
        }
    }
    if ideas.len() < count {
        tracing::warn!(
            requested = count,
            generated = ideas.len(),
            "idea templates exhausted before reaching requested count"
        );
    }

    ideas.sort_by(|a, b| b.trend_score.total_cmp(&a.trend_score));
    for (i, idea) in ideas.iter_mut().enumerate() {
        idea.id = i + 1;
    }
    ideas
}

struct Generator<'a> {
    pool: &'a [TrendEntry],
    hashtags: &'a [HashtagEntry],
    categories: &'a [Category],
    config: &'a PipelineConfig,
    /// Length of the topic cycle each category walks before templates shift.
    period: usize,
    next: Vec<usize>,
    exhausted: Vec<bool>,
    titles: HashSet<String>,
}

impl<'a> Generator<'a> {
    fn new(
        pool: &'a [TrendEntry],
        hashtags: &'a [HashtagEntry],
        categories: &'a [Category],
        config: &'a PipelineConfig,
    ) -> Self {
        let period = pool.len() / gcd(categories.len(), pool.len());
        Self {
            pool,
            hashtags,
            categories,
            config,
            period,
            next: vec![0; categories.len()],
            exhausted: vec![false; categories.len()],
            titles: HashSet::new(),
        }
    }

    fn all_exhausted(&self) -> bool {
        self.exhausted.iter().all(|&e| e)
    }

    /// Full round-robin rounds, then the remainder goes to the categories
    /// whose next primary topic carries the most weight.
    fn schedule(&self, count: usize) -> Vec<usize> {
        let c = self.categories.len();
        let rounds = count / c;
        let mut slots: Vec<usize> = Vec::with_capacity(count);
        for _ in 0..rounds {
            slots.extend(0..c);
        }
        let next_weight = |ci: usize| self.pool[(ci + rounds * c) % self.pool.len()].weight;
        let mut order: Vec<usize> = (0..c).collect();
        order.sort_by(|&a, &b| next_weight(b).total_cmp(&next_weight(a)).then(a.cmp(&b)));
        slots.extend(order.into_iter().take(count % c));
        slots
    }

    fn attempt(&mut self, slot: usize, baseline: u64) -> Option<ContentIdea> {
        if self.exhausted[slot] {
            return None;
        }
        let category = self.categories[slot];
        let tpl = templates::template(category);
        let limit = self.period * tpl.titles.len();

        for _ in 0..=self.config.idea_retry_cap {
            let j = self.next[slot];
            if j >= limit {
                self.exhausted[slot] = true;
                tracing::debug!(%category, "category out of distinct titles");
                return None;
            }
            self.next[slot] += 1;

            let Some(draft) = self.candidate(slot, j, tpl) else {
                continue;
            };
            if self.titles.contains(&draft.title) {
                tracing::debug!(%category, title = %draft.title, "duplicate idea title, regenerating");
                continue;
            }
            self.titles.insert(draft.title.clone());
            return Some(self.finish(category, tpl, draft, baseline));
        }
        tracing::debug!(%category, "idea slot omitted after retries");
        None
    }

    fn candidate(&self, slot: usize, j: usize, tpl: &CategoryTemplate) -> Option<Draft<'a>> {
        let pool = self.pool;
        let m = pool.len();
        let c = self.categories.len();
        let cycle = j / self.period;
        let primary = (slot + j * c) % m;
        let title_tpl = tpl.titles[(slot + j % self.period + cycle) % tpl.titles.len()];

        let mut used = vec![&pool[primary]];
        if title_tpl.contains("{rival}") {
            if m < 2 {
                return None;
            }
            used.push(&pool[(primary + 1) % m]);
        }

        let topic = text::format_topic(&used[0].keyword);
        let rival = used
            .get(1)
            .map(|t| text::format_topic(&t.keyword))
            .unwrap_or_default();
        let pick = slot + j;
        let minutes = templates::MINUTE_OPTIONS[pick % templates::MINUTE_OPTIONS.len()].to_string();
        let steps = templates::STEP_OPTIONS[pick % templates::STEP_OPTIONS.len()].to_string();
        let days = templates::DAY_OPTIONS[pick % templates::DAY_OPTIONS.len()].to_string();
        let months = templates::MONTH_OPTIONS[pick % templates::MONTH_OPTIONS.len()].to_string();
        let horizon = templates::HORIZON_OPTIONS[pick % templates::HORIZON_OPTIONS.len()];

        let title = templates::fill(
            title_tpl,
            &[
                ("topic", topic.as_str()),
                ("rival", rival.as_str()),
                ("minutes", minutes.as_str()),
                ("steps", steps.as_str()),
                ("days", days.as_str()),
                ("months", months.as_str()),
                ("horizon", horizon),
            ],
        );
        Some(Draft {
            title,
            used,
            thumbnail: tpl.thumbnails[j % tpl.thumbnails.len()],
        })
    }

    fn finish(
        &self,
        category: Category,
        tpl: &CategoryTemplate,
        draft: Draft<'_>,
        baseline: u64,
    ) -> ContentIdea {
        let hashtags = idea_hashtags(
            &draft.used,
            &draft.title,
            tpl,
            self.hashtags,
            self.config.idea_hashtag_count,
        );

        let top_weight = self.pool[0].weight;
        let trend = if top_weight > 0.0 {
            let mean =
                draft.used.iter().map(|t| t.weight).sum::<f64>() / draft.used.len() as f64;
            (mean / top_weight).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let mined: HashSet<&str> = self.hashtags.iter().map(|h| h.hashtag.as_str()).collect();
        let overlap = if hashtags.is_empty() {
            0.0
        } else {
            hashtags.iter().filter(|h| mined.contains(h.as_str())).count() as f64
                / hashtags.len() as f64
        };
        let weights = &self.config.idea_weights;
        let score = (100.0 * (weights.trend * trend + weights.hashtag * overlap)).clamp(0.0, 100.0);

        ContentIdea {
            id: 0,
            thumbnail_concept: format!("{}{}", draft.thumbnail, thumbnail_accent(&draft.title)),
            title: draft.title,
            category,
            topics: draft.used.iter().map(|t| t.keyword.clone()).collect(),
            hashtags,
            estimated_views: estimate_views(baseline, score),
            trend_score: score,
            difficulty: tpl.difficulty,
            target_audience: tpl.audience,
        }
    }
}

struct Draft<'a> {
    title: String,
    used: Vec<&'a TrendEntry>,
    thumbnail: &'static str,
}

/// Topic hashtags first, then mined hashtags related to the idea, then
/// category and general fallbacks. Lowercase, unique, capped at `cap`.
fn idea_hashtags(
    used: &[&TrendEntry],
    title: &str,
    tpl: &CategoryTemplate,
    mined: &[HashtagEntry],
    cap: usize,
) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    let mut push = |tag: String| {
        if out.len() < cap && !out.contains(&tag) {
            out.push(tag);
        }
    };

    for topic in used {
        push(format!("#{}", topic.keyword));
    }
    let title_words: HashSet<String> = text::words(title).into_iter().collect();
    for h in mined {
        let bare = h.hashtag.trim_start_matches('#');
        if title_words.contains(bare) || used.iter().any(|t| t.keyword == bare) {
            push(h.hashtag.clone());
        }
    }
    for tag in tpl.hashtags.iter().chain(templates::GENERAL_HASHTAGS) {
        push((*tag).to_string());
    }
    out
}

fn thumbnail_accent(title: &str) -> &'static str {
    let words = text::words(title);
    if words.iter().any(|w| w == "chatgpt") {
        " with ChatGPT logo"
    } else if words.iter().any(|w| w == "ai") {
        " with AI/robot elements"
    } else if words.iter().any(|w| w == "python") {
        " with Python logo"
    } else {
        ""
    }
}

/// Nearest-rank percentile of historical view counts.
fn view_percentile(videos: &[ScoredVideo], percentile: f64) -> u64 {
    let mut views: Vec<u64> = videos.iter().map(|s| s.video.view_count).collect();
    if views.is_empty() {
        return 0;
    }
    views.sort_unstable();
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let rank = (percentile * views.len() as f64).ceil() as usize;
    views[rank.clamp(1, views.len()) - 1]
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn estimate_views(baseline: u64, score: f64) -> u64 {
    (baseline as f64 * score / 100.0).round() as u64
}

fn gcd(a: usize, b: usize) -> usize {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}
