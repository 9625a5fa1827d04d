//! Plain-text stdout reports for the inspection subcommands.

use vidtrend_core::{ContentIdea, InfluencerProfile};
use vidtrend_engine::TrendTables;

const TITLE_WIDTH: usize = 48;

pub(crate) fn print_influencers(influencers: &[InfluencerProfile]) {
    if influencers.is_empty() {
        println!("no channels passed the subscriber and view thresholds");
        return;
    }

    println!(
        "{:<6}{:<13}{:<9}{:<11}{:<8}CHANNEL",
        "RANK", "SUBSCRIBERS", "GROWTH", "RELEVANCE", "SCORE"
    );
    for p in influencers {
        println!(
            "{:<6}{:<13}{:<9.0}{:<11.2}{:<8.3}{}",
            p.rank,
            p.channel.subscriber_count,
            p.growth_score,
            p.ai_relevance_score,
            p.rank_score,
            truncate(&p.channel.title)
        );
    }
}

pub(crate) fn print_trends(trends: &TrendTables) {
    if trends.topics.is_empty() && trends.hashtags.is_empty() {
        println!("no trending topics found");
        return;
    }

    println!("{:<6}{:<8}{:<10}TOPIC", "RANK", "COUNT", "WEIGHT");
    for t in &trends.topics {
        println!("{:<6}{:<8}{:<10.3}{}", t.rank, t.count, t.weight, t.keyword);
    }
    println!();
    println!("{:<6}{:<8}{:<10}HASHTAG", "RANK", "COUNT", "WEIGHT");
    for h in &trends.hashtags {
        println!("{:<6}{:<8}{:<10.3}{}", h.rank, h.count, h.weight, h.hashtag);
    }
}

pub(crate) fn print_ideas(ideas: &[ContentIdea]) {
    if ideas.is_empty() {
        println!("no ideas generated; the corpus produced no trending topics");
        return;
    }

    println!(
        "{:<5}{:<13}{:<8}{:<11}TITLE",
        "ID", "CATEGORY", "SCORE", "EST VIEWS"
    );
    for idea in ideas {
        println!(
            "{:<5}{:<13}{:<8.1}{:<11}{}",
            idea.id,
            idea.category.as_str(),
            idea.trend_score,
            idea.estimated_views,
            truncate(&idea.title)
        );
    }
}

fn truncate(text: &str) -> String {
    if text.chars().count() > TITLE_WIDTH {
        format!("{}...", text.chars().take(TITLE_WIDTH).collect::<String>())
    } else {
        text.to_string()
    }
}
