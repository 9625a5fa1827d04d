//! Tokenization shared by the relevance scorer and the trend extractor.

use std::sync::LazyLock;

use regex::Regex;

static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#?[\p{L}\p{N}_]+").expect("valid token regex"));

/// Lowercase tokens in reading order. Hashtags keep their leading `#`.
pub(crate) fn tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    TOKEN_RE.find_iter(text).map(|m| m.as_str().to_lowercase())
}

/// Lowercase words with any hashtag marker stripped, for phrase matching.
pub(crate) fn words(text: &str) -> Vec<String> {
    tokens(text)
        .map(|t| match t.strip_prefix('#') {
            Some(bare) => bare.to_string(),
            None => t,
        })
        .collect()
}

/// True if `phrase` occurs in `haystack` as a contiguous run of whole words.
pub(crate) fn contains_phrase(haystack: &[String], phrase: &[String]) -> bool {
    if phrase.is_empty() || phrase.len() > haystack.len() {
        return false;
    }
    haystack.windows(phrase.len()).any(|w| w == phrase)
}

/// Display form of a trend token for use in titles.
pub(crate) fn format_topic(token: &str) -> String {
    const SPECIAL: &[(&str, &str)] = &[
        ("ai", "AI"),
        ("ml", "ML"),
        ("nlp", "NLP"),
        ("gpt", "GPT"),
        ("llm", "LLM"),
        ("llms", "LLMs"),
        ("chatgpt", "ChatGPT"),
        ("openai", "OpenAI"),
        ("pytorch", "PyTorch"),
        ("tensorflow", "TensorFlow"),
        ("github", "GitHub"),
        ("api", "API"),
    ];
    let bare = token.trim_start_matches('#');
    if let Some(&(_, display)) = SPECIAL.iter().find(|(k, _)| *k == bare) {
        return display.to_string();
    }
    bare.split(|c: char| c == ' ' || c == '_')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
