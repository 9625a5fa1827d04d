//! Content concepts and the scripts synthesized from them.

use serde::{Deserialize, Serialize};

/// Video format an idea is pitched as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Tutorial,
    News,
    Comparison,
    Explanation,
    Prediction,
    Review,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Tutorial,
        Category::News,
        Category::Comparison,
        Category::Explanation,
        Category::Prediction,
        Category::Review,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Tutorial => "tutorial",
            Category::News => "news",
            Category::Comparison => "comparison",
            Category::Explanation => "explanation",
            Category::Prediction => "prediction",
            Category::Review => "review",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown category '{s}'"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

/// A not-yet-published video concept with its predicted performance.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentIdea {
    /// 1-based position after sorting by `trend_score`.
    pub id: usize,
    pub title: String,
    pub category: Category,
    /// Trend keywords interpolated into the title, in template order.
    pub topics: Vec<String>,
    pub hashtags: Vec<String>,
    pub thumbnail_concept: String,
    pub estimated_views: u64,
    /// Predicted-performance score on a 0-100 scale.
    pub trend_score: f64,
    pub difficulty: Difficulty,
    pub target_audience: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Hook,
    Body,
    CallToAction,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScriptSection {
    pub kind: SectionKind,
    pub heading: String,
    pub text: String,
}

impl ScriptSection {
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

/// A spoken-word script expanded from one [`ContentIdea`].
#[derive(Debug, Clone, PartialEq)]
pub struct Script {
    pub idea_id: usize,
    pub title: String,
    pub category: Category,
    pub hashtags: Vec<String>,
    pub thumbnail_concept: String,
    /// Hook, then 3-6 body points, then the call to action.
    pub sections: Vec<ScriptSection>,
    pub word_count: usize,
    /// `word_count / words_per_minute`.
    pub estimated_minutes: f64,
    /// False when the available material could not reach the word-count floor.
    pub target_met: bool,
}

impl Script {
    /// Full script text, sections separated by blank lines.
    #[must_use]
    pub fn render(&self) -> String {
        self.sections
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    #[must_use]
    pub fn key_points(&self) -> Vec<&str> {
        self.sections
            .iter()
            .filter(|s| s.kind == SectionKind::Body)
            .map(|s| s.heading.as_str())
            .collect()
    }

    #[must_use]
    pub fn call_to_action(&self) -> Option<&str> {
        self.sections
            .iter()
            .find(|s| s.kind == SectionKind::CallToAction)
            .map(|s| s.text.as_str())
    }

    /// Human-readable spoken length, e.g. `"3-4 minutes"`.
    #[must_use]
    pub fn duration_label(&self) -> String {
        let minutes = self.estimated_minutes;
        if minutes < 1.0 {
            return "< 1 minute".to_string();
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let whole = minutes.floor() as u64;
        let spread = if minutes < 5.0 {
            1
        } else if minutes < 10.0 {
            2
        } else {
            3
        };
        format!("{whole}-{} minutes", whole + spread)
    }
}
