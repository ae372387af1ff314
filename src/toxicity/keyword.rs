// Keyword toxicity scorer.
//
// Deterministic scoring over a fixed keyword vocabulary: each distinct
// keyword found in the lowercased text adds a fixed increment, and the sum
// is clamped to 0.0-1.0. Matching is substring-based, not word-boundary
// based — "skill" matches "kill". That is intentional, documented behavior;
// tightening it would change scores across every stored analysis.

use anyhow::Result;
use async_trait::async_trait;

use crate::db::models::{RawComment, ScoredComment};
use crate::toxicity::traits::ToxicityScorer;

/// The fixed vocabulary the scorer looks for. All lowercase — input text is
/// lowercased before matching.
pub const TOXIC_KEYWORDS: &[&str] = &[
    "hate", "stupid", "idiot", "dumb", "moron", "terrible", "awful", "worst",
    "garbage", "trash", "kill", "die", "useless", "pathetic",
];

/// Score added per distinct keyword present in the text.
pub const KEYWORD_INCREMENT: f64 = 0.2;

/// Scores at or above this are classified as toxic.
pub const TOXIC_THRESHOLD: f64 = 0.3;

/// Configurable rules for the keyword scorer.
///
/// The defaults are the shipping constants above; tests substitute their own
/// vocabularies and thresholds.
pub struct ScoringRules {
    pub keywords: Vec<String>,
    pub keyword_increment: f64,
    pub toxic_threshold: f64,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            keywords: TOXIC_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            keyword_increment: KEYWORD_INCREMENT,
            toxic_threshold: TOXIC_THRESHOLD,
        }
    }
}

/// Score a single text against the rules.
///
/// Each keyword counts at most once no matter how often it repeats, so the
/// score reflects vocabulary breadth rather than repetition. Deterministic:
/// the same text and rules always produce the same score.
pub fn score_text(text: &str, rules: &ScoringRules) -> f64 {
    let lowered = text.to_lowercase();

    let mut score = 0.0;
    for keyword in &rules.keywords {
        if lowered.contains(keyword.as_str()) {
            score += rules.keyword_increment;
        }
    }

    score.clamp(0.0, 1.0)
}

/// Attach a toxicity score and verdict to a raw comment.
///
/// The threshold comparison is inclusive: a score exactly at the threshold
/// is toxic.
pub fn score_comment(comment: RawComment, rules: &ScoringRules) -> ScoredComment {
    let toxicity = score_text(&comment.text, rules);
    ScoredComment {
        is_toxic: toxicity >= rules.toxic_threshold,
        toxicity,
        comment,
    }
}

/// Score a batch of comments, preserving order.
pub fn score_comments(comments: Vec<RawComment>, rules: &ScoringRules) -> Vec<ScoredComment> {
    comments
        .into_iter()
        .map(|c| score_comment(c, rules))
        .collect()
}

/// The shipping `ToxicityScorer` — pure computation behind the async seam.
pub struct KeywordScorer {
    rules: ScoringRules,
}

impl KeywordScorer {
    pub fn new() -> Self {
        Self {
            rules: ScoringRules::default(),
        }
    }

    pub fn with_rules(rules: ScoringRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &ScoringRules {
        &self.rules
    }
}

impl Default for KeywordScorer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ToxicityScorer for KeywordScorer {
    async fn score_text(&self, text: &str) -> Result<f64> {
        Ok(score_text(text, &self.rules))
    }

    fn toxic_threshold(&self) -> f64 {
        self.rules.toxic_threshold
    }
}
