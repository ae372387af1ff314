// Data models — Rust structs that map to database rows.
//
// These are the types that flow through the application. They're separate
// from the database queries so other modules can use them without depending
// on rusqlite directly.

use serde::{Deserialize, Serialize};

/// An unscored comment as returned by a platform fetcher.
///
/// `text` is required — a comment without a body fails deserialization
/// before it ever reaches the scorer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawComment {
    pub id: String,
    pub author: String,
    pub text: String,
    /// RFC 3339 timestamp of when the comment was posted.
    pub timestamp: String,
    /// Not every platform exposes per-comment likes.
    pub like_count: Option<u64>,
}

/// A comment with its toxicity verdict attached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredComment {
    #[serde(flatten)]
    pub comment: RawComment,
    pub toxicity: f64,
    pub is_toxic: bool,
}

/// Aggregate statistics over one batch of scored comments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisStats {
    pub total_comments: u32,
    pub toxic_comments: u32,
    pub non_toxic_comments: u32,
    pub average_toxicity: f64,
}

/// Engagement counters for the analyzed content. The platforms expose
/// different sets, so everything is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentMetrics {
    pub views: Option<u64>,
    pub likes: Option<u64>,
    pub dislikes: Option<u64>,
    pub shares: Option<u64>,
}

/// Toxicity analysis of a reel's audio track, scored with the same rules
/// as the comments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioAnalysis {
    pub transcript: String,
    pub toxicity: f64,
    pub is_toxic: bool,
    /// |audio toxicity − average comment toxicity| — how far the audience
    /// reaction diverges from what the creator says.
    pub vs_comments_distance: f64,
}

/// One completed analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Analysis {
    /// Database-assigned; 0 until the record is stored.
    pub id: i64,
    pub platform: Platform,
    pub url: String,
    pub content_id: Option<String>,
    pub title: String,
    pub creator: String,
    pub metrics: ContentMetrics,
    pub stats: AnalysisStats,
    /// Every scored comment (JSON-encoded in the DB)
    pub comments: Vec<ScoredComment>,
    /// Present for Instagram reels.
    pub audio: Option<AudioAnalysis>,
    pub analyzed_at: String,
}

/// Supported content platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Youtube,
    Instagram,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Youtube => "youtube",
            Platform::Instagram => "instagram",
        }
    }

    /// Parse a stored or user-supplied platform name.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "youtube" => Some(Platform::Youtube),
            "instagram" => Some(Platform::Instagram),
            _ => None,
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Display bucket for a toxicity score — these are fixed display thresholds,
/// independent of the scorer's toxic/non-toxic decision threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToxicityLabel {
    NonToxic,
    ModeratelyToxic,
    Toxic,
}

impl ToxicityLabel {
    /// Determine the label from a toxicity score (0.0-1.0).
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s < 0.3 => ToxicityLabel::NonToxic,
            s if s < 0.7 => ToxicityLabel::ModeratelyToxic,
            _ => ToxicityLabel::Toxic,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ToxicityLabel::NonToxic => "Non-Toxic",
            ToxicityLabel::ModeratelyToxic => "Moderately Toxic",
            ToxicityLabel::Toxic => "Toxic",
        }
    }
}

impl std::fmt::Display for ToxicityLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
