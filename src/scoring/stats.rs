// Comment statistics aggregation.
//
// Pure whole-collection computation: stats are recomputed from the full
// set of scored comments, never updated incrementally, so any permutation
// of the same comments yields the same result.

use crate::db::models::{AnalysisStats, ScoredComment};

/// Aggregate statistics over a batch of scored comments.
///
/// An empty batch yields all-zero stats (average 0.0, not NaN).
pub fn aggregate(comments: &[ScoredComment]) -> AnalysisStats {
    let total = comments.len() as u32;
    let toxic = comments.iter().filter(|c| c.is_toxic).count() as u32;

    let average_toxicity = if comments.is_empty() {
        0.0
    } else {
        comments.iter().map(|c| c.toxicity).sum::<f64>() / comments.len() as f64
    };

    AnalysisStats {
        total_comments: total,
        toxic_comments: toxic,
        non_toxic_comments: total - toxic,
        average_toxicity,
    }
}

/// Absolute distance between an audio-track toxicity and the average
/// comment toxicity.
pub fn audio_distance(audio_toxicity: f64, average_toxicity: f64) -> f64 {
    (audio_toxicity - average_toxicity).abs()
}
