// Report builder — orchestrates one analysis run for a single URL.
//
// Given a content URL, this module:
// 1. Fetches the content and its comments from the platform
// 2. Runs toxicity scoring on every comment
// 3. Aggregates the batch statistics
// 4. Scores the audio transcript when the platform provides one
// 5. Returns a complete Analysis ready for storage

use anyhow::Result;
use chrono::Utc;
use tracing::info;

use crate::db::models::{Analysis, AudioAnalysis, ScoredComment};
use crate::platforms::traits::ContentFetcher;
use crate::scoring::stats;
use crate::toxicity::traits::ToxicityScorer;

/// Build a complete analysis for a single content URL.
///
/// This is the core pipeline function. The scorer's threshold drives every
/// toxic/non-toxic verdict, so swapping scorers keeps verdicts consistent
/// with their scores.
pub async fn build_report(
    fetcher: &dyn ContentFetcher,
    scorer: &dyn ToxicityScorer,
    url: &str,
) -> Result<Analysis> {
    let platform = fetcher.platform();

    // Step 1: Fetch the content and its raw comments
    let content = fetcher.fetch(url).await?;

    // Step 2: Score every comment, preserving order
    let texts: Vec<String> = content.comments.iter().map(|c| c.text.clone()).collect();
    let scores = scorer.score_batch(&texts).await?;
    let threshold = scorer.toxic_threshold();

    let comments: Vec<ScoredComment> = content
        .comments
        .into_iter()
        .zip(scores)
        .map(|(comment, toxicity)| ScoredComment {
            is_toxic: toxicity >= threshold,
            toxicity,
            comment,
        })
        .collect();

    // Step 3: Aggregate the batch statistics
    let stats = stats::aggregate(&comments);

    // Step 4: Score the audio transcript, if the platform provides one
    let audio = match content.audio_transcript {
        Some(transcript) => {
            let toxicity = scorer.score_text(&transcript).await?;
            Some(AudioAnalysis {
                toxicity,
                is_toxic: toxicity >= threshold,
                vs_comments_distance: stats::audio_distance(toxicity, stats.average_toxicity),
                transcript,
            })
        }
        None => None,
    };

    info!(
        platform = platform.as_str(),
        url,
        comments = stats.total_comments,
        toxic = stats.toxic_comments,
        avg_toxicity = format!("{:.3}", stats.average_toxicity),
        "Analyzed content"
    );

    Ok(Analysis {
        id: 0,
        platform,
        url: url.to_string(),
        content_id: content.content_id,
        title: content.title,
        creator: content.creator,
        metrics: content.metrics,
        stats,
        comments,
        audio,
        analyzed_at: Utc::now().to_rfc3339(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::Platform;
    use crate::platforms::instagram::MockInstagramFetcher;
    use crate::platforms::youtube::MockYouTubeFetcher;
    use crate::toxicity::keyword::KeywordScorer;

    #[tokio::test]
    async fn test_youtube_report() {
        let fetcher = MockYouTubeFetcher::new();
        let scorer = KeywordScorer::new();
        let report = build_report(
            &fetcher,
            &scorer,
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
        )
        .await
        .unwrap();

        assert_eq!(report.platform, Platform::Youtube);
        assert_eq!(report.content_id.as_deref(), Some("dQw4w9WgXcQ"));
        assert_eq!(report.title, "How to Build a React Application");
        assert_eq!(report.creator, "CodeWithExpert");
        assert_eq!(report.stats.total_comments, 10);
        // One comment hits two keywords (0.4); three hit one (0.2 < 0.3)
        assert_eq!(report.stats.toxic_comments, 1);
        assert_eq!(report.stats.non_toxic_comments, 9);
        // (0.4 + 0.2 + 0.2 + 0.2) / 10 = 0.1
        assert!((report.stats.average_toxicity - 0.1).abs() < 1e-9);
        assert!(report.audio.is_none());
        assert_eq!(report.comments.len(), 10);
    }

    #[tokio::test]
    async fn test_instagram_report_includes_audio() {
        let fetcher = MockInstagramFetcher::new();
        let scorer = KeywordScorer::new();
        let report = build_report(
            &fetcher,
            &scorer,
            "https://www.instagram.com/reel/Cxyz123abcd/",
        )
        .await
        .unwrap();

        assert_eq!(report.platform, Platform::Instagram);
        assert_eq!(report.content_id.as_deref(), Some("Cxyz123abcd"));
        assert_eq!(report.stats.total_comments, 7);
        // Two comments hit two keywords each (0.4)
        assert_eq!(report.stats.toxic_comments, 2);
        // 0.8 / 7 ≈ 0.1143
        assert!((report.stats.average_toxicity - 0.8 / 7.0).abs() < 1e-9);

        let audio = report.audio.expect("reel reports carry an audio analysis");
        // The sample transcript contains no toxic keywords
        assert!(audio.toxicity.abs() < 1e-9);
        assert!(!audio.is_toxic);
        // Distance from a clean track is exactly the comment average
        assert!((audio.vs_comments_distance - report.stats.average_toxicity).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_report_stats_match_reaggregation() {
        let fetcher = MockYouTubeFetcher::new();
        let scorer = KeywordScorer::new();
        let report = build_report(&fetcher, &scorer, "https://youtu.be/dQw4w9WgXcQ")
            .await
            .unwrap();

        let recomputed = stats::aggregate(&report.comments);
        assert_eq!(recomputed.total_comments, report.stats.total_comments);
        assert_eq!(recomputed.toxic_comments, report.stats.toxic_comments);
        assert!((recomputed.average_toxicity - report.stats.average_toxicity).abs() < 1e-9);
    }
}
