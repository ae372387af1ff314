// YouTube content fetcher.
//
// Returns a fixed sample video with ten comments so the pipeline runs end
// to end without platform credentials. The real Data API client will
// replace the body of `fetch` behind the same trait. Comments come back
// unscored — toxicity is always computed downstream, never canned here.

use anyhow::{bail, Result};
use async_trait::async_trait;
use chrono::{Duration, Utc};
use tracing::info;

use crate::db::models::{ContentMetrics, Platform, RawComment};
use crate::platforms::traits::{ContentFetcher, FetchedContent};
use crate::platforms::url;

/// Sample comment set: (author, text, age in hours). Ages spread the
/// thread over the week before the fetch.
const SAMPLE_COMMENTS: &[(&str, &str, i64)] = &[
    (
        "User123",
        "This video is amazing, I learned so much from it!",
        24 * 7,
    ),
    (
        "AngryViewer",
        "This is the worst content I have ever seen. Total garbage!",
        24 * 6,
    ),
    (
        "CalmObserver",
        "I disagree with some points, but overall it was informative.",
        24 * 5,
    ),
    (
        "ToxicTroll",
        "You should just delete your channel, nobody wants to see this stupid content!",
        24 * 4,
    ),
    (
        "PositivePerson",
        "Thank you for sharing your knowledge with us. Much appreciated!",
        24 * 3,
    ),
    (
        "CriticalThought",
        "The production quality could be better, but the content is good.",
        24 * 2,
    ),
    (
        "FrustratedFan",
        "Stop making videos if you can't even get basic facts right. Pathetic!",
        24,
    ),
    (
        "RegularViewer",
        "I watch all your videos. Keep up the good work!",
        12,
    ),
    (
        "TechEnthusiast",
        "The explanation at 5:23 was really clear. Thanks!",
        6,
    ),
    (
        "RageQuitter",
        "What a complete waste of my time! You're an idiot who doesn't know anything!",
        1,
    ),
];

pub struct MockYouTubeFetcher;

impl MockYouTubeFetcher {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MockYouTubeFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContentFetcher for MockYouTubeFetcher {
    fn platform(&self) -> Platform {
        Platform::Youtube
    }

    async fn fetch(&self, url_str: &str) -> Result<FetchedContent> {
        let Some(video_id) = url::extract_video_id(url_str) else {
            bail!("No video ID found in URL: {url_str}");
        };

        info!(url = url_str, video_id, "Fetching YouTube video");

        let now = Utc::now();
        let comments = SAMPLE_COMMENTS
            .iter()
            .enumerate()
            .map(|(i, (author, text, age_hours))| RawComment {
                id: (i + 1).to_string(),
                author: author.to_string(),
                text: text.to_string(),
                timestamp: (now - Duration::hours(*age_hours)).to_rfc3339(),
                like_count: None,
            })
            .collect();

        Ok(FetchedContent {
            content_id: Some(video_id),
            title: "How to Build a React Application".to_string(),
            creator: "CodeWithExpert".to_string(),
            metrics: ContentMetrics {
                views: Some(235_789),
                likes: Some(12_567),
                dislikes: Some(342),
                shares: None,
            },
            comments,
            audio_transcript: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[tokio::test]
    async fn test_fetch_returns_sample_thread() {
        let fetcher = MockYouTubeFetcher::new();
        let content = fetcher
            .fetch("https://www.youtube.com/watch?v=dQw4w9WgXcQ")
            .await
            .unwrap();

        assert_eq!(content.content_id.as_deref(), Some("dQw4w9WgXcQ"));
        assert_eq!(content.title, "How to Build a React Application");
        assert_eq!(content.creator, "CodeWithExpert");
        assert_eq!(content.metrics.views, Some(235_789));
        assert_eq!(content.comments.len(), 10);
        assert!(content.audio_transcript.is_none());

        // IDs are unique and timestamps parse as RFC 3339
        let mut ids: Vec<&str> = content.comments.iter().map(|c| c.id.as_str()).collect();
        ids.dedup();
        assert_eq!(ids.len(), 10);
        for comment in &content.comments {
            assert!(DateTime::parse_from_rfc3339(&comment.timestamp).is_ok());
        }
    }

    #[tokio::test]
    async fn test_fetch_rejects_url_without_video_id() {
        let fetcher = MockYouTubeFetcher::new();
        let result = fetcher.fetch("https://www.youtube.com/watch?v=short").await;
        assert!(result.is_err());
    }
}
