// Content fetcher trait — one implementation per platform.

use anyhow::Result;
use async_trait::async_trait;

use crate::db::models::{ContentMetrics, Platform, RawComment};

/// What a platform fetch returns: content metadata plus its raw comments.
#[derive(Debug, Clone)]
pub struct FetchedContent {
    /// Platform-native identifier parsed from the URL (video ID, shortcode).
    pub content_id: Option<String>,
    pub title: String,
    pub creator: String,
    pub metrics: ContentMetrics,
    pub comments: Vec<RawComment>,
    /// Reels carry an audio-track transcript; videos don't.
    pub audio_transcript: Option<String>,
}

/// Trait for fetching analyzable content from a platform. Async because
/// real implementations sit behind platform HTTP APIs.
#[async_trait]
pub trait ContentFetcher: Send + Sync {
    /// Which platform this fetcher serves.
    fn platform(&self) -> Platform;

    /// Fetch the content behind `url` together with its comments.
    /// Fails when the URL doesn't carry a recognizable content ID.
    async fn fetch(&self, url: &str) -> Result<FetchedContent>;
}
