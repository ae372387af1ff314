// Instagram content fetcher.
//
// Returns a fixed sample reel: seven comments plus an audio-track
// transcript. Engagement metrics and the creator suffix are randomized
// per fetch, matching what a real Graph API client would return for a
// fresh reel. Comments come back unscored.

use anyhow::{bail, Result};
use async_trait::async_trait;
use chrono::{Duration, Utc};
use rand::Rng;
use tracing::info;

use crate::db::models::{ContentMetrics, Platform, RawComment};
use crate::platforms::traits::{ContentFetcher, FetchedContent};
use crate::platforms::url;

/// Sample comment set: (author, text, age in hours).
const SAMPLE_COMMENTS: &[(&str, &str, i64)] = &[
    ("fan_person", "Love your content! Always so helpful!", 24 * 3),
    (
        "hater_account",
        "You're just promoting this for money. So fake and dishonest!",
        24 * 2,
    ),
    (
        "neutral_viewer",
        "Have you tried the other version of this product? I heard it's better.",
        24,
    ),
    (
        "angry_customer",
        "I bought this because of you and it was terrible! You're the worst influencer ever!",
        12,
    ),
    (
        "curious_follower",
        "Does this work for sensitive skin too?",
        6,
    ),
    (
        "trolling_user",
        "Only idiots would buy this garbage. Get a real job instead of scamming people online!",
        3,
    ),
    (
        "genuine_fan",
        "Just ordered it! Can't wait to try it out. Thanks for the recommendation!",
        1,
    ),
];

const SAMPLE_TRANSCRIPT: &str = "This is a sample audio transcript from the Instagram reel. \
    I'm showing you how this product works and why I think it's amazing for everyday use. \
    Let me know in the comments if you've tried it!";

pub struct MockInstagramFetcher;

impl MockInstagramFetcher {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MockInstagramFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContentFetcher for MockInstagramFetcher {
    fn platform(&self) -> Platform {
        Platform::Instagram
    }

    async fn fetch(&self, url_str: &str) -> Result<FetchedContent> {
        let Some(shortcode) = url::extract_shortcode(url_str) else {
            bail!("No shortcode found in URL: {url_str}");
        };

        info!(url = url_str, shortcode, "Fetching Instagram reel");

        let mut rng = rand::rng();
        let creator = format!("instagram_user_{}", rng.random_range(0..1000));
        let metrics = ContentMetrics {
            views: Some(rng.random_range(0..100_000)),
            likes: Some(rng.random_range(0..10_000)),
            dislikes: None,
            shares: Some(rng.random_range(0..1_000)),
        };

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
            content_id: Some(shortcode),
            title: "Instagram Reel Analysis".to_string(),
            creator,
            metrics,
            comments,
            audio_transcript: Some(SAMPLE_TRANSCRIPT.to_string()),
        })
    }
}
