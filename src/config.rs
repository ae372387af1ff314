use std::env;

use anyhow::Result;

/// Central configuration loaded from environment variables.
///
/// All secrets come from env vars (never hardcoded). The .env file
/// is loaded automatically at startup via dotenvy.
pub struct Config {
    pub db_path: String,
    /// PostgreSQL connection URL (when set and starts with postgres://, uses Postgres backend)
    pub database_url: Option<String>,
    /// YouTube Data API key — only needed once the live comment client lands.
    /// The sample fetcher serves canned data and doesn't require auth.
    #[allow(dead_code)]
    pub youtube_api_key: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Everything has a working default — the sample fetchers need no
    /// credentials, so a bare environment is fully functional.
    pub fn load() -> Result<Self> {
        Ok(Self {
            db_path: env::var("TOXICSCAN_DB_PATH").unwrap_or_else(|_| "./toxicscan.db".to_string()),
            database_url: env::var("DATABASE_URL").ok(),
            youtube_api_key: env::var("YOUTUBE_API_KEY").unwrap_or_default(),
        })
    }

    /// Check that the YouTube API key is configured.
    /// Call this before any future operation that talks to the real API.
    #[allow(dead_code)]
    pub fn require_youtube_api(&self) -> Result<()> {
        if self.youtube_api_key.is_empty() {
            anyhow::bail!(
                "YOUTUBE_API_KEY not set. Add it to your .env file.\n\
                 See .env.example for the required variables."
            );
        }
        Ok(())
    }
}
