// Database trait — backend-agnostic async interface for all DB operations.
//
// Implementors: SqliteDatabase (wraps rusqlite), PgDatabase (wraps sqlx).
// All methods are async so both sync (rusqlite via Mutex) and native async
// (sqlx) backends fit behind a single interface.

use anyhow::Result;
use async_trait::async_trait;

use super::models::{Analysis, Platform};

#[async_trait]
pub trait Database: Send + Sync {
    // --- Lifecycle ---

    /// Count the number of user-created tables in the database.
    async fn table_count(&self) -> Result<i64>;

    // --- Analyses ---

    /// Store a completed analysis and return its ID.
    async fn insert_analysis(&self, analysis: &Analysis) -> Result<i64>;

    /// Load a single analysis by ID.
    async fn get_analysis(&self, id: i64) -> Result<Option<Analysis>>;

    /// Get recent analyses, newest first, optionally restricted to one
    /// platform.
    async fn get_recent_analyses(
        &self,
        limit: u32,
        platform: Option<Platform>,
    ) -> Result<Vec<Analysis>>;

    /// Count stored analyses, optionally restricted to one platform.
    async fn count_analyses(&self, platform: Option<Platform>) -> Result<i64>;
}
