// SqliteDatabase — rusqlite backend implementing the Database trait.
//
// The Connection is wrapped in tokio::sync::Mutex because Connection is !Send.
// Trait methods lock the mutex, do synchronous rusqlite work, and return.
// The lock is never held across .await points — Rust enforces this because
// MutexGuard is !Send.
//
// The free functions in queries.rs remain unchanged so existing tests
// continue to work against Connection directly.

use anyhow::Result;
use async_trait::async_trait;
use rusqlite::Connection;
use tokio::sync::Mutex;

use super::models::{Analysis, Platform};
use super::traits::Database;

pub struct SqliteDatabase {
    conn: Mutex<Connection>,
}

impl SqliteDatabase {
    /// Wrap an already-opened rusqlite Connection.
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }
}

#[async_trait]
impl Database for SqliteDatabase {
    async fn table_count(&self) -> Result<i64> {
        let conn = self.conn.lock().await;
        super::schema::table_count(&conn)
    }

    async fn insert_analysis(&self, analysis: &Analysis) -> Result<i64> {
        let conn = self.conn.lock().await;
        super::queries::insert_analysis(&conn, analysis)
    }

    async fn get_analysis(&self, id: i64) -> Result<Option<Analysis>> {
        let conn = self.conn.lock().await;
        super::queries::get_analysis(&conn, id)
    }

    async fn get_recent_analyses(
        &self,
        limit: u32,
        platform: Option<Platform>,
    ) -> Result<Vec<Analysis>> {
        let conn = self.conn.lock().await;
        super::queries::get_recent_analyses(&conn, limit, platform)
    }

    async fn count_analyses(&self, platform: Option<Platform>) -> Result<i64> {
        let conn = self.conn.lock().await;
        super::queries::count_analyses(&conn, platform)
    }
}
