// Database schema — table creation and migrations.
//
// We use a simple version-based migration approach: a `schema_version` table
// tracks which migrations have run, and each migration is a function that
// executes SQL statements.

use anyhow::{Context, Result};
use rusqlite::Connection;

/// Create all tables if they don't exist yet.
///
/// This is idempotent — safe to call on every startup.
pub fn create_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        -- Tracks schema version for future migrations
        CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        -- Completed analysis runs, one row per analyzed URL
        CREATE TABLE IF NOT EXISTS analyses (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            platform TEXT NOT NULL,            -- 'youtube' or 'instagram'
            url TEXT NOT NULL,
            content_id TEXT,                   -- video ID / reel shortcode
            title TEXT NOT NULL,
            creator TEXT NOT NULL,
            metrics TEXT NOT NULL DEFAULT '{}',-- engagement counters as JSON
            total_comments INTEGER NOT NULL DEFAULT 0,
            toxic_comments INTEGER NOT NULL DEFAULT 0,
            non_toxic_comments INTEGER NOT NULL DEFAULT 0,
            average_toxicity REAL NOT NULL DEFAULT 0,
            comments TEXT NOT NULL DEFAULT '[]', -- JSON array of scored comments
            analyzed_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        -- Index for filtering the history by platform
        CREATE INDEX IF NOT EXISTS idx_analyses_platform
            ON analyses(platform);

        -- Index for recency-ordered history queries
        CREATE INDEX IF NOT EXISTS idx_analyses_age
            ON analyses(analyzed_at);
        ",
    )
    .context("Failed to create database tables")?;

    // Record initial schema version if not already set
    conn.execute(
        "INSERT OR IGNORE INTO schema_version (version) VALUES (?1)",
        [1],
    )?;

    // Migration v2: add the audio column to analyses. Stores the reel
    // audio-track analysis (transcript, toxicity, distance) as JSON; NULL
    // for platforms without an audio track.
    run_migration(conn, 2, |c| {
        c.execute_batch("ALTER TABLE analyses ADD COLUMN audio TEXT;")
    })?;

    Ok(())
}

/// Run a migration if it hasn't been applied yet.
/// The migration function receives the connection and should execute its SQL.
fn run_migration<F>(conn: &Connection, version: i64, migrate: F) -> Result<()>
where
    F: FnOnce(&Connection) -> rusqlite::Result<()>,
{
    let already_applied: bool = conn.query_row(
        "SELECT COUNT(*) > 0 FROM schema_version WHERE version = ?1",
        [version],
        |row| row.get(0),
    )?;

    if !already_applied {
        migrate(conn).with_context(|| format!("Migration v{version} failed"))?;
        conn.execute(
            "INSERT INTO schema_version (version) VALUES (?1)",
            [version],
        )?;
    }

    Ok(())
}

/// Count the number of tables in the database (useful for init confirmation).
pub fn table_count(conn: &Connection) -> Result<i64> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%'",
        [],
        |row| row.get(0),
    )?;
    Ok(count)
}
