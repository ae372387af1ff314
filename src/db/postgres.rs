// PgDatabase — PostgreSQL backend implementing the Database trait.
//
// Uses sqlx PgPool for native async queries. All queries use runtime
// parameter binding (not compile-time macros) to avoid requiring
// DATABASE_URL at compile time.
//
// Key differences from SQLite:
// - TIMESTAMPTZ instead of TEXT for timestamps
// - JSONB instead of TEXT for structured data
// - $1/$2 parameter syntax (handled by sqlx)
// - GENERATED ALWAYS AS IDENTITY for auto-increment

use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx_core::pool::Pool;
use sqlx_core::row::Row;
use sqlx_postgres::{PgRow, Postgres};

use super::models::{Analysis, AnalysisStats, Platform};
use super::traits::Database;

/// Type alias for the PostgreSQL connection pool.
pub type PgPool = Pool<Postgres>;

const ANALYSIS_COLUMNS: &str = "id, platform, url, content_id, title, creator, metrics,
    total_comments, toxic_comments, non_toxic_comments, average_toxicity,
    comments, audio,
    to_char(analyzed_at, 'YYYY-MM-DD HH24:MI:SS') as analyzed_at";

pub struct PgDatabase {
    pool: PgPool,
}

impl PgDatabase {
    /// Connect to PostgreSQL and run migrations.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = PgPool::connect(database_url)
            .await
            .with_context(|| format!("Failed to connect to PostgreSQL at {database_url}"))?;

        let db = Self { pool };
        db.run_migrations().await?;
        Ok(db)
    }

    /// Run all pending migrations.
    ///
    /// Acquires a Postgres session-level advisory lock so that concurrent
    /// processes (e.g. two app instances starting together) don't race to
    /// apply the same migration.
    ///
    /// Session-level advisory locks are bound to the backend session that
    /// acquired them, so the lock and unlock MUST run on the same physical
    /// connection. We acquire a dedicated connection (`lock_conn`) for this
    /// purpose and keep it alive for the duration of the migration loop.
    /// Migrations themselves can use the pool normally. The unlock always runs
    /// even if a migration fails — we capture the migration result first, then
    /// unlock, then surface any error.
    async fn run_migrations(&self) -> Result<()> {
        // 0x544F58494353434E = ASCII "TOXICSCN" as a big-endian i64.
        // Used as the advisory lock key to namespace this lock to ToxicScan.
        const MIGRATION_LOCK_KEY: i64 = 0x544F58494353434E_u64 as i64;

        // Acquire a dedicated connection to hold the advisory lock for the
        // entire migration sequence. Dropping this connection returns it to
        // the pool AND releases the session-level advisory lock automatically.
        let mut lock_conn = self
            .pool
            .acquire()
            .await
            .context("Failed to acquire connection for migration advisory lock")?;

        // Block until no other ToxicScan process is running migrations.
        sqlx_core::query::query("SELECT pg_advisory_lock($1)")
            .bind(MIGRATION_LOCK_KEY)
            .execute(&mut *lock_conn)
            .await
            .context("Failed to acquire migration advisory lock")?;

        // Run all migrations using the shared pool. The advisory lock is held
        // on lock_conn independently, so pool connections can be used freely.
        let migration_result: Result<()> = async {
            // Ensure schema_version table exists (idempotent DDL, no transaction needed)
            sqlx_core::query::query(
                "CREATE TABLE IF NOT EXISTS schema_version (
                    version INTEGER PRIMARY KEY,
                    applied_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
                )",
            )
            .execute(&self.pool)
            .await?;

            let migrations = [
                (
                    1,
                    include_str!("../../migrations/postgres/0001_initial.sql"),
                ),
                (2, include_str!("../../migrations/postgres/0002_audio.sql")),
            ];

            for (version, sql) in migrations {
                let applied: bool = sqlx_core::query::query(
                    "SELECT COUNT(*) > 0 FROM schema_version WHERE version = $1",
                )
                .bind(version)
                .fetch_one(&self.pool)
                .await
                .map(|row| row.get::<bool, _>(0))
                .unwrap_or(false);

                if !applied {
                    // Each migration file ends with its own schema_version insert,
                    // and the transaction commits or rolls back the schema change
                    // and the version record together.
                    let mut tx = self.pool.begin().await?;
                    sqlx_core::raw_sql::raw_sql(sql).execute(&mut *tx).await?;
                    tx.commit().await?;
                }
            }

            Ok(())
        }
        .await;

        // Release the advisory lock on the same connection that acquired it.
        // This always runs even if migrations failed — we surface the migration
        // error below, but we never skip the unlock.
        let unlock_result = sqlx_core::query::query("SELECT pg_advisory_unlock($1)")
            .bind(MIGRATION_LOCK_KEY)
            .execute(&mut *lock_conn)
            .await
            .context("Failed to release migration advisory lock");

        // Migration error takes priority over unlock error.
        migration_result?;
        unlock_result?;

        Ok(())
    }
}

/// Map one `analyses` row to the domain struct. JSONB columns written by an
/// older build deserialize leniently (missing pieces become defaults).
fn row_to_analysis(row: &PgRow) -> Result<Analysis> {
    let platform_str: String = row.get(1);
    let platform = Platform::parse(&platform_str)
        .with_context(|| format!("unknown platform '{platform_str}' in analyses row"))?;

    let metrics_json: serde_json::Value = row.get(6);
    let comments_json: serde_json::Value = row.get(11);
    let audio_json: Option<serde_json::Value> = row.get(12);

    Ok(Analysis {
        id: row.get(0),
        platform,
        url: row.get(2),
        content_id: row.get(3),
        title: row.get(4),
        creator: row.get(5),
        metrics: serde_json::from_value(metrics_json).unwrap_or_default(),
        stats: AnalysisStats {
            total_comments: row.get::<i32, _>(7) as u32,
            toxic_comments: row.get::<i32, _>(8) as u32,
            non_toxic_comments: row.get::<i32, _>(9) as u32,
            average_toxicity: row.get(10),
        },
        comments: serde_json::from_value(comments_json).unwrap_or_default(),
        audio: audio_json.and_then(|json| serde_json::from_value(json).ok()),
        analyzed_at: row.get(13),
    })
}

#[async_trait]
impl Database for PgDatabase {
    async fn table_count(&self) -> Result<i64> {
        let row = sqlx_core::query::query(
            "SELECT COUNT(*)::bigint FROM information_schema.tables
             WHERE table_schema = 'public' AND table_type = 'BASE TABLE'",
        )
        .fetch_one(&self.pool)
        .await?;
        Ok(row.get::<i64, _>(0))
    }

    async fn insert_analysis(&self, analysis: &Analysis) -> Result<i64> {
        let metrics_json = serde_json::to_value(&analysis.metrics)?;
        let comments_json = serde_json::to_value(&analysis.comments)?;
        let audio_json = match &analysis.audio {
            Some(audio) => Some(serde_json::to_value(audio)?),
            None => None,
        };

        // Insert with the original analyzed_at so migrated rows keep their
        // real timestamps.
        let row = sqlx_core::query::query(
            "INSERT INTO analyses
                (platform, url, content_id, title, creator, metrics,
                 total_comments, toxic_comments, non_toxic_comments, average_toxicity,
                 comments, audio, analyzed_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13::timestamptz)
             RETURNING id",
        )
        .bind(analysis.platform.as_str())
        .bind(&analysis.url)
        .bind(&analysis.content_id)
        .bind(&analysis.title)
        .bind(&analysis.creator)
        .bind(&metrics_json)
        .bind(analysis.stats.total_comments as i32)
        .bind(analysis.stats.toxic_comments as i32)
        .bind(analysis.stats.non_toxic_comments as i32)
        .bind(analysis.stats.average_toxicity)
        .bind(&comments_json)
        .bind(&audio_json)
        .bind(&analysis.analyzed_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(row.get::<i64, _>(0))
    }

    async fn get_analysis(&self, id: i64) -> Result<Option<Analysis>> {
        let row = sqlx_core::query::query(&format!(
            "SELECT {ANALYSIS_COLUMNS} FROM analyses WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(r) => Ok(Some(row_to_analysis(&r)?)),
            None => Ok(None),
        }
    }

    async fn get_recent_analyses(
        &self,
        limit: u32,
        platform: Option<Platform>,
    ) -> Result<Vec<Analysis>> {
        // Cap at i32::MAX before casting to avoid overflow — values above
        // i32::MAX are effectively unlimited for any realistic dataset.
        let limit = limit.min(i32::MAX as u32) as i32;

        let rows = match platform {
            Some(p) => {
                sqlx_core::query::query(&format!(
                    "SELECT {ANALYSIS_COLUMNS} FROM analyses
                     WHERE platform = $1
                     ORDER BY analyzed_at DESC, id DESC
                     LIMIT $2"
                ))
                .bind(p.as_str())
                .bind(limit)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx_core::query::query(&format!(
                    "SELECT {ANALYSIS_COLUMNS} FROM analyses
                     ORDER BY analyzed_at DESC, id DESC
                     LIMIT $1"
                ))
                .bind(limit)
                .fetch_all(&self.pool)
                .await?
            }
        };

        let mut analyses = Vec::new();
        for row in rows {
            analyses.push(row_to_analysis(&row)?);
        }
        Ok(analyses)
    }

    async fn count_analyses(&self, platform: Option<Platform>) -> Result<i64> {
        let row = match platform {
            Some(p) => {
                sqlx_core::query::query("SELECT COUNT(*)::bigint FROM analyses WHERE platform = $1")
                    .bind(p.as_str())
                    .fetch_one(&self.pool)
                    .await?
            }
            None => {
                sqlx_core::query::query("SELECT COUNT(*)::bigint FROM analyses")
                    .fetch_one(&self.pool)
                    .await?
            }
        };
        Ok(row.get::<i64, _>(0))
    }
}
