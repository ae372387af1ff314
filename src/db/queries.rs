// Database queries — CRUD operations for all tables.
//
// Every database interaction goes through this module. This keeps SQL
// contained in one place and gives the rest of the app clean Rust interfaces.

use anyhow::Result;
use rusqlite::{params, Connection};

use super::models::{Analysis, AnalysisStats, Platform};

const ANALYSIS_COLUMNS: &str = "id, platform, url, content_id, title, creator, metrics,
    total_comments, toxic_comments, non_toxic_comments, average_toxicity,
    comments, audio, analyzed_at";

/// Store a completed analysis. Returns the database-assigned row ID.
pub fn insert_analysis(conn: &Connection, analysis: &Analysis) -> Result<i64> {
    let metrics_json = serde_json::to_string(&analysis.metrics)?;
    let comments_json = serde_json::to_string(&analysis.comments)?;
    let audio_json = match &analysis.audio {
        Some(audio) => Some(serde_json::to_string(audio)?),
        None => None,
    };

    conn.execute(
        "INSERT INTO analyses
            (platform, url, content_id, title, creator, metrics,
             total_comments, toxic_comments, non_toxic_comments, average_toxicity,
             comments, audio, analyzed_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
        params![
            analysis.platform.as_str(),
            analysis.url,
            analysis.content_id,
            analysis.title,
            analysis.creator,
            metrics_json,
            analysis.stats.total_comments,
            analysis.stats.toxic_comments,
            analysis.stats.non_toxic_comments,
            analysis.stats.average_toxicity,
            comments_json,
            audio_json,
            analysis.analyzed_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Load a single analysis by ID.
pub fn get_analysis(conn: &Connection, id: i64) -> Result<Option<Analysis>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {ANALYSIS_COLUMNS} FROM analyses WHERE id = ?1"
    ))?;
    let result = stmt.query_row(params![id], row_to_analysis).optional()?;
    Ok(result)
}

/// Get recent analyses, newest first. `id DESC` breaks same-second ties so
/// the order stays stable.
pub fn get_recent_analyses(
    conn: &Connection,
    limit: u32,
    platform: Option<Platform>,
) -> Result<Vec<Analysis>> {
    let mut analyses = Vec::new();

    match platform {
        Some(p) => {
            let mut stmt = conn.prepare(&format!(
                "SELECT {ANALYSIS_COLUMNS} FROM analyses
                 WHERE platform = ?1
                 ORDER BY analyzed_at DESC, id DESC
                 LIMIT ?2"
            ))?;
            let rows = stmt.query_map(params![p.as_str(), limit], row_to_analysis)?;
            for row in rows {
                analyses.push(row?);
            }
        }
        None => {
            let mut stmt = conn.prepare(&format!(
                "SELECT {ANALYSIS_COLUMNS} FROM analyses
                 ORDER BY analyzed_at DESC, id DESC
                 LIMIT ?1"
            ))?;
            let rows = stmt.query_map(params![limit], row_to_analysis)?;
            for row in rows {
                analyses.push(row?);
            }
        }
    }

    Ok(analyses)
}

/// Count stored analyses, optionally restricted to one platform.
pub fn count_analyses(conn: &Connection, platform: Option<Platform>) -> Result<i64> {
    let count: i64 = match platform {
        Some(p) => conn.query_row(
            "SELECT COUNT(*) FROM analyses WHERE platform = ?1",
            params![p.as_str()],
            |row| row.get(0),
        )?,
        None => conn.query_row("SELECT COUNT(*) FROM analyses", [], |row| row.get(0))?,
    };
    Ok(count)
}

/// Map one `analyses` row to the domain struct. JSON columns written by an
/// older build deserialize leniently (missing pieces become defaults).
fn row_to_analysis(row: &rusqlite::Row<'_>) -> rusqlite::Result<Analysis> {
    let platform_str: String = row.get(1)?;
    let platform = Platform::parse(&platform_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            1,
            rusqlite::types::Type::Text,
            format!("unknown platform '{platform_str}'").into(),
        )
    })?;

    let metrics_json: String = row.get(6)?;
    let comments_json: String = row.get(11)?;
    let audio_json: Option<String> = row.get(12)?;

    Ok(Analysis {
        id: row.get(0)?,
        platform,
        url: row.get(2)?,
        content_id: row.get(3)?,
        title: row.get(4)?,
        creator: row.get(5)?,
        metrics: serde_json::from_str(&metrics_json).unwrap_or_default(),
        stats: AnalysisStats {
            total_comments: row.get(7)?,
            toxic_comments: row.get(8)?,
            non_toxic_comments: row.get(9)?,
            average_toxicity: row.get(10)?,
        },
        comments: serde_json::from_str(&comments_json).unwrap_or_default(),
        audio: audio_json.and_then(|json| serde_json::from_str(&json).ok()),
        analyzed_at: row.get(13)?,
    })
}

// rusqlite's optional() helper — converts "no rows" into None
use rusqlite::OptionalExtension;
