// System status display — shows DB stats and the most recent analyses.

use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

use crate::db::models::Platform;
use crate::db::Database;

/// Display system status to the terminal.
pub async fn show(db: &Arc<dyn Database>, db_display: &str) -> Result<()> {
    // For SQLite the display string is a real file path; report its size.
    // For PostgreSQL it's a redacted connection URL.
    if Path::new(db_display).exists() {
        let file_size = std::fs::metadata(db_display)
            .map(|m| format_bytes(m.len()))
            .unwrap_or_else(|_| "unknown".to_string());
        println!("Database: {} ({})", db_display, file_size);
    } else {
        println!("Database: {}", db_display);
    }

    let total = db.count_analyses(None).await?;
    let youtube = db.count_analyses(Some(Platform::Youtube)).await?;
    let instagram = db.count_analyses(Some(Platform::Instagram)).await?;
    println!(
        "Analyses: {} total ({} youtube, {} instagram)",
        total, youtube, instagram
    );

    let recent = db.get_recent_analyses(5, None).await?;
    if recent.is_empty() {
        println!("Recent analyses: none yet");
        println!("  Run `toxicscan analyze <url>` to analyze a video or reel");
    } else {
        println!("Recent analyses: {} most recent:", recent.len());
        for analysis in &recent {
            println!(
                "  #{} {} \"{}\" ({})",
                analysis.id,
                analysis.platform,
                crate::output::truncate_chars(&analysis.title, 40),
                analysis.analyzed_at
            );
        }
    }

    Ok(())
}

fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}
