// Colored terminal output for analysis reports and history listings.
//
// This module handles all terminal-specific formatting: colors, tables,
// progress indicators. The main.rs display functions delegate here.

use colored::Colorize;

use crate::db::models::{Analysis, ToxicityLabel};

/// Display a full analysis report in the terminal.
pub fn display_analysis(analysis: &Analysis) {
    println!("\n{}", format!("=== {} ===", analysis.title).bold());
    println!("  Creator: {}", analysis.creator);
    println!("  Platform: {}", analysis.platform);
    println!("  URL: {}", analysis.url);
    if let Some(content_id) = &analysis.content_id {
        println!("  Content ID: {content_id}");
    }

    let metrics = &analysis.metrics;
    let mut parts: Vec<String> = Vec::new();
    if let Some(views) = metrics.views {
        parts.push(format!("{views} views"));
    }
    if let Some(likes) = metrics.likes {
        parts.push(format!("{likes} likes"));
    }
    if let Some(dislikes) = metrics.dislikes {
        parts.push(format!("{dislikes} dislikes"));
    }
    if let Some(shares) = metrics.shares {
        parts.push(format!("{shares} shares"));
    }
    if !parts.is_empty() {
        println!("  {}", parts.join(" | ").dimmed());
    }

    let stats = &analysis.stats;
    println!(
        "\n  Comments: {} total, {} toxic, {} non-toxic",
        stats.total_comments, stats.toxic_comments, stats.non_toxic_comments
    );
    println!(
        "  Average toxicity: {:.2} ({})",
        stats.average_toxicity,
        colorize_label(ToxicityLabel::from_score(stats.average_toxicity))
    );

    if !analysis.comments.is_empty() {
        println!();
        for (i, scored) in analysis.comments.iter().enumerate() {
            let preview = super::truncate_chars(&scored.comment.text, 100);
            println!(
                "    {:>3}. [tox: {}] @{:<24} {}",
                i + 1,
                colorize_score(scored.toxicity),
                scored.comment.author,
                preview.dimmed()
            );
        }
    }

    if let Some(audio) = &analysis.audio {
        println!("\n  {}", "Audio transcript".bold());
        let preview = super::truncate_chars(&audio.transcript, 140);
        println!("    \"{}\"", preview.dimmed());
        println!(
            "    Toxicity: {}  |  Distance vs comments: {:.2}",
            colorize_score(audio.toxicity),
            audio.vs_comments_distance
        );
    }

    println!();
}

/// Display recent analyses as a table.
pub fn display_history(analyses: &[Analysis]) {
    if analyses.is_empty() {
        println!("No analyses yet. Run `toxicscan analyze <url>` first.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Analysis History ({} entries) ===", analyses.len()).bold()
    );
    println!();

    // Header
    println!(
        "  {:>4}  {:<10} {:<42} {:>7}  {:>5}  {}",
        "ID".dimmed(),
        "Platform".dimmed(),
        "Title".dimmed(),
        "Toxic".dimmed(),
        "Avg".dimmed(),
        "Analyzed".dimmed(),
    );
    println!("  {}", "-".repeat(96).dimmed());

    for analysis in analyses {
        let title = super::truncate_chars(&analysis.title, 39);
        let toxic = format!(
            "{}/{}",
            analysis.stats.toxic_comments, analysis.stats.total_comments
        );
        println!(
            "  {:>4}  {:<10} {:<42} {:>7}  {:>5}  {}",
            analysis.id,
            analysis.platform.as_str(),
            title,
            toxic,
            colorize_score(analysis.stats.average_toxicity),
            analysis.analyzed_at.dimmed(),
        );
    }

    println!();
}

/// Colorize a toxicity score by its display label.
fn colorize_score(score: f64) -> colored::ColoredString {
    let text = format!("{score:.2}");
    match ToxicityLabel::from_score(score) {
        ToxicityLabel::NonToxic => text.green(),
        ToxicityLabel::ModeratelyToxic => text.yellow(),
        ToxicityLabel::Toxic => text.red().bold(),
    }
}

/// Colorize a toxicity label.
fn colorize_label(label: ToxicityLabel) -> colored::ColoredString {
    match label {
        ToxicityLabel::NonToxic => label.as_str().green(),
        ToxicityLabel::ModeratelyToxic => label.as_str().yellow(),
        ToxicityLabel::Toxic => label.as_str().red().bold(),
    }
}
