// Unit tests for scoring and output functions.
//
// Tests isolated pure functions: keyword scoring edge cases (matching,
// clamping, custom rules), ToxicityLabel::from_score boundary conditions,
// stats aggregation, and truncate_chars UTF-8 safety.

use toxicscan::db::models::{RawComment, ScoredComment, ToxicityLabel};
use toxicscan::output::truncate_chars;
use toxicscan::scoring::stats::{aggregate, audio_distance};
use toxicscan::toxicity::keyword::{
    score_comment, score_text, ScoringRules, KEYWORD_INCREMENT, TOXIC_KEYWORDS, TOXIC_THRESHOLD,
};

fn comment(text: &str) -> RawComment {
    RawComment {
        id: "1".to_string(),
        author: "commenter".to_string(),
        text: text.to_string(),
        timestamp: "2025-06-01T12:00:00Z".to_string(),
        like_count: None,
    }
}

fn scored(toxicity: f64, is_toxic: bool) -> ScoredComment {
    ScoredComment {
        comment: comment("placeholder"),
        toxicity,
        is_toxic,
    }
}

// ============================================================
// score_text — keyword matching
// ============================================================

#[test]
fn score_empty_text_is_zero() {
    let rules = ScoringRules::default();
    assert_eq!(score_text("", &rules), 0.0);
}

#[test]
fn score_clean_text_is_zero() {
    let rules = ScoringRules::default();
    assert_eq!(score_text("What a wonderful explanation, thank you!", &rules), 0.0);
}

#[test]
fn score_single_keyword() {
    let rules = ScoringRules::default();
    let score = score_text("that was a stupid decision", &rules);
    assert!((score - 0.2).abs() < 1e-9);
}

#[test]
fn score_two_keywords_sum() {
    let rules = ScoringRules::default();
    // "terrible" + "worst" = 0.4
    let score = score_text("the worst, most terrible take", &rules);
    assert!((score - 0.4).abs() < 1e-9);
}

#[test]
fn score_repeated_keyword_counts_once() {
    let rules = ScoringRules::default();
    let score = score_text("stupid stupid stupid", &rules);
    assert!((score - 0.2).abs() < 1e-9);
}

#[test]
fn score_is_case_insensitive() {
    let rules = ScoringRules::default();
    let upper = score_text("THIS IS GARBAGE", &rules);
    let lower = score_text("this is garbage", &rules);
    assert!((upper - lower).abs() < 1e-9);
    assert!((upper - 0.2).abs() < 1e-9);
}

#[test]
fn score_matches_keyword_inside_larger_word() {
    let rules = ScoringRules::default();
    // Substring matching is intentional: "skill" contains "kill"
    let score = score_text("what a skill", &rules);
    assert!((score - 0.2).abs() < 1e-9);
}

#[test]
fn score_clamps_at_one() {
    let rules = ScoringRules::default();
    // 6 distinct keywords * 0.2 = 1.2 -> clamped to 1.0
    let score = score_text("hate this stupid idiot, dumb moron, terrible", &rules);
    assert_eq!(score, 1.0);
}

#[test]
fn score_every_keyword_alone_scores_one_increment() {
    let rules = ScoringRules::default();
    for keyword in TOXIC_KEYWORDS {
        let text = format!("absolutely {keyword} content");
        let score = score_text(&text, &rules);
        assert!(
            (score - KEYWORD_INCREMENT).abs() < 1e-9,
            "Keyword {keyword} alone should score {KEYWORD_INCREMENT}, got {score}"
        );
    }
}

// ============================================================
// score_comment — verdict threshold
// ============================================================

#[test]
fn verdict_below_threshold_is_not_toxic() {
    let rules = ScoringRules::default();
    // One keyword = 0.2, below the 0.3 threshold
    let scored = score_comment(comment("this is dumb"), &rules);
    assert!((scored.toxicity - 0.2).abs() < 1e-9);
    assert!(!scored.is_toxic);
}

#[test]
fn verdict_above_threshold_is_toxic() {
    let rules = ScoringRules::default();
    // Two keywords = 0.4, above the 0.3 threshold
    let scored = score_comment(comment("useless and pathetic"), &rules);
    assert!((scored.toxicity - 0.4).abs() < 1e-9);
    assert!(scored.is_toxic);
}

#[test]
fn verdict_exactly_at_threshold_is_toxic() {
    // Two 0.15 increments land exactly on the 0.3 threshold (0.15 + 0.15
    // doubles without rounding), and the comparison is inclusive.
    let rules = ScoringRules {
        keyword_increment: 0.15,
        ..Default::default()
    };
    let scored = score_comment(comment("hate this garbage"), &rules);
    assert_eq!(scored.toxicity, 0.3);
    assert!(scored.is_toxic);
}

#[test]
fn custom_keyword_list_replaces_default() {
    let rules = ScoringRules {
        keywords: vec!["banana".to_string()],
        ..Default::default()
    };
    assert!((score_text("banana bread", &rules) - 0.2).abs() < 1e-9);
    // Default keywords no longer match
    assert_eq!(score_text("hate stupid idiot", &rules), 0.0);
}

#[test]
fn default_rules_match_documented_values() {
    let rules = ScoringRules::default();
    assert_eq!(rules.keywords.len(), 14);
    assert_eq!(rules.keyword_increment, 0.2);
    assert_eq!(rules.toxic_threshold, 0.3);
    assert_eq!(TOXIC_KEYWORDS.len(), 14);
    assert_eq!(KEYWORD_INCREMENT, 0.2);
    assert_eq!(TOXIC_THRESHOLD, 0.3);
}

// ============================================================
// ToxicityLabel::from_score — boundary conditions
// ============================================================

#[test]
fn label_zero() {
    assert_eq!(ToxicityLabel::from_score(0.0), ToxicityLabel::NonToxic);
}

#[test]
fn label_just_below_moderate() {
    assert_eq!(ToxicityLabel::from_score(0.299), ToxicityLabel::NonToxic);
}

#[test]
fn label_exact_boundary_moderate() {
    assert_eq!(
        ToxicityLabel::from_score(0.3),
        ToxicityLabel::ModeratelyToxic
    );
}

#[test]
fn label_just_below_toxic() {
    assert_eq!(
        ToxicityLabel::from_score(0.699),
        ToxicityLabel::ModeratelyToxic
    );
}

#[test]
fn label_exact_boundary_toxic() {
    assert_eq!(ToxicityLabel::from_score(0.7), ToxicityLabel::Toxic);
}

#[test]
fn label_full_score() {
    assert_eq!(ToxicityLabel::from_score(1.0), ToxicityLabel::Toxic);
}

#[test]
fn label_nan_falls_to_toxic() {
    // NaN fails both < comparisons, so it falls through to the wildcard arm
    assert_eq!(ToxicityLabel::from_score(f64::NAN), ToxicityLabel::Toxic);
}

#[test]
fn label_display_matches_as_str() {
    for label in [
        ToxicityLabel::NonToxic,
        ToxicityLabel::ModeratelyToxic,
        ToxicityLabel::Toxic,
    ] {
        assert_eq!(label.to_string(), label.as_str());
    }
}

#[test]
fn label_round_trip_score_to_string() {
    let cases = [
        (0.0, "Non-Toxic"),
        (0.2, "Non-Toxic"),
        (0.4, "Moderately Toxic"),
        (0.8, "Toxic"),
    ];
    for (score, expected_str) in cases {
        let label = ToxicityLabel::from_score(score);
        assert_eq!(
            label.as_str(),
            expected_str,
            "Score {score} should map to {expected_str}"
        );
    }
}

// ============================================================
// aggregate — stats over scored comments
// ============================================================

#[test]
fn aggregate_empty_is_all_zeros() {
    let stats = aggregate(&[]);
    assert_eq!(stats.total_comments, 0);
    assert_eq!(stats.toxic_comments, 0);
    assert_eq!(stats.non_toxic_comments, 0);
    // Average of nothing is defined as 0.0, not NaN
    assert_eq!(stats.average_toxicity, 0.0);
}

#[test]
fn aggregate_single_comment() {
    let stats = aggregate(&[scored(0.4, true)]);
    assert_eq!(stats.total_comments, 1);
    assert_eq!(stats.toxic_comments, 1);
    assert_eq!(stats.non_toxic_comments, 0);
    assert!((stats.average_toxicity - 0.4).abs() < 1e-9);
}

#[test]
fn aggregate_mixed_batch() {
    let batch = vec![
        scored(0.0, false),
        scored(0.2, false),
        scored(0.4, true),
        scored(1.0, true),
    ];
    let stats = aggregate(&batch);
    assert_eq!(stats.total_comments, 4);
    assert_eq!(stats.toxic_comments, 2);
    assert_eq!(stats.non_toxic_comments, 2);
    // (0.0 + 0.2 + 0.4 + 1.0) / 4 = 0.4
    assert!((stats.average_toxicity - 0.4).abs() < 1e-9);
}

#[test]
fn aggregate_is_order_invariant() {
    let forward = vec![scored(0.1, false), scored(0.7, true), scored(0.3, true)];
    let mut shuffled = forward.clone();
    shuffled.swap(0, 2);

    let a = aggregate(&forward);
    let b = aggregate(&shuffled);
    assert_eq!(a.toxic_comments, b.toxic_comments);
    assert!((a.average_toxicity - b.average_toxicity).abs() < 1e-9);
}

// ============================================================
// audio_distance
// ============================================================

#[test]
fn audio_distance_symmetric() {
    assert!((audio_distance(0.1, 0.6) - 0.5).abs() < 1e-9);
    assert!((audio_distance(0.6, 0.1) - 0.5).abs() < 1e-9);
}

#[test]
fn audio_distance_zero_for_equal_scores() {
    assert_eq!(audio_distance(0.25, 0.25), 0.0);
}

// ============================================================
// truncate_chars — UTF-8 safe truncation
// ============================================================

#[test]
fn truncate_empty_string() {
    assert_eq!(truncate_chars("", 10), "");
}

#[test]
fn truncate_within_limit() {
    assert_eq!(truncate_chars("short comment", 20), "short comment");
}

#[test]
fn truncate_exactly_at_limit() {
    assert_eq!(truncate_chars("toxic", 5), "toxic");
}

#[test]
fn truncate_one_over_limit() {
    assert_eq!(truncate_chars("toxic!", 5), "toxic...");
}

#[test]
fn truncate_max_zero_non_empty() {
    // 0 chars taken + "..." appended
    assert_eq!(truncate_chars("anything", 0), "...");
}

#[test]
fn truncate_emoji_safe() {
    // The emoji is 1 char but 4 bytes; byte slicing here would panic
    let text = "Nice video 👍!";
    assert_eq!(text.chars().count(), 13);
    let result = truncate_chars(text, 12);
    assert_eq!(result, "Nice video 👍...");
}

#[test]
fn truncate_accented_chars() {
    // é is 1 char, 2 bytes
    let text = "vidéo géniale";
    let result = truncate_chars(text, 5);
    assert_eq!(result, "vidéo...");
}

#[test]
fn truncate_cjk_characters() {
    let text = "コメント分析";
    assert_eq!(text.chars().count(), 6);
    let result = truncate_chars(text, 4);
    assert_eq!(result, "コメント...");
}

#[test]
fn truncate_long_comment() {
    let text = "a".repeat(300);
    let result = truncate_chars(&text, 100);
    assert_eq!(result.chars().count(), 103); // 100 + "..."
    assert!(result.ends_with("..."));
}
