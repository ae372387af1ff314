// Scoring — pure statistics plus the analysis pipeline.

pub mod report;
pub mod stats;
