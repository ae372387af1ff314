// ToxicScan: keyword toxicity analysis for YouTube and Instagram comments
//
// This is the library root. Each module corresponds to a major subsystem
// of the analysis pipeline.

pub mod config;
pub mod db;
pub mod output;
pub mod platforms;
pub mod scoring;
pub mod status;
pub mod toxicity;

#[cfg(feature = "web")]
pub mod web;
