// Toxicity scoring — trait-based abstraction for swappable providers.
//
// The ToxicityScorer trait defines the interface. KeywordScorer implements
// it with deterministic keyword matching. When a real classification model
// lands, we swap in a different implementation without touching the rest of
// the pipeline.

pub mod keyword;
pub mod traits;
