// Toxicity scorer trait — the swap-ready abstraction.
//
// This trait defines the interface for toxicity scoring. The shipping
// implementation is the deterministic keyword scorer; a model-backed
// scorer would slot in behind the same trait without touching the
// pipeline.

use anyhow::Result;
use async_trait::async_trait;

/// Trait for scoring text toxicity. The interface is async because a real
/// provider would sit behind an HTTP API call, even though the keyword
/// scorer itself is pure computation.
#[async_trait]
pub trait ToxicityScorer: Send + Sync {
    /// Score a single text, 0.0 (benign) to 1.0 (very toxic).
    async fn score_text(&self, text: &str) -> Result<f64>;

    /// Scores at or above this count as toxic. Implementations with their
    /// own calibration override it so verdicts stay consistent with their
    /// scores.
    fn toxic_threshold(&self) -> f64 {
        crate::toxicity::keyword::TOXIC_THRESHOLD
    }

    /// Score multiple texts, returning results in the same order.
    /// Default implementation calls score_text sequentially — providers
    /// can override for batching if they support it.
    async fn score_batch(&self, texts: &[String]) -> Result<Vec<f64>> {
        let mut results = Vec::with_capacity(texts.len());
        for text in texts {
            results.push(self.score_text(text).await?);
        }
        Ok(results)
    }
}
