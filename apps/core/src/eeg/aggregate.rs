//! Batch summaries over per-row results.

use super::features::FeatureVector;
use super::scoring::{round_to, score, ScoreResult};
use super::target::Target;
use serde::Serialize;

/// Per-row results returned in a batch response are capped at this many.
pub const MAX_BATCH_RESULTS: usize = 200;

/// Aggregate over every scored row of one upload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum BatchSummary {
    MeanProbability { mean_probability: f64 },
    Range { mean: f64, min: i64, max: i64 },
    /// No rows were scored; serializes as `{}`.
    Empty {},
}

/// Summarizes `results` according to the output shape of `target`.
pub fn aggregate(results: &[ScoreResult], target: Target) -> BatchSummary {
    if target.is_probability() {
        let probabilities: Vec<f64> = results.iter().filter_map(ScoreResult::probability).collect();
        if probabilities.is_empty() {
            return BatchSummary::Empty {};
        }
        let mean = probabilities.iter().sum::<f64>() / probabilities.len() as f64;
        return BatchSummary::MeanProbability {
            mean_probability: round_to(mean, 3),
        };
    }

    let levels: Vec<i64> = results.iter().filter_map(ScoreResult::level).collect();
    match (levels.iter().min(), levels.iter().max()) {
        (Some(&min), Some(&max)) => {
            let mean = levels.iter().sum::<i64>() as f64 / levels.len() as f64;
            BatchSummary::Range {
                mean: round_to(mean, 2),
                min,
                max,
            }
        }
        _ => BatchSummary::Empty {},
    }
}

/// Response body of the batch endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub target: Target,
    /// Every successfully scored row, not just the returned ones.
    pub count: usize,
    pub results: Vec<ScoreResult>,
    pub summary: BatchSummary,
}

impl BatchReport {
    pub fn build(target: Target, vectors: &[FeatureVector]) -> Self {
        let mut results: Vec<ScoreResult> = vectors.iter().map(|v| score(v, target)).collect();
        let summary = aggregate(&results, target);
        let count = results.len();
        results.truncate(MAX_BATCH_RESULTS);
        Self {
            target,
            count,
            results,
            summary,
        }
    }
}
