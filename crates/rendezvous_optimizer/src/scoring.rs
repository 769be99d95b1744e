use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Reduces one venue's round-trip minutes to a single score; lower is better.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum ScoringStrategy {
    /// Sum of squared minutes, so one long journey weighs more than several
    /// short ones adding up to the same total.
    #[default]
    SumOfSquares,
    Sum,
    /// Only the worst journey counts.
    Max,
    /// Mean plus `weight` times the population variance.
    VariancePenalizedMean { weight: f64 },
}

impl ScoringStrategy {
    pub fn score(&self, minutes: &[f64]) -> f64 {
        if minutes.is_empty() {
            return 0.0;
        }

        match self {
            ScoringStrategy::SumOfSquares => minutes.iter().map(|m| m * m).sum(),
            ScoringStrategy::Sum => minutes.iter().sum(),
            ScoringStrategy::Max => minutes.iter().copied().fold(f64::MIN, f64::max),
            ScoringStrategy::VariancePenalizedMean { weight } => {
                let n = minutes.len() as f64;
                let mean = minutes.iter().sum::<f64>() / n;
                let variance = minutes.iter().map(|m| (m - mean).powi(2)).sum::<f64>() / n;
                mean + weight * variance
            }
        }
    }
}
