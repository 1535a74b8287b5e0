//! Weighted-average combinators for fit and evaluate rounds.
//!
//! Both functions assume a non-empty input slice; strategies guard the empty
//! case before delegating.

use crate::types::{EvaluateResult, FitResult, Weights};

/// Sample-count-weighted element-wise average of all contributed parameter
/// sets. Layer shapes must match across contributions.
pub fn aggregate(results: &[FitResult]) -> Weights {
    let total_samples: u64 = results.iter().map(|r| r.sample_count).sum();
    let num_layers = results[0].weights.len();
    let mut agg: Weights = Vec::with_capacity(num_layers);
    for layer in 0..num_layers {
        let size = results[0].weights[layer].len();
        let mut layer_vec = vec![0.0f32; size];
        for r in results {
            let w = r.sample_count as f64 / total_samples as f64;
            for (i, val) in r.weights[layer].iter().enumerate() {
                layer_vec[i] += (*val as f64 * w) as f32;
            }
        }
        agg.push(layer_vec);
    }
    agg
}

/// Sample-count-weighted average loss across participants.
pub fn weighted_loss_avg(results: &[EvaluateResult]) -> f64 {
    let total_samples: u64 = results.iter().map(|r| r.sample_count).sum();
    let weighted_sum: f64 = results
        .iter()
        .map(|r| r.sample_count as f64 * r.loss)
        .sum();
    weighted_sum / total_samples as f64
}
