//! Round-level data model shared by strategies and aggregators.

use serde::{Deserialize, Serialize};

/// Full model parameter set: layers -> values. Layer order is significant and
/// must match across all participants of a round.
pub type Weights = Vec<Vec<f32>>;

/// One participant's fit outcome for a round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitResult {
    pub weights: Weights,
    /// Local training examples used to produce the update; combination weight.
    pub sample_count: u64,
}

/// One participant's local evaluation outcome for a round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluateResult {
    pub sample_count: u64,
    pub loss: f64,
}

/// Opaque token for a participant that returned nothing usable in a round.
/// Only its presence is counted; the content is never inspected here.
pub type ClientFailure = anyhow::Error;

impl FitResult {
    pub fn new(weights: Weights, sample_count: u64) -> Self {
        Self { weights, sample_count }
    }
}

impl EvaluateResult {
    pub fn new(sample_count: u64, loss: f64) -> Self {
        Self { sample_count, loss }
    }
}
