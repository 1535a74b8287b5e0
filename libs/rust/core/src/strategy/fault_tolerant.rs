//! Fault-tolerant variant of FedAvg.
//!
//! Wraps the base strategy and discards any round whose completion rate
//! falls below a configured quorum, so a burst of participant dropouts can
//! never skew the global model toward the few that answered.

use tracing::debug;

use crate::aggregate::{aggregate, weighted_loss_avg};
use crate::config::StrategyConfig;
use crate::strategy::{EvalFn, FedAvg, Strategy};
use crate::types::{ClientFailure, EvaluateResult, FitResult, Weights};

/// FedAvg with a per-phase completion-rate quorum.
///
/// A round passes when `results / (results + failures)` is at least the
/// phase threshold; under-quorum rounds return `None` and no partial
/// aggregate is ever produced. Thresholds are fixed at construction.
pub struct FaultTolerantFedAvg {
    inner: FedAvg,
    min_completion_rate_fit: f64,
    min_completion_rate_evaluate: f64,
}

impl FaultTolerantFedAvg {
    pub fn new(cfg: &StrategyConfig) -> Self {
        Self {
            inner: FedAvg::new(cfg),
            min_completion_rate_fit: cfg.min_completion_rate_fit,
            min_completion_rate_evaluate: cfg.min_completion_rate_evaluate,
        }
    }

    /// Attach a centralized evaluation callback to the wrapped strategy.
    pub fn with_eval_fn(mut self, eval_fn: EvalFn) -> Self {
        self.inner = self.inner.with_eval_fn(eval_fn);
        self
    }

    fn completion_rate(results: usize, failures: usize) -> f64 {
        results as f64 / (results + failures) as f64
    }
}

impl Default for FaultTolerantFedAvg {
    fn default() -> Self {
        Self::new(&StrategyConfig::default())
    }
}

impl Strategy for FaultTolerantFedAvg {
    fn aggregate_fit(
        &self,
        results: &[FitResult],
        failures: &[ClientFailure],
    ) -> Option<Weights> {
        if results.is_empty() {
            debug!("fit_round_empty");
            return None;
        }
        let rate = Self::completion_rate(results.len(), failures.len());
        if rate < self.min_completion_rate_fit {
            debug!(
                completion_rate = rate,
                threshold = self.min_completion_rate_fit,
                "fit_round_discarded"
            );
            return None;
        }
        Some(aggregate(results))
    }

    fn aggregate_evaluate(
        &self,
        results: &[EvaluateResult],
        failures: &[ClientFailure],
    ) -> Option<f64> {
        if results.is_empty() {
            debug!("evaluate_round_empty");
            return None;
        }
        let rate = Self::completion_rate(results.len(), failures.len());
        if rate < self.min_completion_rate_evaluate {
            debug!(
                completion_rate = rate,
                threshold = self.min_completion_rate_evaluate,
                "evaluate_round_discarded"
            );
            return None;
        }
        Some(weighted_loss_avg(results))
    }

    fn num_fit_clients(&self, num_available: usize) -> (usize, usize) {
        self.inner.num_fit_clients(num_available)
    }

    fn num_evaluation_clients(&self, num_available: usize) -> (usize, usize) {
        self.inner.num_evaluation_clients(num_available)
    }

    fn evaluate(&self, weights: &Weights) -> Option<(f64, f64)> {
        self.inner.evaluate(weights)
    }
}
