//! Federated averaging base strategy.

use tracing::debug;

use crate::aggregate::{aggregate, weighted_loss_avg};
use crate::config::StrategyConfig;
use crate::strategy::Strategy;
use crate::types::{ClientFailure, EvaluateResult, FitResult, Weights};

/// Centralized evaluation callback: global weights -> (loss, accuracy).
pub type EvalFn = Box<dyn Fn(&Weights) -> Option<(f64, f64)> + Send + Sync>;

/// Plain FedAvg: samples a fraction of participants per phase and combines
/// whatever results come back with a sample-count-weighted average, with no
/// quorum requirement.
pub struct FedAvg {
    pub fraction_fit: f64,
    pub fraction_eval: f64,
    pub min_fit_clients: usize,
    pub min_eval_clients: usize,
    pub min_available_clients: usize,
    eval_fn: Option<EvalFn>,
}

impl FedAvg {
    pub fn new(cfg: &StrategyConfig) -> Self {
        Self {
            fraction_fit: cfg.fraction_fit,
            fraction_eval: cfg.fraction_eval,
            min_fit_clients: cfg.min_fit_clients,
            min_eval_clients: cfg.min_eval_clients,
            min_available_clients: cfg.min_available_clients,
            eval_fn: None,
        }
    }

    /// Attach a centralized evaluation callback.
    pub fn with_eval_fn(mut self, eval_fn: EvalFn) -> Self {
        self.eval_fn = Some(eval_fn);
        self
    }
}

impl Default for FedAvg {
    fn default() -> Self {
        Self::new(&StrategyConfig::default())
    }
}

impl Strategy for FedAvg {
    fn aggregate_fit(
        &self,
        results: &[FitResult],
        _failures: &[ClientFailure],
    ) -> Option<Weights> {
        if results.is_empty() {
            debug!("fit_round_empty");
            return None;
        }
        Some(aggregate(results))
    }

    fn aggregate_evaluate(
        &self,
        results: &[EvaluateResult],
        _failures: &[ClientFailure],
    ) -> Option<f64> {
        if results.is_empty() {
            debug!("evaluate_round_empty");
            return None;
        }
        Some(weighted_loss_avg(results))
    }

    fn num_fit_clients(&self, num_available: usize) -> (usize, usize) {
        let sample = (num_available as f64 * self.fraction_fit) as usize;
        (sample.max(self.min_fit_clients), self.min_available_clients)
    }

    fn num_evaluation_clients(&self, num_available: usize) -> (usize, usize) {
        let sample = (num_available as f64 * self.fraction_eval) as usize;
        (sample.max(self.min_eval_clients), self.min_available_clients)
    }

    fn evaluate(&self, weights: &Weights) -> Option<(f64, f64)> {
        self.eval_fn.as_ref().and_then(|f| f(weights))
    }
}
