//! Round strategies: participant sizing and result aggregation.
//!
//! A strategy makes the per-round decisions of a federated coordinator. The
//! coordinator collects results and failures for one round, then hands them
//! to the strategy; the strategy answers with an aggregate or with `None`
//! when the round yields nothing usable.

pub mod fault_tolerant;
pub mod fedavg;

pub use fault_tolerant::FaultTolerantFedAvg;
pub use fedavg::{EvalFn, FedAvg};

use crate::types::{ClientFailure, EvaluateResult, FitResult, Weights};

/// Capability interface implemented by round strategies.
///
/// All methods take `&self`: a strategy holds only immutable configuration,
/// so concurrent invocation across rounds or phases needs no locking.
pub trait Strategy: Send + Sync {
    /// Combine one round's fit results into new global parameters, or `None`
    /// when the round produced no usable aggregate. `None` is an expected
    /// operational outcome (participant dropout), not an error.
    fn aggregate_fit(
        &self,
        results: &[FitResult],
        failures: &[ClientFailure],
    ) -> Option<Weights>;

    /// Combine one round's evaluation results into a single weighted loss,
    /// or `None` when the round produced no usable aggregate.
    fn aggregate_evaluate(
        &self,
        results: &[EvaluateResult],
        failures: &[ClientFailure],
    ) -> Option<f64>;

    /// Fit-phase sample size for `num_available` connected participants,
    /// as (sample size, minimum available required to start).
    fn num_fit_clients(&self, num_available: usize) -> (usize, usize);

    /// Evaluate-phase sample size, same shape as [`Self::num_fit_clients`].
    fn num_evaluation_clients(&self, num_available: usize) -> (usize, usize);

    /// Centralized evaluation of global parameters via the configured
    /// callback; `None` when no callback is set.
    fn evaluate(&self, weights: &Weights) -> Option<(f64, f64)>;
}
