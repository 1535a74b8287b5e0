//! Round-level decision and aggregation logic for a federated-learning
//! coordinator.
//!
//! The coordinator (external to this crate) runs rounds against a population
//! of remote participants and hands each round's results and failures to a
//! [`Strategy`]. The fault-tolerant strategy applies a completion-rate quorum
//! before combining anything, so sparse rounds are discarded instead of
//! skewing the global model.

use anyhow::Result;
use once_cell::sync::OnceCell;
use tracing::info;

static TRACING_INIT: OnceCell<()> = OnceCell::new();

/// Install the process-wide tracing subscriber (env-filter + fmt), once.
/// Safe to call from every entry point; later calls are no-ops.
pub fn init_tracing() -> Result<()> {
    TRACING_INIT.get_or_try_init(|| {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_target(true)
            .with_line_number(true)
            .try_init()
            .map_err(|e| anyhow::anyhow!("{e}"))?;
        Ok::<(), anyhow::Error>(())
    })?;
    info!("tracing_initialized");
    Ok(())
}

pub mod aggregate;
pub mod config;
pub mod strategy;
pub mod types;

pub use aggregate::{aggregate, weighted_loss_avg};
pub use config::{load_config, StrategyConfig};
pub use strategy::{EvalFn, FaultTolerantFedAvg, FedAvg, Strategy};
pub use types::{ClientFailure, EvaluateResult, FitResult, Weights};
