//! Strategy configuration with layered loading.
//!
//! Precedence: coded defaults, then an optional YAML file named by
//! `FEDROUND_CONFIG_FILE`, then `FEDROUND__`-prefixed environment overrides
//! (e.g. `FEDROUND__MIN_COMPLETION_RATE_FIT=0.8`).

use anyhow::Result;
use serde::Deserialize;

/// Immutable per-strategy settings. Thresholds outside [0, 1] are accepted:
/// a rate at or below 0 makes the quorum trivially pass, above 1 it discards
/// every round.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StrategyConfig {
    /// Fraction of available participants sampled for a fit round.
    pub fraction_fit: f64,
    /// Fraction of available participants sampled for an evaluate round.
    pub fraction_eval: f64,
    pub min_fit_clients: usize,
    pub min_eval_clients: usize,
    pub min_available_clients: usize,
    /// Minimum completion rate for a fit round to be aggregated.
    pub min_completion_rate_fit: f64,
    /// Minimum completion rate for an evaluate round to be aggregated.
    pub min_completion_rate_evaluate: f64,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            fraction_fit: 0.1,
            fraction_eval: 0.1,
            min_fit_clients: 1,
            min_eval_clients: 1,
            min_available_clients: 1,
            min_completion_rate_fit: 0.5,
            min_completion_rate_evaluate: 0.5,
        }
    }
}

pub fn load_config() -> Result<StrategyConfig> {
    let mut builder = config::Config::builder()
        .set_default("fraction_fit", 0.1)?
        .set_default("fraction_eval", 0.1)?
        .set_default("min_fit_clients", 1)?
        .set_default("min_eval_clients", 1)?
        .set_default("min_available_clients", 1)?
        .set_default("min_completion_rate_fit", 0.5)?
        .set_default("min_completion_rate_evaluate", 0.5)?;

    if let Ok(file) = std::env::var("FEDROUND_CONFIG_FILE") {
        builder = builder.add_source(config::File::with_name(&file).required(false));
    }
    builder = builder.add_source(config::Environment::with_prefix("FEDROUND").separator("__"));
    let cfg = builder.build()?;
    Ok(cfg.try_deserialize()?)
}
