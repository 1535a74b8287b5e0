//! End-to-end round decisions through the public strategy surface.

use fedround_core::{
    EvaluateResult, FaultTolerantFedAvg, FitResult, Strategy, StrategyConfig, Weights,
};

fn failures(n: usize) -> Vec<anyhow::Error> {
    (0..n).map(|i| anyhow::anyhow!("participant {i} dropped")).collect()
}

fn strategy(fit: f64, eval: f64) -> FaultTolerantFedAvg {
    FaultTolerantFedAvg::new(&StrategyConfig {
        min_completion_rate_fit: fit,
        min_completion_rate_evaluate: eval,
        ..StrategyConfig::default()
    })
}

#[test]
fn quorum_round_produces_weighted_global_model() {
    let s = strategy(0.5, 0.5);
    let results = vec![
        FitResult::new(vec![vec![0.1, 0.2, 0.3], vec![1.0]], 10),
        FitResult::new(vec![vec![0.2, 0.4, 0.6], vec![3.0]], 30),
    ];
    // 2 results, 2 failures: rate 0.5 passes on the boundary.
    let agg: Weights = s.aggregate_fit(&results, &failures(2)).expect("quorum met");
    assert_eq!(agg.len(), 2);
    assert!((agg[0][0] - 0.175).abs() < 1e-6);
    assert!((agg[0][1] - 0.35).abs() < 1e-6);
    assert!((agg[0][2] - 0.525).abs() < 1e-6);
    assert!((agg[1][0] - 2.5).abs() < 1e-6);
}

#[test]
fn under_quorum_round_is_discarded_whole() {
    let s = strategy(0.5, 0.5);
    let results = vec![
        FitResult::new(vec![vec![0.1]], 10),
        FitResult::new(vec![vec![0.2]], 30),
    ];
    // 2 of 5 answered: rate 0.4 < 0.5, no partial aggregate.
    assert!(s.aggregate_fit(&results, &failures(3)).is_none());
}

#[test]
fn evaluate_round_returns_weighted_loss() {
    let s = strategy(0.5, 0.5);
    let results = vec![
        EvaluateResult::new(10, 1.0),
        EvaluateResult::new(30, 3.0),
    ];
    let loss = s.aggregate_evaluate(&results, &failures(2)).expect("quorum met");
    assert!((loss - 2.5).abs() < 1e-9);
}

#[test]
fn idle_round_yields_nothing_for_both_phases() {
    let s = strategy(0.1, 0.1);
    assert!(s.aggregate_fit(&[], &[]).is_none());
    assert!(s.aggregate_evaluate(&[], &[]).is_none());
    // With failures only, still nothing to aggregate.
    assert!(s.aggregate_fit(&[], &failures(4)).is_none());
    assert!(s.aggregate_evaluate(&[], &failures(4)).is_none());
}

#[test]
fn fit_and_evaluate_thresholds_are_independent() {
    // Strict fit quorum, permissive evaluate quorum.
    let s = strategy(0.9, 0.1);
    let fit_results = vec![FitResult::new(vec![vec![1.0]], 1)];
    let eval_results = vec![EvaluateResult::new(1, 2.3)];
    let fails = failures(1);
    // rate 0.5: fails fit, passes evaluate.
    assert!(s.aggregate_fit(&fit_results, &fails).is_none());
    assert_eq!(s.aggregate_evaluate(&eval_results, &fails), Some(2.3));
}

#[test]
fn failures_do_not_influence_the_aggregate_value() {
    let s = strategy(0.1, 0.1);
    let results = vec![
        FitResult::new(vec![vec![2.0]], 1),
        FitResult::new(vec![vec![4.0]], 1),
    ];
    let clean = s.aggregate_fit(&results, &[]).unwrap();
    let noisy = s.aggregate_fit(&results, &failures(5)).unwrap();
    assert_eq!(clean, noisy);
}

#[test]
fn perfect_round_passes_a_near_one_threshold() {
    let s = strategy(0.99, 0.99);
    let results = vec![EvaluateResult::new(1, 2.3)];
    assert_eq!(s.aggregate_evaluate(&results, &[]), Some(2.3));
}
