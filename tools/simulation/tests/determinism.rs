//! Deterministic replay: the same seed must produce the same run.

use simulation::flow::{FlowConfig, FlowDriver};

#[test]
fn test_same_seed_same_tape() {
    let config = FlowConfig {
        operations: 20_000,
        ..FlowConfig::default()
    };

    let first = FlowDriver::new(config.clone()).run();
    let second = FlowDriver::new(config).run();

    assert_eq!(first.orders_submitted, second.orders_submitted);
    assert_eq!(first.trades, second.trades);
    assert_eq!(first.volume, second.volume);
    assert_eq!(first.cancels, second.cancels);
    assert_eq!(first.modifies, second.modifies);
    assert_eq!(first.no_liquidity_rejects, second.no_liquidity_rejects);
    assert_eq!(first.resting_orders, second.resting_orders);
}

#[test]
fn test_seed_is_threaded_through_config() {
    let base = FlowConfig {
        operations: 10_000,
        ..FlowConfig::default()
    };
    let reseeded = FlowConfig {
        seed: 1337,
        ..base.clone()
    };

    let first = FlowDriver::new(base).run();
    let second = FlowDriver::new(reseeded).run();

    // With ten thousand operations over a 21-tick band, two independent
    // streams producing identical counters across the board would mean
    // the seed is being ignored.
    assert!(
        first.trades != second.trades
            || first.volume != second.volume
            || first.resting_orders != second.resting_orders
    );
}
