//! Counters collected over a flow run

use serde::Serialize;
use types::trade::Trade;

/// Aggregated counters for one run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FlowMetrics {
    pub orders_submitted: u64,
    pub trades: u64,
    /// Total lots exchanged across all trades.
    pub volume: i64,
    pub cancels: u64,
    pub modifies: u64,
    pub no_liquidity_rejects: u64,
    /// Orders still resting when the run ended.
    pub resting_orders: usize,
    pub elapsed_ns: u128,
}

impl FlowMetrics {
    /// Record the trades returned by one admission or modify.
    pub fn record_trades(&mut self, trades: &[Trade]) {
        self.trades += trades.len() as u64;
        self.volume += trades
            .iter()
            .map(|t| i64::from(t.quantity().lots()))
            .sum::<i64>();
    }

    /// Orders per second over the run.
    pub fn throughput(&self) -> f64 {
        if self.elapsed_ns == 0 {
            return 0.0;
        }
        self.orders_submitted as f64 / (self.elapsed_ns as f64 / 1e9)
    }
}
