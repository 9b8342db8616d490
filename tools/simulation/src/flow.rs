//! Seeded random order-flow generation
//!
//! The RNG is a `ChaCha8Rng` seeded from the config, so a given config
//! always produces the same operation sequence and therefore the same
//! trade tape.

use matching_engine::OrderBook;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::time::Instant;
use types::errors::OrderError;
use types::ids::OrderId;
use types::numeric::{Price, Quantity};
use types::order::{Order, OrderModify, OrderType, Side};

use crate::metrics::FlowMetrics;

/// Parameters for one flow run.
#[derive(Debug, Clone)]
pub struct FlowConfig {
    /// Number of operations to generate.
    pub operations: u64,
    pub seed: u64,
    /// Inclusive tick band limit prices are drawn from.
    pub min_price: i32,
    pub max_price: i32,
    /// Inclusive lot band quantities are drawn from.
    pub max_quantity: i32,
    /// Share of operations that are market orders.
    pub market_ratio: f64,
    /// Share of operations that are fill-and-kill orders.
    pub fak_ratio: f64,
    /// Share of operations that cancel a previously admitted order.
    pub cancel_ratio: f64,
    /// Share of operations that modify a previously admitted order.
    pub modify_ratio: f64,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            operations: 100_000,
            seed: 42,
            min_price: 90,
            max_price: 110,
            max_quantity: 100,
            market_ratio: 0.05,
            fak_ratio: 0.05,
            cancel_ratio: 0.10,
            modify_ratio: 0.05,
        }
    }
}

/// Drives a book with generated flow and collects counters.
pub struct FlowDriver {
    config: FlowConfig,
    rng: ChaCha8Rng,
    book: OrderBook,
    next_id: u64,
    /// Ids handed to the book so far; may contain already-dead ids,
    /// which exercises the silent cancel/modify paths on purpose.
    issued_ids: Vec<u64>,
    metrics: FlowMetrics,
}

impl FlowDriver {
    pub fn new(config: FlowConfig) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self {
            config,
            rng,
            book: OrderBook::new(),
            next_id: 1,
            issued_ids: Vec::new(),
            metrics: FlowMetrics::default(),
        }
    }

    /// Run the configured number of operations and return the counters.
    ///
    /// # Panics
    /// Panics if the book ends the run in an inconsistent state.
    pub fn run(mut self) -> FlowMetrics {
        let started = Instant::now();

        for _ in 0..self.config.operations {
            self.step();
        }

        self.metrics.elapsed_ns = started.elapsed().as_nanos();
        self.metrics.resting_orders = self.book.order_count();
        self.verify_book_integrity();
        self.metrics
    }

    fn step(&mut self) {
        let roll: f64 = self.rng.gen();
        let cancel_band = self.config.cancel_ratio;
        let modify_band = cancel_band + self.config.modify_ratio;

        if roll < cancel_band && !self.issued_ids.is_empty() {
            self.cancel_random();
        } else if roll < modify_band && !self.issued_ids.is_empty() {
            self.modify_random();
        } else {
            self.admit_random();
        }
    }

    fn admit_random(&mut self) {
        let id = OrderId::new(self.next_id);
        self.next_id += 1;

        let side = if self.rng.gen() { Side::Buy } else { Side::Sell };
        let quantity = Quantity::new(self.rng.gen_range(1..=self.config.max_quantity));

        let type_roll: f64 = self.rng.gen();
        let order = if type_roll < self.config.market_ratio {
            Order::market(id, side, quantity)
        } else {
            let order_type = if type_roll < self.config.market_ratio + self.config.fak_ratio {
                OrderType::FillAndKill
            } else {
                OrderType::GoodTillCancel
            };
            Order::new(order_type, id, side, self.random_price(), quantity)
        };

        self.metrics.orders_submitted += 1;
        match self.book.add_order(order) {
            Ok(trades) => {
                self.metrics.record_trades(&trades);
                self.issued_ids.push(id.value());
            }
            Err(OrderError::NoLiquidity { .. }) => {
                self.metrics.no_liquidity_rejects += 1;
            }
            Err(err) => {
                // The generator only emits positive quantities and real
                // prices, so nothing else can be rejected.
                panic!("generator produced an invalid order: {err}");
            }
        }
    }

    fn cancel_random(&mut self) {
        let id = self.random_issued_id();
        self.book.cancel(OrderId::new(id));
        self.metrics.cancels += 1;
    }

    fn modify_random(&mut self) {
        let id = self.random_issued_id();
        let side = if self.rng.gen() { Side::Buy } else { Side::Sell };
        let modify = OrderModify::new(
            OrderId::new(id),
            side,
            self.random_price(),
            Quantity::new(self.rng.gen_range(1..=self.config.max_quantity)),
        );

        let trades = self
            .book
            .modify(modify)
            .expect("generated modify carries a valid price and quantity");
        self.metrics.record_trades(&trades);
        self.metrics.modifies += 1;
    }

    fn random_price(&mut self) -> Price {
        Price::new(
            self.rng
                .gen_range(self.config.min_price..=self.config.max_price),
        )
    }

    fn random_issued_id(&mut self) -> u64 {
        let idx = self.rng.gen_range(0..self.issued_ids.len());
        self.issued_ids[idx]
    }

    /// Structural checks at the end of a run: the book must not be
    /// crossed, ladders must be sorted, and no level may sit empty.
    fn verify_book_integrity(&self) {
        if let (Some(bid), Some(ask)) = (self.book.best_bid(), self.book.best_ask()) {
            assert!(bid < ask, "book ended crossed: bid {bid} >= ask {ask}");
        }

        let snapshot = self.book.levels();
        for pair in snapshot.bids.windows(2) {
            assert!(pair[0].price > pair[1].price, "bid ladder not descending");
        }
        for pair in snapshot.asks.windows(2) {
            assert!(pair[0].price < pair[1].price, "ask ladder not ascending");
        }
        for level in snapshot.bids.iter().chain(snapshot.asks.iter()) {
            assert!(
                level.quantity.is_positive(),
                "level at {} has non-positive quantity",
                level.price
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_run_completes_with_consistent_counters() {
        let config = FlowConfig {
            operations: 5_000,
            ..FlowConfig::default()
        };
        let metrics = FlowDriver::new(config).run();

        assert!(metrics.orders_submitted > 0);
        assert!(metrics.trades > 0, "a 21-tick band must produce crosses");
        assert!(metrics.volume > 0);
        // Every step is exactly one admission, cancel, or modify.
        assert_eq!(
            metrics.orders_submitted + metrics.cancels + metrics.modifies,
            5_000
        );
    }

    #[test]
    fn test_wide_band_run_stays_consistent() {
        let config = FlowConfig {
            operations: 2_000,
            min_price: 1,
            max_price: 10_000,
            market_ratio: 0.0,
            ..FlowConfig::default()
        };
        let metrics = FlowDriver::new(config).run();
        assert!(metrics.resting_orders > 0);
    }
}
