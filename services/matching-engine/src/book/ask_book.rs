//! Ask (sell-side) ladder
//!
//! Maintains sell-side price levels sorted by price ascending (best ask
//! first). Uses `BTreeMap` for deterministic iteration order.

use std::collections::BTreeMap;
use types::numeric::{Price, Quantity};
use types::order::Order;

use super::price_level::{PriceLevel, QueueKey};
use super::LevelInfo;

/// Ask (sell) side of the book.
///
/// The lowest price is the best ask. At each price level, orders are
/// maintained in FIFO order.
#[derive(Debug, Clone, Default)]
pub struct AskBook {
    /// Price levels; `BTreeMap` iterates ascending, so the best ask is
    /// the first entry.
    levels: BTreeMap<Price, PriceLevel>,
}

impl AskBook {
    /// Create a new empty ask book
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an order at the tail of its price level, creating the
    /// level if absent. Returns the stable queue key for the locator.
    pub fn insert(&mut self, order: Order) -> QueueKey {
        self.levels.entry(order.price).or_default().push_back(order)
    }

    /// Remove an order by locator, dropping the level if it empties.
    pub fn remove(&mut self, price: Price, key: QueueKey) -> Option<Order> {
        let level = self.levels.get_mut(&price)?;
        let order = level.remove(key)?;
        if level.is_empty() {
            self.levels.remove(&price);
        }
        Some(order)
    }

    /// Look up an order by locator.
    pub fn get(&self, price: Price, key: QueueKey) -> Option<&Order> {
        self.levels.get(&price)?.get(key)
    }

    /// Get the best ask (lowest price).
    pub fn best_price(&self) -> Option<Price> {
        self.levels.keys().next().copied()
    }

    /// Mutable access to the level at `price`.
    pub(crate) fn level_mut(&mut self, price: Price) -> Option<&mut PriceLevel> {
        self.levels.get_mut(&price)
    }

    /// Drop the level at `price` if it no longer holds any orders.
    pub(crate) fn prune_if_empty(&mut self, price: Price) {
        if self.levels.get(&price).is_some_and(PriceLevel::is_empty) {
            self.levels.remove(&price);
        }
    }

    /// Check if the ask book is empty
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Number of price levels.
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Number of resting orders across all levels.
    pub fn order_count(&self) -> usize {
        self.levels.values().map(PriceLevel::order_count).sum()
    }

    /// Aggregated levels, best (lowest) price first.
    pub fn level_infos(&self) -> Vec<LevelInfo> {
        self.levels
            .iter()
            .map(|(price, level)| LevelInfo {
                price: *price,
                quantity: level.total_quantity(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::ids::OrderId;
    use types::order::{OrderType, Side};

    fn ask(id: u64, price: i32, qty: i32) -> Order {
        Order::new(
            OrderType::GoodTillCancel,
            OrderId::new(id),
            Side::Sell,
            Price::new(price),
            Quantity::new(qty),
        )
    }

    #[test]
    fn test_best_price_is_lowest() {
        let mut book = AskBook::new();
        book.insert(ask(1, 100, 10));
        book.insert(ask(2, 98, 5));
        book.insert(ask(3, 103, 8));

        assert_eq!(book.best_price(), Some(Price::new(98)));
        assert_eq!(book.level_count(), 3);
    }

    #[test]
    fn test_remove_drops_empty_level() {
        let mut book = AskBook::new();
        let key = book.insert(ask(1, 100, 10));
        book.insert(ask(2, 101, 4));

        book.remove(Price::new(100), key).unwrap();
        assert_eq!(book.best_price(), Some(Price::new(101)));
        assert_eq!(book.level_count(), 1);
    }

    #[test]
    fn test_level_infos_ascending() {
        let mut book = AskBook::new();
        book.insert(ask(1, 103, 10));
        book.insert(ask(2, 100, 5));
        book.insert(ask(3, 101, 8));

        let prices: Vec<i32> = book.level_infos().iter().map(|l| l.price.ticks()).collect();
        assert_eq!(prices, vec![100, 101, 103]);
    }

    #[test]
    fn test_order_count_spans_levels() {
        let mut book = AskBook::new();
        book.insert(ask(1, 100, 10));
        book.insert(ask(2, 100, 5));
        book.insert(ask(3, 101, 8));

        assert_eq!(book.order_count(), 3);
    }
}
