//! Bid (buy-side) ladder
//!
//! Maintains buy-side price levels sorted by price descending (best bid
//! first). Uses `BTreeMap` for deterministic iteration order.

use std::collections::BTreeMap;
use types::numeric::{Price, Quantity};
use types::order::Order;

use super::price_level::{PriceLevel, QueueKey};
use super::LevelInfo;

/// Bid (buy) side of the book.
///
/// The highest price is the best bid. At each price level, orders are
/// maintained in FIFO order.
#[derive(Debug, Clone, Default)]
pub struct BidBook {
    /// Price levels; `BTreeMap` iterates ascending, so the best bid is
    /// the last entry.
    levels: BTreeMap<Price, PriceLevel>,
}

impl BidBook {
    /// Create a new empty bid book
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

    /// Get the best bid (highest price).
    pub fn best_price(&self) -> Option<Price> {
        self.levels.keys().next_back().copied()
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

    /// Check if the bid book is empty
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

    /// Aggregated levels, best (highest) price first.
    pub fn level_infos(&self) -> Vec<LevelInfo> {
        self.levels
            .iter()
            .rev()
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

    fn bid(id: u64, price: i32, qty: i32) -> Order {
        Order::new(
            OrderType::GoodTillCancel,
            OrderId::new(id),
            Side::Buy,
            Price::new(price),
            Quantity::new(qty),
        )
    }

    #[test]
    fn test_best_price_is_highest() {
        let mut book = BidBook::new();
        book.insert(bid(1, 100, 10));
        book.insert(bid(2, 102, 5));
        book.insert(bid(3, 99, 8));

        assert_eq!(book.best_price(), Some(Price::new(102)));
        assert_eq!(book.level_count(), 3);
    }

    #[test]
    fn test_same_price_shares_level() {
        let mut book = BidBook::new();
        book.insert(bid(1, 100, 10));
        book.insert(bid(2, 100, 5));

        assert_eq!(book.level_count(), 1);
        let infos = book.level_infos();
        assert_eq!(infos[0].quantity, Quantity::new(15));
    }

    #[test]
    fn test_remove_drops_empty_level() {
        let mut book = BidBook::new();
        let key = book.insert(bid(1, 100, 10));

        let removed = book.remove(Price::new(100), key).unwrap();
        assert_eq!(removed.id, OrderId::new(1));
        assert!(book.is_empty());
        assert_eq!(book.best_price(), None);
    }

    #[test]
    fn test_remove_keeps_populated_level() {
        let mut book = BidBook::new();
        let key1 = book.insert(bid(1, 100, 10));
        book.insert(bid(2, 100, 5));

        book.remove(Price::new(100), key1);
        assert_eq!(book.level_count(), 1);
        assert_eq!(book.get(Price::new(100), key1), None);
    }

    #[test]
    fn test_level_infos_descending() {
        let mut book = BidBook::new();
        book.insert(bid(1, 100, 10));
        book.insert(bid(2, 102, 5));
        book.insert(bid(3, 101, 8));

        let prices: Vec<i32> = book.level_infos().iter().map(|l| l.price.ticks()).collect();
        assert_eq!(prices, vec![102, 101, 100]);
    }
}
