//! The order book aggregate
//!
//! Owns the two ladders and the id-index, and drives admission,
//! cancellation, modification, and matching for a single symbol. All
//! operations are synchronous and run to completion; callers that need
//! concurrent access serialize requests onto one owner.

use std::collections::HashMap;

use types::errors::OrderError;
use types::ids::OrderId;
use types::numeric::Price;
use types::order::{Order, OrderModify, OrderType, Side};
use types::trade::Trade;

use crate::book::{AskBook, BidBook, DepthSnapshot, Locator};
use crate::matching::{self, crossing};

/// Single-symbol limit order book with price-time priority matching.
#[derive(Debug, Default)]
pub struct OrderBook {
    bids: BidBook,
    asks: AskBook,
    /// id → locator for every resting order. An order is reachable from
    /// its ladder level iff it is reachable from here.
    index: HashMap<OrderId, Locator>,
}

impl OrderBook {
    /// Create a new empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Admit an order, match it against the opposite side, and return
    /// the trades produced (possibly none).
    ///
    /// Admission pipeline:
    /// 1. Reject non-positive quantities and un-priced limit orders.
    /// 2. Silently drop a re-used live id.
    /// 3. Silently drop a Fill-And-Kill that would not cross the
    ///    opposite top of book.
    /// 4. Rewrite a market order into a Good-Till-Cancel limit pegged at
    ///    the opposite side's best price. The pegged price is a crossing
    ///    guarantee, not an execution price; trades record the resting
    ///    orders' prices.
    /// 5. Insert, run the matcher, and cancel any Fill-And-Kill residual.
    pub fn add_order(&mut self, mut order: Order) -> Result<Vec<Trade>, OrderError> {
        if !order.initial_quantity.is_positive() {
            return Err(OrderError::InvalidQuantity(order.initial_quantity.lots()));
        }
        if order.order_type != OrderType::Market && !order.price.is_valid() {
            return Err(OrderError::InvalidPrice);
        }
        if self.index.contains_key(&order.id) {
            return Ok(Vec::new());
        }
        if order.order_type == OrderType::FillAndKill
            && !crossing::crosses_opposite_best(
                order.side,
                order.price,
                self.opposite_best(order.side),
            )
        {
            return Ok(Vec::new());
        }
        if order.order_type == OrderType::Market {
            match self.opposite_best(order.side) {
                Some(best) => order.convert_to_good_till_cancel(best),
                None => return Err(OrderError::NoLiquidity { side: order.side }),
            }
        }

        let id = order.id;
        let admitted_type = order.order_type;
        self.insert(order);

        let trades = matching::match_orders(&mut self.bids, &mut self.asks, &mut self.index);

        // A Fill-And-Kill order never rests: sweep any residual of the
        // order admitted by this call.
        if admitted_type == OrderType::FillAndKill {
            self.cancel(id);
        }

        Ok(trades)
    }

    /// Remove a resting order. Unknown ids are ignored; cancel is
    /// idempotent.
    pub fn cancel(&mut self, order_id: OrderId) {
        let Some(locator) = self.index.remove(&order_id) else {
            return;
        };

        let removed = match locator.side {
            Side::Buy => self.bids.remove(locator.price, locator.key),
            Side::Sell => self.asks.remove(locator.price, locator.key),
        };
        assert!(
            removed.is_some(),
            "locator for order {} points at a missing queue slot",
            order_id
        );
    }

    /// Replace a resting order, retaining only its type. The replacement
    /// is a fresh admission, so it loses time priority; its side and
    /// price are taken from the request as given.
    ///
    /// An unknown id returns an empty trade list, whatever the rest of
    /// the request carries. For a live id, the quantity and price are
    /// validated before the cancel leg, so a malformed request cannot
    /// destroy the resting order.
    pub fn modify(&mut self, modify: OrderModify) -> Result<Vec<Trade>, OrderError> {
        let Some(locator) = self.index.get(&modify.order_id).copied() else {
            return Ok(Vec::new());
        };
        if !modify.quantity.is_positive() {
            return Err(OrderError::InvalidQuantity(modify.quantity.lots()));
        }
        if !modify.price.is_valid() {
            return Err(OrderError::InvalidPrice);
        }

        let existing = match locator.side {
            Side::Buy => self.bids.get(locator.price, locator.key),
            Side::Sell => self.asks.get(locator.price, locator.key),
        }
        .expect("indexed order must be reachable from its ladder");
        let order_type = existing.order_type;

        self.cancel(modify.order_id);
        self.add_order(modify.into_order(order_type))
    }

    /// Number of resting orders.
    pub fn order_count(&self) -> usize {
        self.index.len()
    }

    /// Highest resting bid price, if any.
    pub fn best_bid(&self) -> Option<Price> {
        self.bids.best_price()
    }

    /// Lowest resting ask price, if any.
    pub fn best_ask(&self) -> Option<Price> {
        self.asks.best_price()
    }

    /// Look up a resting order by id.
    pub fn get(&self, order_id: OrderId) -> Option<&Order> {
        let locator = self.index.get(&order_id)?;
        match locator.side {
            Side::Buy => self.bids.get(locator.price, locator.key),
            Side::Sell => self.asks.get(locator.price, locator.key),
        }
    }

    /// Aggregated per-level depth view: bids descending, asks ascending.
    /// Returns copied value data.
    pub fn levels(&self) -> DepthSnapshot {
        DepthSnapshot {
            bids: self.bids.level_infos(),
            asks: self.asks.level_infos(),
        }
    }

    fn insert(&mut self, order: Order) {
        let id = order.id;
        let side = order.side;
        let price = order.price;
        let key = match side {
            Side::Buy => self.bids.insert(order),
            Side::Sell => self.asks.insert(order),
        };
        self.index.insert(id, Locator { side, price, key });
    }

    fn opposite_best(&self, side: Side) -> Option<Price> {
        match side {
            Side::Buy => self.asks.best_price(),
            Side::Sell => self.bids.best_price(),
        }
    }
}
