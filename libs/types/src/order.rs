//! Order lifecycle types

use crate::ids::OrderId;
use crate::numeric::{Price, Quantity};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Order side (buyer or seller)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    /// Buy order (bid)
    Buy,
    /// Sell order (ask)
    Sell,
}

impl Side {
    /// Get the opposite side
    pub fn opposite(&self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => write!(f, "buy"),
            Side::Sell => write!(f, "sell"),
        }
    }
}

/// Lifecycle policy for an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderType {
    /// Execute at the best available opposite price; rewritten into a
    /// marketable limit at admission.
    #[serde(rename = "MARKET")]
    Market,
    /// Good-Till-Cancel: rest on the book until filled or canceled.
    #[serde(rename = "GTC")]
    GoodTillCancel,
    /// Fill-And-Kill: execute whatever crosses immediately, cancel the rest.
    #[serde(rename = "FAK")]
    FillAndKill,
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderType::Market => write!(f, "MARKET"),
            OrderType::GoodTillCancel => write!(f, "GTC"),
            OrderType::FillAndKill => write!(f, "FAK"),
        }
    }
}

/// A single order.
///
/// `remaining_quantity` starts equal to `initial_quantity` and only the
/// matcher decreases it. An order with zero remaining quantity is filled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub order_type: OrderType,
    pub side: Side,
    pub price: Price,
    pub initial_quantity: Quantity,
    pub remaining_quantity: Quantity,
}

impl Order {
    /// Create a new limit order.
    pub fn new(
        order_type: OrderType,
        id: OrderId,
        side: Side,
        price: Price,
        quantity: Quantity,
    ) -> Self {
        Self {
            id,
            order_type,
            side,
            price,
            initial_quantity: quantity,
            remaining_quantity: quantity,
        }
    }

    /// Create a market order. It carries the invalid-price sentinel until
    /// admission pegs it to the opposite side's best price.
    pub fn market(id: OrderId, side: Side, quantity: Quantity) -> Self {
        Self::new(OrderType::Market, id, side, Price::INVALID, quantity)
    }

    /// Quantity executed so far.
    pub fn filled_quantity(&self) -> Quantity {
        self.initial_quantity - self.remaining_quantity
    }

    /// Check if the order is completely filled.
    pub fn is_filled(&self) -> bool {
        self.remaining_quantity.is_zero()
    }

    /// Reduce the remaining quantity by a fill.
    ///
    /// # Panics
    /// Panics if the fill exceeds the remaining quantity; that is an
    /// engine bug, not a caller error.
    pub fn fill(&mut self, quantity: Quantity) {
        assert!(
            quantity <= self.remaining_quantity,
            "fill of {} exceeds remaining quantity {} on order {}",
            quantity,
            self.remaining_quantity,
            self.id
        );
        self.remaining_quantity -= quantity;
    }

    /// Rewrite an un-priced market order into a Good-Till-Cancel limit at
    /// the given price.
    ///
    /// # Panics
    /// Panics if the order is not a market order.
    pub fn convert_to_good_till_cancel(&mut self, price: Price) {
        assert_eq!(
            self.order_type,
            OrderType::Market,
            "only market orders can be repriced at admission"
        );
        self.price = price;
        self.order_type = OrderType::GoodTillCancel;
    }
}

/// Replacement request for a resting order.
///
/// Carries everything except the order type, which is taken from the
/// order being replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderModify {
    pub order_id: OrderId,
    pub side: Side,
    pub price: Price,
    pub quantity: Quantity,
}

impl OrderModify {
    pub fn new(order_id: OrderId, side: Side, price: Price, quantity: Quantity) -> Self {
        Self {
            order_id,
            side,
            price,
            quantity,
        }
    }

    /// Build the replacement order, retaining the original's type.
    pub fn into_order(self, order_type: OrderType) -> Order {
        Order::new(order_type, self.order_id, self.side, self.price, self.quantity)
    }
}
