//! Trade execution records

use crate::ids::OrderId;
use crate::numeric::{Price, Quantity};
use serde::{Deserialize, Serialize};

/// One leg of an execution: the matched order's id, its resting price,
/// and the executed quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeLeg {
    pub order_id: OrderId,
    pub price: Price,
    pub quantity: Quantity,
}

impl TradeLeg {
    pub fn new(order_id: OrderId, price: Price, quantity: Quantity) -> Self {
        Self {
            order_id,
            price,
            quantity,
        }
    }
}

/// An execution between the front bid and the front ask.
///
/// Both legs carry the same quantity. The legs record each order's
/// resting price; the two prices differ only when one side is a market
/// order that admission pegged to the opposite best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trade {
    pub bid: TradeLeg,
    pub ask: TradeLeg,
}

impl Trade {
    /// Create a trade from its two legs.
    ///
    /// # Panics
    /// Panics if the leg quantities differ; that is an engine bug.
    pub fn new(bid: TradeLeg, ask: TradeLeg) -> Self {
        assert_eq!(
            bid.quantity, ask.quantity,
            "trade legs must carry equal quantities"
        );
        Self { bid, ask }
    }

    /// The executed quantity (equal on both legs).
    pub fn quantity(&self) -> Quantity {
        self.bid.quantity
    }
}
