//! Order book infrastructure module
//!
//! Contains the price-level queue, the bid and ask ladders, and the
//! locator type the id-index stores for O(1) cancels.

pub mod ask_book;
pub mod bid_book;
pub mod price_level;

pub use ask_book::AskBook;
pub use bid_book::BidBook;
pub use price_level::{PriceLevel, QueueKey};

use serde::{Deserialize, Serialize};
use types::numeric::{Price, Quantity};
use types::order::Side;

/// Where a resting order lives: its side, its price level, and its stable
/// position within that level's queue.
///
/// The locator is non-owning; the level's queue owns the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locator {
    pub side: Side,
    pub price: Price,
    pub key: QueueKey,
}

/// Aggregated view of a single price level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelInfo {
    /// The price of this level.
    pub price: Price,
    /// Total remaining quantity across all orders at this level.
    pub quantity: Quantity,
}

/// A snapshot of the book's depth at a point in time.
///
/// Bids in descending price order (best first), asks ascending.
/// Copied value data; never live references into the book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepthSnapshot {
    pub bids: Vec<LevelInfo>,
    pub asks: Vec<LevelInfo>,
}
