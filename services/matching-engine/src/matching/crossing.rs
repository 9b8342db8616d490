//! Crossing detection logic
//!
//! Determines when bid and ask prices are marketable against each other.

use types::numeric::Price;
use types::order::Side;

/// Check if a bid and an ask can match at the given prices.
///
/// A trade can occur whenever the bid is at or above the ask.
pub fn can_match(bid_price: Price, ask_price: Price) -> bool {
    bid_price >= ask_price
}

/// Whether an order at `price` on `side` would cross the opposite side's
/// best price. An empty opposite book never crosses.
pub fn crosses_opposite_best(side: Side, price: Price, opposite_best: Option<Price>) -> bool {
    match (side, opposite_best) {
        (Side::Buy, Some(best_ask)) => price >= best_ask,
        (Side::Sell, Some(best_bid)) => price <= best_bid,
        (_, None) => false,
    }
}
