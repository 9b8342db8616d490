//! Matching pass over the two ladders
//!
//! Crosses the top of book while the spread is non-positive. Within a
//! level, time priority is the FIFO queue; across levels, price priority
//! is the ladder sort order.

pub mod crossing;

use std::collections::HashMap;

use types::ids::OrderId;
use types::trade::{Trade, TradeLeg};

use crate::book::{AskBook, BidBook, Locator};

/// Run the matcher until no further crossing is possible, mutating the
/// ladders and the id-index in place.
///
/// Each emitted trade records the bid order's resting price on its bid
/// leg and the ask order's resting price on its ask leg. Fully filled
/// orders are popped from their queue and from the index; levels that
/// empty are dropped from the ladder. Every iteration retires at least
/// one order or one level, so the loop terminates.
pub(crate) fn match_orders(
    bids: &mut BidBook,
    asks: &mut AskBook,
    index: &mut HashMap<OrderId, Locator>,
) -> Vec<Trade> {
    let mut trades = Vec::new();

    loop {
        let (Some(bid_price), Some(ask_price)) = (bids.best_price(), asks.best_price()) else {
            break;
        };
        if !crossing::can_match(bid_price, ask_price) {
            break;
        }

        {
            let bid_level = bids.level_mut(bid_price).expect("best bid level must exist");
            let ask_level = asks.level_mut(ask_price).expect("best ask level must exist");

            while !bid_level.is_empty() && !ask_level.is_empty() {
                let bid_front = bid_level.front().expect("non-empty level has a front");
                let ask_front = ask_level.front().expect("non-empty level has a front");

                let quantity = bid_front
                    .remaining_quantity
                    .min(ask_front.remaining_quantity);
                let bid_leg = TradeLeg::new(bid_front.id, bid_front.price, quantity);
                let ask_leg = TradeLeg::new(ask_front.id, ask_front.price, quantity);

                if let Some(filled) = bid_level.fill_front(quantity) {
                    index.remove(&filled.id);
                }
                if let Some(filled) = ask_level.fill_front(quantity) {
                    index.remove(&filled.id);
                }

                trades.push(Trade::new(bid_leg, ask_leg));
            }
        }

        bids.prune_if_empty(bid_price);
        asks.prune_if_empty(ask_price);
    }

    trades
}
