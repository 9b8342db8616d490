//! Price level implementation with FIFO queue
//!
//! A price level holds every resting order at one price, in arrival
//! order. The queue is an intrusive doubly-linked list over a slab, so
//! tail-insert, head-pop, and removal by key are all O(1), and a key
//! stays valid across unrelated inserts and pops (indices into a plain
//! vector would shift).

use slab::Slab;
use types::numeric::Quantity;
use types::order::Order;

/// Stable handle to an order's position within a level's queue.
pub type QueueKey = usize;

#[derive(Debug, Clone)]
struct OrderNode {
    order: Order,
    prev: Option<QueueKey>,
    next: Option<QueueKey>,
}

/// FIFO queue of resting orders at a single price.
///
/// Maintains a running total of remaining quantity for snapshots.
#[derive(Debug, Clone)]
pub struct PriceLevel {
    nodes: Slab<OrderNode>,
    head: Option<QueueKey>,
    tail: Option<QueueKey>,
    total_quantity: Quantity,
}

impl PriceLevel {
    /// Create a new empty price level
    pub fn new() -> Self {
        Self {
            nodes: Slab::new(),
            head: None,
            tail: None,
            total_quantity: Quantity::zero(),
        }
    }

    /// Append an order at the back of the queue (time priority).
    ///
    /// Returns the stable key used as the order's locator.
    pub fn push_back(&mut self, order: Order) -> QueueKey {
        let quantity = order.remaining_quantity;
        let key = self.nodes.insert(OrderNode {
            order,
            prev: self.tail,
            next: None,
        });

        match self.tail {
            Some(tail) => self.nodes[tail].next = Some(key),
            None => self.head = Some(key),
        }
        self.tail = Some(key);
        self.total_quantity += quantity;
        key
    }

    /// Unlink and return the order at `key`, or None for a stale key.
    pub fn remove(&mut self, key: QueueKey) -> Option<Order> {
        let node = self.nodes.try_remove(key)?;

        match node.prev {
            Some(prev) => self.nodes[prev].next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(next) => self.nodes[next].prev = node.prev,
            None => self.tail = node.prev,
        }

        self.total_quantity -= node.order.remaining_quantity;
        Some(node.order)
    }

    /// The order at the front of the queue (earliest arrival).
    pub fn front(&self) -> Option<&Order> {
        self.head.map(|key| &self.nodes[key].order)
    }

    /// Look up an order by its queue key.
    pub fn get(&self, key: QueueKey) -> Option<&Order> {
        self.nodes.get(key).map(|node| &node.order)
    }

    /// Pop the front order from the queue.
    pub fn pop_front(&mut self) -> Option<Order> {
        let key = self.head?;
        self.remove(key)
    }

    /// Reduce the front order by a fill, popping and returning it if the
    /// fill completes it.
    ///
    /// # Panics
    /// Panics if the level is empty or the fill exceeds the front order's
    /// remaining quantity.
    pub fn fill_front(&mut self, quantity: Quantity) -> Option<Order> {
        let key = self.head.expect("fill on an empty price level");
        self.nodes[key].order.fill(quantity);
        self.total_quantity -= quantity;

        if self.nodes[key].order.is_filled() {
            // remove() subtracts the (now zero) remaining quantity
            self.remove(key)
        } else {
            None
        }
    }

    /// Check if the price level is empty
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Total remaining quantity at this price level.
    pub fn total_quantity(&self) -> Quantity {
        self.total_quantity
    }

    /// Number of orders at this level.
    pub fn order_count(&self) -> usize {
        self.nodes.len()
    }

    /// Iterate orders in FIFO order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            nodes: &self.nodes,
            cursor: self.head,
        }
    }
}

impl Default for PriceLevel {
    fn default() -> Self {
        Self::new()
    }
}

/// FIFO iterator over a level's resting orders.
pub struct Iter<'a> {
    nodes: &'a Slab<OrderNode>,
    cursor: Option<QueueKey>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Order;

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.cursor?;
        let node = &self.nodes[key];
        self.cursor = node.next;
        Some(&node.order)
    }
}
