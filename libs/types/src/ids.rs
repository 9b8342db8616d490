//! Order identifiers
//!
//! Ids are caller-assigned 64-bit integers, unique for the lifetime of a
//! book. The engine never generates ids; re-use of a live id is rejected
//! at admission.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(u64);

impl OrderId {
    /// Wrap a caller-assigned id.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// The raw id value.
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for OrderId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}
