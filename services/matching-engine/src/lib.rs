//! Limit Order Book Matching Engine
//!
//! Single-symbol order book with price-time priority matching. Orders are
//! admitted, matched against the opposite side while the spread is
//! non-positive, and rest on the book according to their type.
//!
//! **Key invariants:**
//! - Price-time priority strictly enforced
//! - Deterministic matching (same inputs → same outputs)
//! - Conservation of quantity across fills
//! - The book is never crossed between operations

pub mod book;
pub mod engine;
pub mod matching;

pub use book::{DepthSnapshot, LevelInfo};
pub use engine::OrderBook;
