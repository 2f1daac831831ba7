//! Database primitives and data structures.
//!
//! - `dict`: fixed-size hash table over `i64` keys with chained buckets.

pub mod dict;

pub use dict::*;
