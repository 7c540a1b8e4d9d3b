//! Deduplication module.
//!
//! Collects normalized, filter-passing wallpapers into a set keyed by
//! identifier and materializes it in a stable order.

pub mod accepted;

pub use accepted::AcceptedSet;
