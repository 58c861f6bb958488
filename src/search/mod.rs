//! Exhaustive p-median search.
//!
//! # Design
//!
//! The `C(n, k)` combination space is totally ordered by lexicographic
//! rank. [`partition`] hands each worker a contiguous half-open rank
//! block; the worker enters its block by combinatorial unranking and
//! walks it with the in-place successor, scoring every combination with
//! [`solution_cost`] against the shared read-only distance cache.
//! [`EnumerationRunner`] drives both parallel phases on one fixed-size
//! pool and reduces worker results through a mutex-guarded best record.

mod config;
mod evaluate;
mod partition;
mod runner;

pub use config::SearchConfig;
pub use evaluate::solution_cost;
pub use partition::partition;
pub use runner::{EnumerationRunner, SearchResult};
