//! Exact solver for the discrete p-median facility-location problem by
//! parallel complete enumeration.
//!
//! Given a set of demand points and a candidate pool (the first `n`
//! points of the set), the solver finds the `k` candidate locations that
//! minimize the total great-circle distance from every demand point to
//! its nearest chosen location, by visiting all `C(n, k)` combinations.
//!
//! The combination space is ordered lexicographically and split into one
//! contiguous rank block per worker. Each worker jumps straight to its
//! block start by combinatorial unranking, so no combination is ever
//! enumerated twice and none is skipped, whatever the worker count.
//!
//! # Modules
//!
//! - [`distance`] — Geographic points, haversine distance, pairwise cache
//! - [`combinatorics`] — Combination/rank bijection and lexicographic stepping
//! - [`search`] — Work partitioning, objective evaluation, parallel runner
//!
//! # Example
//!
//! ```
//! use u_pmedian::distance::Point;
//! use u_pmedian::search::{EnumerationRunner, SearchConfig};
//!
//! // Four clustered points plus one outlier; place two facilities.
//! let points = vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(0.0, 1.0),
//!     Point::new(0.0, 2.0),
//!     Point::new(0.0, 3.0),
//!     Point::new(10.0, 10.0),
//! ];
//! let config = SearchConfig::default()
//!     .with_candidates(5)
//!     .with_medians(2)
//!     .with_workers(2);
//! let result = EnumerationRunner::run(&points, &config)?;
//!
//! // The outlier is only ever covered by itself.
//! assert!(result.medians.contains(&4));
//! # Ok::<(), String>(())
//! ```

pub mod combinatorics;
pub mod distance;
pub mod search;
