//! Balanced block partition of the combination rank space.

use std::ops::Range;

/// The half-open rank range owned by `worker` out of `workers`.
///
/// `start = worker·total/workers`, `end = (worker+1)·total/workers`,
/// with integer division: the ranges are contiguous, pairwise disjoint,
/// cover `[0, total)` exactly, and differ in size by at most one. A
/// range may be empty when `total < workers`.
///
/// # Examples
///
/// ```
/// use u_pmedian::search::partition;
///
/// assert_eq!(partition(10, 0, 3), 0..3);
/// assert_eq!(partition(10, 1, 3), 3..6);
/// assert_eq!(partition(10, 2, 3), 6..10);
/// ```
///
/// # Panics
///
/// Panics if `workers == 0` or `worker >= workers`.
pub fn partition(total: u64, worker: usize, workers: usize) -> Range<u64> {
    assert!(workers >= 1, "workers must be >= 1");
    assert!(
        worker < workers,
        "worker {worker} out of range for {workers} workers"
    );
    let total = total as u128;
    let workers = workers as u128;
    let id = worker as u128;
    let start = (id * total / workers) as u64;
    let end = ((id + 1) * total / workers) as u64;
    start..end
}
