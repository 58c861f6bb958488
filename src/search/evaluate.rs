//! The p-median objective.

use crate::distance::DistanceCache;

/// Total assignment cost of a median set: the sum, over every demand
/// point covered by `cache`, of the distance to its nearest median.
///
/// Pure in `(cache, medians)` — re-evaluating the same set is
/// bit-identical — and O(num_points · k). The result is a sum of
/// non-negative distances, so it is non-negative.
///
/// # Panics
///
/// Panics if `medians` is empty or contains an index outside the cache.
pub fn solution_cost(cache: &DistanceCache, medians: &[usize]) -> f64 {
    assert!(!medians.is_empty(), "median set must not be empty");
    (0..cache.len())
        .map(|p| {
            medians
                .iter()
                .map(|&m| cache.get(p, m))
                .fold(f64::INFINITY, f64::min)
        })
        .sum()
}
