//! Complete-enumeration execution engine.
//!
//! # Algorithm
//!
//! 1. Validate the configuration against the point set (fail fast)
//! 2. Build the pairwise distance cache, row-parallel
//! 3. Split the `C(n, k)` rank space into one contiguous block per worker
//! 4. Each worker unranks its block start, then repeats
//!    evaluate → conditionally improve the shared best → advance
//!    until the block is exhausted
//! 5. Join and report the guarded global best
//!
//! Every combination in every block is visited; exhaustive search has no
//! bound to cut on. The only shared mutable state during the search is
//! the best-solution record, updated under a single mutex with score and
//! indices copied together, so no torn update is ever observable.

use std::sync::Mutex;
use std::time::{Duration, Instant};

use rayon::prelude::*;

use super::config::SearchConfig;
use super::evaluate::solution_cost;
use super::partition::partition;
use crate::combinatorics::{binomial, CombinationCursor};
use crate::distance::{DistanceCache, Point};

/// Result of a complete-enumeration run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// Optimal median set: strictly increasing indices into the
    /// candidate pool.
    pub medians: Vec<usize>,

    /// Total distance from every demand point to its nearest median.
    pub cost: f64,

    /// Number of combinations evaluated, `C(candidates, medians)`.
    pub combinations: u64,

    /// Wall time spent building the distance cache.
    pub matrix_elapsed: Duration,

    /// Wall time spent enumerating and evaluating combinations.
    pub search_elapsed: Duration,
}

/// Best solution found so far, shared across workers.
///
/// Score and indices always change together inside the critical section.
#[derive(Debug)]
struct BestSolution {
    cost: f64,
    medians: Vec<usize>,
}

/// Exhaustive p-median search runner.
///
/// # Usage
///
/// ```
/// use u_pmedian::distance::Point;
/// use u_pmedian::search::{EnumerationRunner, SearchConfig};
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(0.0, 1.0),
///     Point::new(0.0, 2.0),
/// ];
/// let config = SearchConfig::default().with_candidates(3).with_medians(1);
/// let result = EnumerationRunner::run(&points, &config)?;
/// assert_eq!(result.medians, vec![1]);
/// # Ok::<(), String>(())
/// ```
pub struct EnumerationRunner;

impl EnumerationRunner {
    /// Runs the exhaustive search over `points`.
    ///
    /// The candidate pool is `points[..config.candidates]`; every point
    /// is a demand point. Returns a configuration error before any work
    /// starts if the config is invalid for this point set.
    ///
    /// The winning cost is identical for every worker count; among
    /// score-equal ties the reported set is the earliest found, which
    /// with more than one worker may vary between runs.
    pub fn run(points: &[Point], config: &SearchConfig) -> Result<SearchResult, String> {
        config.validate()?;
        if points.is_empty() {
            return Err("point set must not be empty".into());
        }
        if config.candidates > points.len() {
            return Err(format!(
                "candidates ({}) must not exceed the number of points ({})",
                config.candidates,
                points.len()
            ));
        }

        let n = config.candidates;
        let k = config.medians;
        let total = binomial(n as u64, k as u64);

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.workers)
            .build()
            .map_err(|e| format!("failed to build worker pool: {e}"))?;

        let started = Instant::now();
        let cache = pool.install(|| DistanceCache::build(points));
        let matrix_elapsed = started.elapsed();

        let best = Mutex::new(BestSolution {
            cost: f64::INFINITY,
            medians: Vec::new(),
        });

        let started = Instant::now();
        pool.install(|| {
            (0..config.workers).into_par_iter().for_each(|worker| {
                let range = partition(total, worker, config.workers);
                if range.is_empty() {
                    return;
                }
                let mut remaining = range.end - range.start;
                let mut cursor = CombinationCursor::unrank(range.start, n, k);
                // Lower bound on the global best, refreshed whenever the
                // lock is taken. The strict `<` filter never rejects a
                // combination that could still improve the winning cost,
                // it only skips the lock for ones that cannot.
                let mut bound = f64::INFINITY;
                loop {
                    let cost = solution_cost(&cache, cursor.indices());
                    if cost < bound {
                        let mut best = best.lock().expect("best-solution lock poisoned");
                        if cost < best.cost {
                            best.cost = cost;
                            best.medians.clear();
                            best.medians.extend_from_slice(cursor.indices());
                        }
                        bound = best.cost;
                    }
                    remaining -= 1;
                    if remaining == 0 {
                        break;
                    }
                    // The block is a sub-range of [0, C(n, k)), so the
                    // sequence cannot run out before the block does.
                    let advanced = cursor.advance();
                    debug_assert!(advanced, "enumeration exhausted inside a block");
                }
            });
        });
        let search_elapsed = started.elapsed();

        let best = best.into_inner().expect("best-solution lock poisoned");
        Ok(SearchResult {
            medians: best.medians,
            cost: best.cost,
            combinations: total,
            matrix_elapsed,
            search_elapsed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::haversine_km;

    /// Four clustered points on the equator plus one far outlier.
    fn cluster_with_outlier() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(0.0, 2.0),
            Point::new(0.0, 3.0),
            Point::new(10.0, 10.0),
        ]
    }

    #[test]
    fn test_outlier_scenario_exact_cost() {
        let points = cluster_with_outlier();
        let config = SearchConfig::default()
            .with_candidates(5)
            .with_medians(2);
        let result = EnumerationRunner::run(&points, &config).expect("valid config");

        // One median must cover the outlier; the other sits inside the
        // cluster at (0,1) or (0,2), either way collecting two
        // one-degree hops and one two-degree hop.
        assert!(result.medians.contains(&4), "medians: {:?}", result.medians);
        let one_degree = haversine_km(points[0], points[1]);
        let two_degrees = haversine_km(points[0], points[2]);
        let expected = 2.0 * one_degree + two_degrees;
        assert!(
            (result.cost - expected).abs() < 1e-9,
            "cost {} vs expected {expected}",
            result.cost
        );
        assert_eq!(result.combinations, 10);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let points = cluster_with_outlier();
        let sequential = SearchConfig::default()
            .with_candidates(5)
            .with_medians(2)
            .with_workers(1);
        let parallel = sequential.clone().with_workers(4);

        let a = EnumerationRunner::run(&points, &sequential).expect("valid config");
        let b = EnumerationRunner::run(&points, &parallel).expect("valid config");
        assert_eq!(a.cost, b.cost);
    }

    #[test]
    fn test_parallel_matches_sequential_larger_instance() {
        // 12 irregularly placed points, pool of 9 candidates, 84 combinations.
        let points: Vec<Point> = (0..12)
            .map(|i| {
                let t = i as f64;
                Point::new(50.0 + (t * 0.7).sin(), 20.0 + 0.5 * t + 0.2 * (t * 1.3).cos())
            })
            .collect();
        let base = SearchConfig::default().with_candidates(9).with_medians(3);

        let sequential = EnumerationRunner::run(&points, &base).expect("valid config");
        for workers in [2, 3, 5, 16] {
            let config = base.clone().with_workers(workers);
            let parallel = EnumerationRunner::run(&points, &config).expect("valid config");
            assert_eq!(sequential.cost, parallel.cost, "workers = {workers}");
            assert_eq!(sequential.medians, parallel.medians, "workers = {workers}");
        }
    }

    #[test]
    fn test_k_equals_n_single_combination() {
        let points = cluster_with_outlier();
        let config = SearchConfig::default().with_candidates(3).with_medians(3);
        let result = EnumerationRunner::run(&points, &config).expect("valid config");
        assert_eq!(result.medians, vec![0, 1, 2]);
        assert_eq!(result.combinations, 1);
    }

    #[test]
    fn test_more_workers_than_combinations() {
        let points = cluster_with_outlier();
        let config = SearchConfig::default()
            .with_candidates(3)
            .with_medians(2)
            .with_workers(16);
        let result = EnumerationRunner::run(&points, &config).expect("valid config");
        assert_eq!(result.combinations, 3);
        assert_eq!(result.medians.len(), 2);
    }

    #[test]
    fn test_medians_strictly_increasing() {
        let points = cluster_with_outlier();
        let config = SearchConfig::default()
            .with_candidates(5)
            .with_medians(3)
            .with_workers(2);
        let result = EnumerationRunner::run(&points, &config).expect("valid config");
        assert!(result.medians.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_rejects_empty_point_set() {
        let config = SearchConfig::default();
        assert!(EnumerationRunner::run(&[], &config).is_err());
    }

    #[test]
    fn test_rejects_candidates_beyond_points() {
        let points = cluster_with_outlier();
        let config = SearchConfig::default().with_candidates(6).with_medians(2);
        assert!(EnumerationRunner::run(&points, &config).is_err());
    }

    #[test]
    fn test_rejects_invalid_config() {
        let points = cluster_with_outlier();
        let config = SearchConfig::default()
            .with_candidates(5)
            .with_medians(2)
            .with_workers(0);
        assert!(EnumerationRunner::run(&points, &config).is_err());
    }
}
