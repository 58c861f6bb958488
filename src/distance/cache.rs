//! Pairwise distance cache.

use rayon::prelude::*;

use super::geo::{haversine_km, Point};

/// Lower-triangular store of all pairwise great-circle distances.
///
/// Distances are symmetric, so each unordered pair is computed and kept
/// once: row `i` holds the distances to points `0..=i`, and the rows are
/// flattened into a single `Vec<f64>` indexed by `i·(i+1)/2 + j`.
/// [`DistanceCache::get`] normalizes an index pair to (max, min), making
/// lookups symmetric.
///
/// Built once and read-only afterwards; the search phase shares it by
/// reference across workers without any locking.
///
/// # Examples
///
/// ```
/// use u_pmedian::distance::{DistanceCache, Point};
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(0.0, 1.0),
///     Point::new(1.0, 1.0),
/// ];
/// let cache = DistanceCache::build(&points);
/// assert_eq!(cache.len(), 3);
/// assert_eq!(cache.get(0, 2), cache.get(2, 0));
/// ```
#[derive(Debug, Clone)]
pub struct DistanceCache {
    data: Vec<f64>,
    len: usize,
}

impl DistanceCache {
    /// Computes every pairwise distance, one triangular row per parallel
    /// task.
    ///
    /// Rows are independent, so the build needs no synchronization; the
    /// ordered collect reassembles them in row order. Runs on the current
    /// rayon pool.
    pub fn build(points: &[Point]) -> Self {
        let data = (0..points.len())
            .into_par_iter()
            .flat_map_iter(|i| {
                let pi = points[i];
                points[..=i].iter().map(move |&pj| haversine_km(pi, pj))
            })
            .collect();
        Self {
            data,
            len: points.len(),
        }
    }

    /// Number of points covered by the cache.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the cache covers no points.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Distance in kilometers between points `i` and `j`.
    ///
    /// Symmetric: `get(i, j) == get(j, i)`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        let (hi, lo) = if i >= j { (i, j) } else { (j, i) };
        self.data[hi * (hi + 1) / 2 + lo]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_points() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(0.0, 2.0),
            Point::new(10.0, 10.0),
        ]
    }

    #[test]
    fn test_len() {
        let cache = DistanceCache::build(&sample_points());
        assert_eq!(cache.len(), 4);
        assert!(!cache.is_empty());
    }

    #[test]
    fn test_empty() {
        let cache = DistanceCache::build(&[]);
        assert_eq!(cache.len(), 0);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_diagonal_is_zero() {
        let cache = DistanceCache::build(&sample_points());
        for i in 0..cache.len() {
            assert_eq!(cache.get(i, i), 0.0);
        }
    }

    #[test]
    fn test_symmetric_lookup() {
        let cache = DistanceCache::build(&sample_points());
        for i in 0..cache.len() {
            for j in 0..cache.len() {
                assert_eq!(cache.get(i, j), cache.get(j, i));
            }
        }
    }

    #[test]
    fn test_matches_direct_formula() {
        let points = sample_points();
        let cache = DistanceCache::build(&points);
        for i in 0..points.len() {
            for j in 0..points.len() {
                assert_eq!(cache.get(i, j), haversine_km(points[i], points[j]));
            }
        }
    }

    #[test]
    #[should_panic]
    fn test_out_of_bounds_panics() {
        let cache = DistanceCache::build(&sample_points());
        cache.get(0, 4);
    }
}
