//! Geographic distance: points, the haversine formula, and the pairwise
//! distance cache.
//!
//! The p-median objective touches distances `num_points · C(n, k) · k`
//! times, so every unordered pair is computed once up front into a
//! lower-triangular [`DistanceCache`] and looked up thereafter.

mod cache;
mod geo;

pub use cache::DistanceCache;
pub use geo::{haversine_km, Point, EARTH_RADIUS_KM};
