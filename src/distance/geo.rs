//! Geographic points and great-circle distance.

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A geographic point as (latitude, longitude) in degrees.
///
/// # Examples
///
/// ```
/// use u_pmedian::distance::Point;
///
/// let vilnius = Point::new(54.6872, 25.2797);
/// assert_eq!(vilnius.lat, 54.6872);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
}

impl Point {
    /// Creates a point from latitude and longitude in degrees.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Great-circle distance between two points in kilometers, by the
/// haversine formula.
///
/// The coordinate deltas are taken as absolute values before halving;
/// since only `sin²` of the half-difference enters the formula this is
/// equivalent to the signed form.
///
/// Pure and deterministic: `haversine_km(p, p) == 0.0` and
/// `haversine_km(a, b) == haversine_km(b, a)`.
pub fn haversine_km(a: Point, b: Point) -> f64 {
    let dlat = (a.lat - b.lat).abs().to_radians();
    let dlon = (a.lon - b.lon).abs().to_radians();
    let h = (dlat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (dlon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}
