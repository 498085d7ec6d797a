/// Earth radius used by the spherical Web Mercator projection (EPSG:3857).
pub const EARTH_RADIUS: f64 = 6_378_137.0;

/// Half the width of the projected world, in meters.
pub const HALF_WORLD_SIZE: f64 = std::f64::consts::PI * EARTH_RADIUS;

/// Converts a longitude/latitude pair (EPSG:4326, degrees) into Web Mercator
/// map coordinates (EPSG:3857, meters).
///
/// Latitudes near the poles are clamped to the projected world extent.
///
/// # Examples
/// ```
/// use dc_map::projection::from_lon_lat;
///
/// let (x, y) = from_lon_lat(0.0, 0.0);
/// assert!(x.abs() < 1e-9 && y.abs() < 1e-9);
/// ```
#[must_use]
pub fn from_lon_lat(lon: f64, lat: f64) -> (f64, f64) {
    let x = EARTH_RADIUS * lon.to_radians();
    let y = EARTH_RADIUS * (std::f64::consts::FRAC_PI_4 + lat.to_radians() / 2.0).tan().ln();
    (x, y.clamp(-HALF_WORLD_SIZE, HALF_WORLD_SIZE))
}
