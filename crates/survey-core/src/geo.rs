//! Geodetic types and the local tangent-plane projection.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Meters per degree of latitude on the mean-radius sphere.
pub const METERS_PER_DEG_LAT: f64 = EARTH_RADIUS_M * std::f64::consts::PI / 180.0;

/// A geodetic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Check that both coordinates are inside the valid ranges
    /// (lat in [-90, 90], lon in [-180, 180]).
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon)
    }
}

/// A position in meters inside a tangent-plane frame.
///
/// Only meaningful relative to the projector that produced it; planar points
/// from projectors with different origins must never be compared.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanarPoint {
    /// East offset from the projector origin in meters.
    pub x: f64,
    /// North offset from the projector origin in meters.
    pub y: f64,
}

impl PlanarPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: PlanarPoint) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Meters per degree of longitude at a given latitude.
pub fn meters_per_deg_lon(lat_deg: f64) -> f64 {
    METERS_PER_DEG_LAT * lat_deg.to_radians().cos()
}

/// Convert a north/south offset in meters to degrees latitude.
pub fn meters_to_lat(meters: f64) -> f64 {
    meters / METERS_PER_DEG_LAT
}

/// Convert an east/west offset in meters to degrees longitude.
/// Requires the reference latitude for proper scaling.
pub fn meters_to_lon(meters: f64, ref_lat_deg: f64) -> f64 {
    meters / meters_per_deg_lon(ref_lat_deg).max(1e-9)
}

/// Normalize a longitude value or difference to (-180, 180] degrees.
pub fn normalize_lon(deg: f64) -> f64 {
    let wrapped = (deg + 180.0).rem_euclid(360.0) - 180.0;
    if wrapped == -180.0 {
        180.0
    } else {
        wrapped
    }
}

/// Great-circle distance between two points in meters (haversine formula).
pub fn haversine_distance(a: GeoPoint, b: GeoPoint) -> f64 {
    let phi1 = a.lat.to_radians();
    let phi2 = b.lat.to_radians();
    let dphi = (b.lat - a.lat).to_radians();
    let dlambda = (b.lon - a.lon).to_radians();
    let h = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Projects geodetic coordinates onto a local tangent plane and back.
///
/// Equirectangular approximation anchored at a fixed origin: latitude scales
/// by the mean-radius arc length, longitude additionally by the cosine of the
/// origin latitude. The projection is total over the valid lat/lon domain and
/// `to_geo` is the exact inverse of `to_planar` for the same instance.
/// Distortion grows with distance from the origin; callers keep survey points
/// within a few kilometers of it.
#[derive(Debug, Clone)]
pub struct GeoProjector {
    origin: GeoPoint,
    meters_per_deg_lon: f64,
}

impl GeoProjector {
    /// Create a projector anchored at `origin` for its whole lifetime.
    pub fn new(origin: GeoPoint) -> Self {
        Self {
            origin,
            meters_per_deg_lon: meters_per_deg_lon(origin.lat).max(1e-9),
        }
    }

    pub fn origin(&self) -> GeoPoint {
        self.origin
    }

    /// Project a geodetic point into the tangent-plane frame.
    ///
    /// The longitude delta is normalized to (-180, 180] first, so a patch
    /// straddling the antimeridian projects to one contiguous frame.
    pub fn to_planar(&self, p: GeoPoint) -> PlanarPoint {
        PlanarPoint {
            x: normalize_lon(p.lon - self.origin.lon) * self.meters_per_deg_lon,
            y: (p.lat - self.origin.lat) * METERS_PER_DEG_LAT,
        }
    }

    /// Project a tangent-plane point back to geodetic coordinates.
    pub fn to_geo(&self, p: PlanarPoint) -> GeoPoint {
        GeoPoint {
            lat: self.origin.lat + p.y / METERS_PER_DEG_LAT,
            lon: normalize_lon(self.origin.lon + p.x / self.meters_per_deg_lon),
        }
    }
}
