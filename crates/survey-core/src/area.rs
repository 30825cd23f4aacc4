//! Parallelogram survey-area construction and validation.

use crate::geo::{GeoPoint, GeoProjector, PlanarPoint};
use serde::{Deserialize, Serialize};

/// Areas below this are treated as degenerate (collinear corners).
pub const DEGENERATE_AREA_M2: f64 = 1e-6;

/// Complete a parallelogram from three planar corners.
///
/// The returned vertex is diagonal to `origin`.
pub fn fourth_vertex(
    origin: PlanarPoint,
    adjacent1: PlanarPoint,
    adjacent2: PlanarPoint,
) -> PlanarPoint {
    PlanarPoint::new(
        adjacent1.x + adjacent2.x - origin.x,
        adjacent1.y + adjacent2.y - origin.y,
    )
}

/// Complete a parallelogram from three geodetic corners.
///
/// Projects through a tangent plane anchored at `origin`, completes there,
/// and projects back.
pub fn fourth_vertex_geo(origin: GeoPoint, adjacent1: GeoPoint, adjacent2: GeoPoint) -> GeoPoint {
    let projector = GeoProjector::new(origin);
    let fourth = fourth_vertex(
        projector.to_planar(origin),
        projector.to_planar(adjacent1),
        projector.to_planar(adjacent2),
    );
    projector.to_geo(fourth)
}

/// Area of the parallelogram spanned by the two edges leaving `origin`.
///
/// Magnitude of the 2-D cross product of the edge vectors. This is the full
/// parallelogram area, not the half of the triangle shoelace formula, and it
/// is zero when the edges are collinear.
pub fn parallelogram_area(
    origin: PlanarPoint,
    adjacent1: PlanarPoint,
    adjacent2: PlanarPoint,
) -> f64 {
    let e1x = adjacent1.x - origin.x;
    let e1y = adjacent1.y - origin.y;
    let e2x = adjacent2.x - origin.x;
    let e2y = adjacent2.y - origin.y;
    (e1x * e2y - e1y * e2x).abs()
}

/// A parallelogram survey area defined by three geodetic corners.
///
/// `adjacent1` and `adjacent2` are both edge-neighbors of `origin`; the
/// fourth corner is always derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Parallelogram {
    pub origin: GeoPoint,
    pub adjacent1: GeoPoint,
    pub adjacent2: GeoPoint,
}

impl Parallelogram {
    pub fn new(origin: GeoPoint, adjacent1: GeoPoint, adjacent2: GeoPoint) -> Self {
        Self {
            origin,
            adjacent1,
            adjacent2,
        }
    }

    /// The derived corner diagonal to `origin`.
    pub fn fourth_vertex(&self) -> GeoPoint {
        fourth_vertex_geo(self.origin, self.adjacent1, self.adjacent2)
    }

    /// All four corners in ring order: origin, adjacent1, fourth, adjacent2.
    pub fn corners(&self) -> [GeoPoint; 4] {
        [
            self.origin,
            self.adjacent1,
            self.fourth_vertex(),
            self.adjacent2,
        ]
    }

    /// Parallelogram area in square meters, measured in a tangent plane
    /// anchored at the first corner.
    pub fn area_m2(&self) -> f64 {
        let projector = GeoProjector::new(self.origin);
        parallelogram_area(
            projector.to_planar(self.origin),
            projector.to_planar(self.adjacent1),
            projector.to_planar(self.adjacent2),
        )
    }

    /// True when the corners are collinear and the area has no extent.
    pub fn is_degenerate(&self) -> bool {
        self.area_m2() < DEGENERATE_AREA_M2
    }

    /// Validate the area definition.
    /// Returns list of validation errors (empty = valid).
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        for (label, corner) in [
            ("origin", self.origin),
            ("adjacent1", self.adjacent1),
            ("adjacent2", self.adjacent2),
        ] {
            if !corner.is_valid() {
                errors.push(format!("{label} corner is outside the valid lat/lon range"));
            }
        }

        if self.is_degenerate() {
            errors.push("corners are collinear; the survey area has no extent".to_string());
        }

        errors
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}
