//! Boustrophedon coverage-path generation over a parallelogram survey area.

use crate::area::{self, Parallelogram, DEGENERATE_AREA_M2};
use crate::camera::GroundFootprint;
use crate::geo::{haversine_distance, GeoPoint, GeoProjector, PlanarPoint};
use serde::{Deserialize, Serialize};

/// Sweep strategy for a coverage mission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SweepStrategy {
    /// One boustrophedon sweep across the area.
    SinglePass,
    /// Two crossed sweeps. The orthogonal second pass adds the lateral
    /// overlap needed to reconstruct vertical structure such as facades.
    DoublePass,
}

/// A planned coverage flight over a survey area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoveragePlan {
    /// Waypoints in flight order, geodetic degrees.
    pub waypoints: Vec<GeoPoint>,
    /// Gimbal pitch to apply at every waypoint, degrees from horizontal
    /// (90 = nadir). Metadata only; it does not shape the path.
    pub camera_pitch_deg: f64,
    /// Altitude the plan was computed for, meters above ground.
    pub flight_height_m: f64,
    pub strategy: SweepStrategy,
}

impl CoveragePlan {
    /// Total path length in meters, waypoint to waypoint.
    pub fn total_distance_m(&self) -> f64 {
        self.waypoints
            .windows(2)
            .map(|pair| haversine_distance(pair[0], pair[1]))
            .sum()
    }

    /// Rough flight duration at a constant cruise speed.
    pub fn estimated_duration_secs(&self, speed_mps: f64) -> Option<u32> {
        if speed_mps <= 0.0 {
            return None;
        }
        Some((self.total_distance_m() / speed_mps) as u32)
    }
}

/// Plan the waypoint sequence that photographs `area` with full coverage.
///
/// All geometry happens in a tangent plane anchored at `starting_point`;
/// waypoints are projected back to geodetic coordinates before returning.
/// Returns None when the area is degenerate or the footprint has no positive
/// extent. Identical inputs always produce the identical sequence.
pub fn plan_coverage_path(
    starting_point: GeoPoint,
    area: &Parallelogram,
    camera_angle_deg: f64,
    flight_height_m: f64,
    footprint: &GroundFootprint,
    strategy: SweepStrategy,
) -> Option<CoveragePlan> {
    if !footprint.is_positive() {
        return None;
    }

    let projector = GeoProjector::new(starting_point);
    let origin = projector.to_planar(area.origin);
    let adjacent1 = projector.to_planar(area.adjacent1);
    let adjacent2 = projector.to_planar(area.adjacent2);

    if area::parallelogram_area(origin, adjacent1, adjacent2) < DEGENERATE_AREA_M2 {
        return None;
    }

    // Ring order matches Parallelogram::corners.
    let fourth = area::fourth_vertex(origin, adjacent1, adjacent2);
    let ring = [origin, adjacent1, fourth, adjacent2];

    // The starting point is the origin of its own planar frame, so the
    // nearest corner is the one closest to (0, 0). Strict comparison keeps
    // the earliest ring index on ties.
    let frame_origin = PlanarPoint::new(0.0, 0.0);
    let mut corner_idx = 0;
    for idx in 1..ring.len() {
        if ring[idx].distance_to(frame_origin) < ring[corner_idx].distance_to(frame_origin) {
            corner_idx = idx;
        }
    }

    let corner = ring[corner_idx];
    let forward = edge_vector(corner, ring[(corner_idx + 1) % 4]);
    let backward = edge_vector(corner, ring[(corner_idx + 3) % 4]);
    let forward_len = forward.distance_to(frame_origin);
    let backward_len = backward.distance_to(frame_origin);

    // The longer edge carries the rows (sweep axis), the shorter one is
    // stepped across (sweep-perpendicular axis). Equal lengths go to the
    // edge sharing an endpoint with the area's first-listed corner,
    // ring-forward when both or neither do.
    let (sweep, perpendicular) = if forward_len > backward_len {
        (forward, backward)
    } else if backward_len > forward_len {
        (backward, forward)
    } else if corner_idx != 0 && (corner_idx + 3) % 4 == 0 {
        (backward, forward)
    } else {
        (forward, backward)
    };

    let mut planar = sweep_rows(corner, sweep, perpendicular, footprint.width_m);
    if strategy == SweepStrategy::DoublePass {
        planar.extend(sweep_rows(corner, perpendicular, sweep, footprint.height_m));
    }

    let waypoints = planar.into_iter().map(|p| projector.to_geo(p)).collect();

    Some(CoveragePlan {
        waypoints,
        camera_pitch_deg: camera_angle_deg,
        flight_height_m,
        strategy,
    })
}

fn edge_vector(from: PlanarPoint, to: PlanarPoint) -> PlanarPoint {
    PlanarPoint::new(to.x - from.x, to.y - from.y)
}

/// Offsets this close to the far edge count as having reached it, so an
/// edge length that is an exact multiple of the spacing yields one final
/// row, not two coincident ones.
const ROW_CLIP_EPS_M: f64 = 1e-9;

/// One boustrophedon sweep: rows parallel to `sweep`, stepped along
/// `perpendicular` by `spacing_m`, traversal direction alternating row to
/// row so consecutive waypoints stay spatially adjacent.
fn sweep_rows(
    corner: PlanarPoint,
    sweep: PlanarPoint,
    perpendicular: PlanarPoint,
    spacing_m: f64,
) -> Vec<PlanarPoint> {
    let perp_len = (perpendicular.x * perpendicular.x + perpendicular.y * perpendicular.y).sqrt();
    let step_x = perpendicular.x / perp_len;
    let step_y = perpendicular.y / perp_len;

    let mut offsets = Vec::new();
    let mut offset = 0.0;
    loop {
        if offset >= perp_len - ROW_CLIP_EPS_M {
            // Clip the last row to the far edge instead of overshooting.
            offsets.push(perp_len);
            break;
        }
        offsets.push(offset);
        offset += spacing_m;
    }

    let mut waypoints = Vec::with_capacity(offsets.len() * 2);
    for (row, offset) in offsets.into_iter().enumerate() {
        let near = PlanarPoint::new(corner.x + step_x * offset, corner.y + step_y * offset);
        let far = PlanarPoint::new(near.x + sweep.x, near.y + sweep.y);
        if row % 2 == 0 {
            waypoints.push(near);
            waypoints.push(far);
        } else {
            waypoints.push(far);
            waypoints.push(near);
        }
    }
    waypoints
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::{meters_to_lat, meters_to_lon};

    const START: GeoPoint = GeoPoint {
        lat: 46.52,
        lon: 6.56,
    };

    /// A 30 m (east) by 12 m (north) survey rectangle cornered at START.
    fn rectangle() -> Parallelogram {
        Parallelogram::new(
            START,
            GeoPoint::new(START.lat, START.lon + meters_to_lon(30.0, START.lat)),
            GeoPoint::new(START.lat + meters_to_lat(12.0), START.lon),
        )
    }

    fn footprint() -> GroundFootprint {
        GroundFootprint {
            width_m: 5.0,
            height_m: 5.0,
        }
    }

    #[test]
    fn single_pass_rows_are_clipped_to_the_far_edge() {
        let plan = plan_coverage_path(
            START,
            &rectangle(),
            90.0,
            10.0,
            &footprint(),
            SweepStrategy::SinglePass,
        )
        .unwrap();

        // Sweep along the 30 m edge, rows stepped over the 12 m edge at
        // offsets 0, 5, 10 and the clipped far edge at 12.
        assert_eq!(plan.waypoints.len(), 8);

        // First row starts at the corner nearest the starting point.
        assert!((plan.waypoints[0].lat - START.lat).abs() < 1e-9);
        assert!((plan.waypoints[0].lon - START.lon).abs() < 1e-9);

        // Last row lies on the far edge.
        let last = plan.waypoints.last().unwrap();
        assert!((last.lat - (START.lat + meters_to_lat(12.0))).abs() < 1e-9);

        // Boustrophedon: the second row is flown in reverse, so waypoints 1
        // and 2 sit on the same end of the area, one row spacing apart.
        let hop = haversine_distance(plan.waypoints[1], plan.waypoints[2]);
        assert!((hop - 5.0).abs() < 0.01);
    }

    #[test]
    fn double_pass_appends_the_orthogonal_sweep() {
        let single = plan_coverage_path(
            START,
            &rectangle(),
            90.0,
            10.0,
            &footprint(),
            SweepStrategy::SinglePass,
        )
        .unwrap();
        let double = plan_coverage_path(
            START,
            &rectangle(),
            90.0,
            10.0,
            &footprint(),
            SweepStrategy::DoublePass,
        )
        .unwrap();

        // Orthogonal sweep: rows along the 12 m edge, stepped over the 30 m
        // edge at 0, 5, 10, 15, 20, 25 and the far edge at 30.
        assert_eq!(double.waypoints.len(), single.waypoints.len() + 14);
        assert_eq!(double.waypoints[..8], single.waypoints[..]);
    }

    #[test]
    fn planner_is_deterministic() {
        let a = plan_coverage_path(
            START,
            &rectangle(),
            75.0,
            10.0,
            &footprint(),
            SweepStrategy::DoublePass,
        )
        .unwrap();
        let b = plan_coverage_path(
            START,
            &rectangle(),
            75.0,
            10.0,
            &footprint(),
            SweepStrategy::DoublePass,
        )
        .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn camera_angle_is_passed_through_untouched() {
        let nadir = plan_coverage_path(
            START,
            &rectangle(),
            90.0,
            10.0,
            &footprint(),
            SweepStrategy::SinglePass,
        )
        .unwrap();
        let tilted = plan_coverage_path(
            START,
            &rectangle(),
            60.0,
            10.0,
            &footprint(),
            SweepStrategy::SinglePass,
        )
        .unwrap();

        assert_eq!(nadir.waypoints, tilted.waypoints);
        assert_eq!(tilted.camera_pitch_deg, 60.0);
    }

    #[test]
    fn degenerate_area_cannot_be_planned() {
        let collinear = Parallelogram::new(
            START,
            GeoPoint::new(START.lat, START.lon + meters_to_lon(10.0, START.lat)),
            GeoPoint::new(START.lat, START.lon + meters_to_lon(20.0, START.lat)),
        );
        assert!(plan_coverage_path(
            START,
            &collinear,
            90.0,
            10.0,
            &footprint(),
            SweepStrategy::SinglePass,
        )
        .is_none());
    }

    #[test]
    fn empty_footprint_cannot_be_planned() {
        let empty = GroundFootprint {
            width_m: 0.0,
            height_m: 5.0,
        };
        assert!(plan_coverage_path(
            START,
            &rectangle(),
            90.0,
            10.0,
            &empty,
            SweepStrategy::SinglePass,
        )
        .is_none());
    }

    #[test]
    fn sweep_starts_from_the_corner_nearest_the_starting_point() {
        // Start near the corner diagonal to the area origin.
        let far_start = GeoPoint::new(
            START.lat + meters_to_lat(13.0),
            START.lon + meters_to_lon(31.0, START.lat),
        );
        let plan = plan_coverage_path(
            far_start,
            &rectangle(),
            90.0,
            10.0,
            &footprint(),
            SweepStrategy::SinglePass,
        )
        .unwrap();

        let first = plan.waypoints[0];
        let fourth = rectangle().fourth_vertex();
        assert!(haversine_distance(first, fourth) < 0.01);
    }

    #[test]
    fn distance_and_duration_cover_the_whole_path() {
        let plan = plan_coverage_path(
            START,
            &rectangle(),
            90.0,
            10.0,
            &footprint(),
            SweepStrategy::SinglePass,
        )
        .unwrap();

        // Four 30 m rows plus three hops across row spacings 5, 5 and 2.
        let expected = 4.0 * 30.0 + 5.0 + 5.0 + 2.0;
        assert!((plan.total_distance_m() - expected).abs() < 0.1);

        let secs = plan.estimated_duration_secs(10.0).unwrap();
        assert_eq!(secs, (plan.total_distance_m() / 10.0) as u32);
        assert!(plan.estimated_duration_secs(0.0).is_none());
    }
}
