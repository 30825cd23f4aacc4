//! Mission-planning facade.
//!
//! The one place external collaborators enter the core: camera readings are
//! pulled as snapshots, turned into a ground footprint, and forwarded to the
//! coverage planner. The facade adds no geometry of its own, so its output
//! always equals a direct planner invocation on the same inputs.

use survey_core::area::Parallelogram;
use survey_core::camera::ground_footprint;
use survey_core::geo::GeoPoint;
use survey_core::mission::Mission;
use survey_core::planner::{plan_coverage_path, CoveragePlan, SweepStrategy};
use survey_core::rules::SurveyRules;

use crate::camera_feed::CameraFeed;

/// Facade wiring live camera readings into the coverage planner.
pub struct MissionService<F: CameraFeed> {
    feed: F,
    rules: SurveyRules,
}

impl<F: CameraFeed> MissionService<F> {
    pub fn new(feed: F) -> Self {
        Self {
            feed,
            rules: SurveyRules::default(),
        }
    }

    pub fn with_rules(feed: F, rules: SurveyRules) -> Self {
        Self { feed, rules }
    }

    pub fn rules(&self) -> &SurveyRules {
        &self.rules
    }

    /// Plan a coverage flight over `area`.
    ///
    /// None when the camera is not connected, the requested flight height is
    /// outside the configured limits, or the area cannot be covered - all
    /// expected "cannot plan" outcomes for the caller to surface, not faults.
    pub fn plan_survey(
        &self,
        starting_point: GeoPoint,
        area: &Parallelogram,
        camera_angle_deg: f64,
        flight_height_m: f64,
        strategy: SweepStrategy,
    ) -> Option<CoveragePlan> {
        let Some(intrinsics) = self.feed.intrinsics() else {
            tracing::debug!("no camera intrinsics available, cannot plan survey");
            return None;
        };

        if !self.rules.allows_flight_height(flight_height_m) {
            tracing::warn!(
                flight_height_m,
                "requested flight height outside configured limits"
            );
            return None;
        }

        let footprint = match ground_footprint(&intrinsics, flight_height_m) {
            Ok(footprint) => footprint,
            Err(err) => {
                tracing::warn!("invalid camera parameters: {err}");
                return None;
            }
        };

        let plan = plan_coverage_path(
            starting_point,
            area,
            camera_angle_deg,
            flight_height_m,
            &footprint,
            strategy,
        )?;

        if plan.waypoints.len() > self.rules.max_waypoints {
            tracing::warn!(
                waypoints = plan.waypoints.len(),
                max_waypoints = self.rules.max_waypoints,
                "planned mission exceeds the waypoint limit"
            );
            return None;
        }

        Some(plan)
    }

    /// Plan a coverage flight and wrap it into a persistable named mission.
    pub fn plan_named_mission(
        &self,
        name: &str,
        starting_point: GeoPoint,
        area: &Parallelogram,
        camera_angle_deg: f64,
        flight_height_m: f64,
        strategy: SweepStrategy,
    ) -> Option<Mission> {
        let plan = self.plan_survey(
            starting_point,
            area,
            camera_angle_deg,
            flight_height_m,
            strategy,
        )?;
        Some(Mission::new(name, plan.waypoints))
    }
}
