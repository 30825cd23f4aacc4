pub mod area;
pub mod builder;
pub mod camera;
pub mod geo;
pub mod mission;
pub mod planner;
pub mod rules;

pub use area::{fourth_vertex, fourth_vertex_geo, parallelogram_area, Parallelogram};
pub use builder::AreaBuilder;
pub use camera::{ground_footprint, CameraIntrinsics, FootprintError, GroundFootprint};
pub use geo::{haversine_distance, GeoPoint, GeoProjector, PlanarPoint};
pub use mission::Mission;
pub use planner::{plan_coverage_path, CoveragePlan, SweepStrategy};
pub use rules::SurveyRules;
