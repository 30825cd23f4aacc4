//! Survey SDK - drone integration surface for the coverage-path engine.
//!
//! External collaborators (camera telemetry, mission persistence, map UI)
//! interact with the planning core exclusively through this crate.

pub mod camera_feed;
pub mod service;

pub use camera_feed::{CameraFeed, StaticCameraFeed};
pub use service::MissionService;
