//! Live camera state access.

use survey_core::camera::CameraIntrinsics;

/// Snapshot access to the connected drone's camera state.
///
/// The service reads the feed once per computation and never subscribes to
/// updates; recomputing a plan means calling the service again against the
/// feed's then-current value.
pub trait CameraFeed {
    /// Current camera intrinsics, or None while no drone is connected.
    fn intrinsics(&self) -> Option<CameraIntrinsics>;
}

/// Fixed camera readings for tests and simulators.
#[derive(Debug, Clone, Default)]
pub struct StaticCameraFeed {
    intrinsics: Option<CameraIntrinsics>,
}

impl StaticCameraFeed {
    pub fn new(intrinsics: CameraIntrinsics) -> Self {
        Self {
            intrinsics: Some(intrinsics),
        }
    }

    /// A feed that reports no camera connected.
    pub fn disconnected() -> Self {
        Self::default()
    }
}

impl CameraFeed for StaticCameraFeed {
    fn intrinsics(&self) -> Option<CameraIntrinsics> {
        self.intrinsics
    }
}
