//! Camera intrinsics and the ground footprint of a single exposure.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Camera intrinsics snapshot supplied by drone telemetry.
///
/// Consumed as an immutable point-in-time reading per computation; the core
/// never subscribes to later changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraIntrinsics {
    pub resolution_width_px: u32,
    pub resolution_height_px: u32,
    pub sensor_width_mm: f64,
    pub sensor_height_mm: f64,
    pub focal_length_mm: f64,
}

/// The ground rectangle imaged by one nadir exposure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroundFootprint {
    pub width_m: f64,
    pub height_m: f64,
}

impl GroundFootprint {
    /// True when both dimensions are usable as row spacing.
    pub fn is_positive(&self) -> bool {
        self.width_m > 0.0 && self.height_m > 0.0
    }
}

/// Caller precondition violations in footprint computations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FootprintError {
    #[error("focal length must be positive, got {0} mm")]
    InvalidFocalLength(f64),
    #[error("flight height must be positive, got {0} m")]
    InvalidFlightHeight(f64),
    #[error("sensor dimensions must be positive, got {0} x {1} mm")]
    InvalidSensorSize(f64, f64),
    #[error("resolution must be non-zero, got {0} x {1} px")]
    InvalidResolution(u32, u32),
}

/// Ground footprint of one nadir exposure at the given flight height.
///
/// Pinhole similar triangles: footprint = height * sensor / focal length.
/// Resolution does not enter the relation.
pub fn ground_footprint(
    intrinsics: &CameraIntrinsics,
    flight_height_m: f64,
) -> Result<GroundFootprint, FootprintError> {
    if intrinsics.focal_length_mm <= 0.0 {
        return Err(FootprintError::InvalidFocalLength(
            intrinsics.focal_length_mm,
        ));
    }
    if flight_height_m <= 0.0 {
        return Err(FootprintError::InvalidFlightHeight(flight_height_m));
    }
    if intrinsics.sensor_width_mm <= 0.0 || intrinsics.sensor_height_mm <= 0.0 {
        return Err(FootprintError::InvalidSensorSize(
            intrinsics.sensor_width_mm,
            intrinsics.sensor_height_mm,
        ));
    }

    Ok(GroundFootprint {
        width_m: flight_height_m * intrinsics.sensor_width_mm / intrinsics.focal_length_mm,
        height_m: flight_height_m * intrinsics.sensor_height_mm / intrinsics.focal_length_mm,
    })
}

impl CameraIntrinsics {
    /// Ground sample distance at the given flight height, in meters per pixel
    /// along the sensor width and height axes.
    pub fn ground_sample_distance(
        &self,
        flight_height_m: f64,
    ) -> Result<(f64, f64), FootprintError> {
        if self.resolution_width_px == 0 || self.resolution_height_px == 0 {
            return Err(FootprintError::InvalidResolution(
                self.resolution_width_px,
                self.resolution_height_px,
            ));
        }
        let footprint = ground_footprint(self, flight_height_m)?;
        Ok((
            footprint.width_m / self.resolution_width_px as f64,
            footprint.height_m / self.resolution_height_px as f64,
        ))
    }
}
