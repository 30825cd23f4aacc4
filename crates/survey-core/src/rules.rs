//! Operational limits for survey mission planning.

use serde::{Deserialize, Serialize};

/// Configuration for mission-planning limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyRules {
    /// Maximum allowed flight height in meters
    pub max_flight_height_m: f64,
    /// Minimum allowed flight height in meters
    pub min_flight_height_m: f64,
    /// Maximum waypoints a single mission may contain
    pub max_waypoints: usize,
}

impl Default for SurveyRules {
    fn default() -> Self {
        Self {
            max_flight_height_m: 121.0, // FAA Part 107 limit (~400ft)
            min_flight_height_m: 5.0,
            max_waypoints: 99,
        }
    }
}

impl SurveyRules {
    /// Check a requested flight height against the configured band.
    pub fn allows_flight_height(&self, flight_height_m: f64) -> bool {
        flight_height_m >= self.min_flight_height_m && flight_height_m <= self.max_flight_height_m
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_band_tracks_faa_limit() {
        let rules = SurveyRules::default();
        assert!(rules.allows_flight_height(50.0));
        assert!(!rules.allows_flight_height(150.0));
        assert!(!rules.allows_flight_height(1.0));
    }
}
