//! Mission naming and the persisted flight-path document.

use crate::geo::GeoPoint;
use serde::{Deserialize, Serialize};

/// A named mission as persisted by the surrounding application.
///
/// The document carries exactly two fields: `name` and `flightPath`, an
/// ordered list of lat/lon pairs in flight order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mission {
    pub name: String,
    pub flight_path: Vec<GeoPoint>,
}

impl Mission {
    pub fn new(name: impl Into<String>, flight_path: Vec<GeoPoint>) -> Self {
        Self {
            name: name.into(),
            flight_path,
        }
    }

    /// Serialize to the persisted JSON document.
    pub fn to_json(&self) -> String {
        // Strings and finite floats only; serialization cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Parse a persisted document.
    ///
    /// Malformed input yields None, never a partially constructed mission.
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_is_identity() {
        let mission = Mission::new(
            "campus survey",
            vec![
                GeoPoint::new(46.5187, 6.5628),
                GeoPoint::new(46.5187, 6.5634),
                GeoPoint::new(46.5184, 6.5634),
            ],
        );
        let restored = Mission::from_json(&mission.to_json()).unwrap();
        assert_eq!(restored, mission);
    }

    #[test]
    fn document_uses_the_persisted_field_names() {
        let mission = Mission::new("m", vec![GeoPoint::new(1.0, 2.0)]);
        let raw = mission.to_json();
        assert!(raw.contains("\"name\""));
        assert!(raw.contains("\"flightPath\""));
        assert!(raw.contains("\"lat\""));
        assert!(raw.contains("\"lon\""));
    }

    #[test]
    fn malformed_documents_parse_to_none() {
        assert!(Mission::from_json("malformed").is_none());
        assert!(Mission::from_json("{}").is_none());
        assert!(Mission::from_json("{\"name\":3,\"flightPath\":[]}").is_none());
        assert!(Mission::from_json("{\"name\":\"m\",\"flightPath\":[{\"lat\":1.0}]}").is_none());
    }
}
