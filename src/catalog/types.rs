use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema, strum_macros::Display,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ObjectStatus {
    Active,
    Inactive,
}

/// Backend-assigned risk class. Ordered by display priority: `High` sorts first.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    ToSchema,
    strum_macros::Display,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

/// A satellite or debris object as supplied by the catalog service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TrackedObject {
    pub id: String,
    pub name: String,
    pub norad_id: u32,
    pub altitude_km: f64,
    pub inclination_deg: f64,
    pub status: ObjectStatus,
    #[serde(default)]
    pub operator: String,
    #[serde(default)]
    pub country: String,
    pub mass_kg: Option<f64>,
    pub size_m: Option<f64>,
    pub launch_date: Option<NaiveDate>,
    #[serde(default)]
    pub has_propulsion: bool,
}

impl TrackedObject {
    pub fn is_active(&self) -> bool {
        self.status == ObjectStatus::Active
    }
}

/// A predicted close approach between two tracked objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ConjunctionEvent {
    pub id: String,
    pub primary_satellite_id: String,
    pub primary_name: String,
    #[serde(default)]
    pub secondary_satellite_id: Option<String>,
    pub secondary_name: String,
    pub tca: DateTime<Utc>,
    pub miss_distance_m: f64,
    pub probability_collision: f64,
    pub risk_level: RiskLevel,
    pub time_to_tca_hours: f64,
}

/// `GET /api/satellites` envelope of the catalog service.
#[derive(Debug, Clone, Deserialize)]
pub struct SatelliteList {
    pub satellites: Vec<TrackedObject>,
    #[allow(dead_code)]
    pub count: Option<usize>,
    #[allow(dead_code)]
    pub timestamp: Option<DateTime<Utc>>,
}

/// `GET /api/conjunctions` envelope of the catalog service.
#[derive(Debug, Clone, Deserialize)]
pub struct ConjunctionList {
    pub conjunctions: Vec<ConjunctionEvent>,
    #[allow(dead_code)]
    pub count: Option<usize>,
    #[allow(dead_code)]
    pub timestamp: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_catalog_object_ignoring_extra_fields() {
        let json = r#"{
            "id": "sat_iss",
            "name": "ISS (ZARYA)",
            "norad_id": 25544,
            "altitude_km": 420,
            "inclination_deg": 51.6,
            "status": "ACTIVE",
            "operator": "NASA/Roscosmos",
            "country": "International",
            "mass_kg": 419725,
            "size_m": 109,
            "launch_date": "1998-11-20",
            "has_propulsion": true,
            "current_state": { "position": { "x": 1.0, "y": 2.0, "z": 3.0 } }
        }"#;
        let obj: TrackedObject = serde_json::from_str(json).unwrap();
        assert_eq!(obj.norad_id, 25544);
        assert!(obj.is_active());
        assert!(obj.has_propulsion);
        assert_eq!(obj.launch_date, NaiveDate::from_ymd_opt(1998, 11, 20));
    }

    #[test]
    fn risk_orders_high_first() {
        let mut levels = vec![RiskLevel::Low, RiskLevel::High, RiskLevel::Medium];
        levels.sort();
        assert_eq!(levels, vec![RiskLevel::High, RiskLevel::Medium, RiskLevel::Low]);
        assert_eq!(RiskLevel::Medium.to_string(), "MEDIUM");
        assert_eq!(ObjectStatus::Inactive.to_string(), "INACTIVE");
    }
}
