use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::models::point::GpsPoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TripStatus {
    Active,
    Completed,
}

impl fmt::Display for TripStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TripStatus::Active => write!(f, "active"),
            TripStatus::Completed => write!(f, "completed"),
        }
    }
}

impl FromStr for TripStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(TripStatus::Active),
            "completed" => Ok(TripStatus::Completed),
            other => Err(format!("unknown trip status '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub make: String,
    pub model: String,
    pub year: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub distance: f64,
    pub duration: Option<f64>,
    pub status: TripStatus,
    /// Populated only by the stop operation; listings leave it empty.
    #[serde(default)]
    pub route: Vec<GpsPoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub vehicle: Option<Vehicle>,
}

#[cfg(test)]
mod test {
    use chrono::{Duration, Utc};
    use serde_json::json;
    use uuid::Uuid;

    use super::{Trip, TripStatus, Vehicle};

    fn active_trip() -> Trip {
        Trip {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            name: "Trip 2026-08-08".to_string(),
            start_time: Utc::now(),
            end_time: None,
            distance: 0.0,
            duration: None,
            status: TripStatus::Active,
            route: Vec::new(),
            source: None,
            destination: None,
            vehicle: None,
        }
    }

    #[test]
    fn active_trip_serializes_camel_case_with_empty_route() {
        let trip = active_trip();
        let value = serde_json::to_value(&trip).unwrap();

        assert_eq!(value["userId"], json!(trip.user_id.to_string()));
        assert_eq!(value["status"], json!("active"));
        assert_eq!(value["route"], json!([]));
        assert_eq!(value["endTime"], serde_json::Value::Null);
        assert_eq!(value["duration"], serde_json::Value::Null);
        // Optional labels stay off the wire entirely when absent.
        assert!(value.get("source").is_none());
        assert!(value.get("destination").is_none());
        assert!(value.get("vehicle").is_none());
    }

    #[test]
    fn completed_trip_carries_end_time_duration_and_vehicle() {
        let mut trip = active_trip();
        trip.end_time = Some(trip.start_time + Duration::seconds(90));
        trip.duration = Some(90.0);
        trip.status = TripStatus::Completed;
        trip.vehicle = Some(Vehicle {
            make: "Mazda".to_string(),
            model: "CX-30".to_string(),
            year: 2023,
        });

        let value = serde_json::to_value(&trip).unwrap();

        assert_eq!(value["status"], json!("completed"));
        assert_eq!(value["duration"], json!(90.0));
        assert!(value["endTime"].is_string());
        assert_eq!(value["vehicle"]["make"], json!("Mazda"));
        assert_eq!(value["vehicle"]["year"], json!(2023));
    }

    #[test]
    fn status_labels_round_trip_through_storage_text() {
        assert_eq!("active".parse::<TripStatus>().unwrap(), TripStatus::Active);
        assert_eq!(
            "completed".parse::<TripStatus>().unwrap(),
            TripStatus::Completed
        );
        assert_eq!(TripStatus::Completed.to_string(), "completed");
        assert!("paused".parse::<TripStatus>().is_err());
    }
}
