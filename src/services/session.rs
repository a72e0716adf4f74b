use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::Result;
use crate::models::trip::{Trip, TripStatus, Vehicle};
use crate::store::{PointStore, TripStore};

/// Opens a trip session. The start time is the server clock, never a
/// client-supplied value, so clients can reconcile local timers against
/// the returned timestamp.
pub async fn start_trip(
    trips: Arc<impl TripStore>,
    user_id: Uuid,
    name: Option<String>,
    source: Option<String>,
    destination: Option<String>,
    vehicle: Option<Vehicle>,
) -> Result<(Uuid, DateTime<Utc>)> {
    let start_time = Utc::now();
    let name = name.unwrap_or_else(|| format!("Trip {}", start_time.format("%Y-%m-%d")));

    let trip = Trip {
        id: Uuid::new_v4(),
        user_id,
        name,
        start_time,
        end_time: None,
        distance: 0.0,
        duration: None,
        status: TripStatus::Active,
        route: Vec::new(),
        source,
        destination,
        vehicle,
    };

    let trip_id = trip.id;
    trips.insert_trip(trip).await?;
    info!("Started trip {} for user {}", trip_id, user_id);

    Ok((trip_id, start_time))
}

/// Closes a trip session: one guarded update flips the trip to completed
/// and computes its duration, then the route is read back in sample order.
pub async fn stop_trip(
    trips: Arc<impl TripStore>,
    points: Arc<impl PointStore>,
    user_id: Uuid,
    trip_id: Uuid,
) -> Result<Trip> {
    let end_time = Utc::now();
    let mut trip = trips.complete_trip(trip_id, user_id, end_time).await?;
    info!("Completed trip {} for user {}", trip_id, user_id);

    // Completion must not be undone by a read-side fault; degrade to an
    // empty route instead.
    let mut route = match points.points_by_trip(trip_id).await {
        Ok(route) => route,
        Err(e) => {
            warn!("Failed to load route for trip {}: {}", trip_id, e);
            Vec::new()
        }
    };
    route.sort_by_key(|p| p.timestamp);
    trip.route = route;

    Ok(trip)
}
