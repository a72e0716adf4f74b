use std::sync::Arc;

use uuid::Uuid;

use crate::error::Result;
use crate::models::trip::Trip;
use crate::store::TripStore;

/// Lists a user's trips newest-first. Routes stay empty in listings;
/// only the stop response carries per-point detail.
pub async fn list_trips(trips: Arc<impl TripStore>, user_id: Uuid) -> Result<Vec<Trip>> {
    trips.trips_by_user(user_id).await
}
