use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::point::GpsPoint;
use crate::models::trip::TripStatus;
use crate::store::{PointStore, TripStore};

/// Accepts one telemetry batch for an active trip. The caller-asserted
/// (trip, user) pairing is re-derived from the trip store before anything
/// is written, mirroring the ownership predicate of the stop update.
pub async fn upload_points(
    trips: Arc<impl TripStore>,
    points: Arc<impl PointStore>,
    user_id: Uuid,
    trip_id: Uuid,
    batch_id: Option<Uuid>,
    batch: Vec<GpsPoint>,
) -> Result<()> {
    match trips.trip_status(trip_id, user_id).await? {
        Some(TripStatus::Active) => {}
        Some(TripStatus::Completed) => return Err(Error::AlreadyCompleted),
        None => return Err(Error::NotFound("Trip not found".to_string())),
    }

    if batch.is_empty() {
        return Ok(());
    }

    let count = batch.len();
    let applied = points.insert_batch(trip_id, batch_id, batch).await?;
    if applied {
        info!("Stored {} points for trip {}", count, trip_id);
    } else {
        info!("Skipped replayed batch for trip {}", trip_id);
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use chrono::Utc;
    use uuid::Uuid;

    use crate::error::Error;
    use crate::models::point::GpsPoint;
    use crate::models::trip::TripStatus;
    use crate::services::ingest::upload_points;
    use crate::store::{MockPointStore, MockTripStore};

    fn batch_of(n: usize) -> Vec<GpsPoint> {
        (0..n)
            .map(|i| GpsPoint {
                latitude: 4.6 + i as f64 * 0.001,
                longitude: -74.08,
                altitude: Some(2600.0),
                accuracy: Some(5.0),
                speed: None,
                heading: None,
                timestamp: Utc::now(),
            })
            .collect()
    }

    fn active_trip_store() -> MockTripStore {
        let mut trips = MockTripStore::new();
        trips
            .expect_trip_status()
            .returning(|_, _| Ok(Some(TripStatus::Active)));
        trips
    }

    #[tokio::test]
    async fn whole_batch_is_handed_to_the_store_at_once() {
        let trips = active_trip_store();

        let mut points = MockPointStore::new();
        points
            .expect_insert_batch()
            .withf(|_, batch_id, batch| batch_id.is_none() && batch.len() == 3)
            .once()
            .returning(|_, _, _| Ok(true));

        upload_points(
            Arc::new(trips),
            Arc::new(points),
            Uuid::new_v4(),
            Uuid::new_v4(),
            None,
            batch_of(3),
        )
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn empty_batch_is_a_noop_success() {
        let trips = active_trip_store();
        // No expectation on the point store: nothing may be written.
        let points = MockPointStore::new();

        upload_points(
            Arc::new(trips),
            Arc::new(points),
            Uuid::new_v4(),
            Uuid::new_v4(),
            None,
            Vec::new(),
        )
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn unknown_or_foreign_trip_is_rejected_before_writing() {
        let mut trips = MockTripStore::new();
        trips.expect_trip_status().returning(|_, _| Ok(None));

        let points = MockPointStore::new();

        let result = upload_points(
            Arc::new(trips),
            Arc::new(points),
            Uuid::new_v4(),
            Uuid::new_v4(),
            None,
            batch_of(2),
        )
        .await;

        assert!(matches!(result, Err(Error::NotFound(_))));
    }

    #[tokio::test]
    async fn completed_trip_accepts_no_more_points() {
        let mut trips = MockTripStore::new();
        trips
            .expect_trip_status()
            .returning(|_, _| Ok(Some(TripStatus::Completed)));

        let points = MockPointStore::new();

        let result = upload_points(
            Arc::new(trips),
            Arc::new(points),
            Uuid::new_v4(),
            Uuid::new_v4(),
            None,
            batch_of(1),
        )
        .await;

        assert!(matches!(result, Err(Error::AlreadyCompleted)));
    }

    #[tokio::test]
    async fn replayed_batch_id_still_reports_success() {
        let trips = active_trip_store();
        let batch_id = Uuid::new_v4();

        let mut points = MockPointStore::new();
        points
            .expect_insert_batch()
            .withf(move |_, id, _| *id == Some(batch_id))
            .once()
            .returning(|_, _, _| Ok(false));

        upload_points(
            Arc::new(trips),
            Arc::new(points),
            Uuid::new_v4(),
            Uuid::new_v4(),
            Some(batch_id),
            batch_of(2),
        )
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn storage_failure_surfaces_to_the_caller() {
        let trips = active_trip_store();

        let mut points = MockPointStore::new();
        points
            .expect_insert_batch()
            .returning(|_, _, _| Err(Error::Storage(sqlx::Error::PoolTimedOut)));

        let result = upload_points(
            Arc::new(trips),
            Arc::new(points),
            Uuid::new_v4(),
            Uuid::new_v4(),
            None,
            batch_of(5),
        )
        .await;

        assert!(matches!(result, Err(Error::Storage(_))));
    }
}
