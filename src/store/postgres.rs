use chrono::{DateTime, Utc};
use sqlx::FromRow;
use tracing::warn;
use uuid::Uuid;

use crate::db::{queries, DbPool};
use crate::error::{Error, Result};
use crate::models::point::GpsPoint;
use crate::models::trip::{Trip, TripStatus, Vehicle};
use crate::models::user::User;
use crate::store::{PointStore, TripStore, UserStore};

#[derive(Clone)]
pub struct PostgresStore {
    pool: DbPool,
}

impl PostgresStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Flat trip row as stored; the vehicle triple is folded into an
/// `Option<Vehicle>` on conversion.
#[derive(Debug, FromRow)]
struct TripRow {
    id: Uuid,
    user_id: Uuid,
    name: String,
    start_time: DateTime<Utc>,
    end_time: Option<DateTime<Utc>>,
    distance: f64,
    duration: Option<f64>,
    status: String,
    source: Option<String>,
    destination: Option<String>,
    vehicle_make: Option<String>,
    vehicle_model: Option<String>,
    vehicle_year: Option<i32>,
}

impl TryFrom<TripRow> for Trip {
    type Error = Error;

    fn try_from(row: TripRow) -> Result<Trip> {
        let status = row
            .status
            .parse::<TripStatus>()
            .map_err(Error::Internal)?;

        let vehicle = match (row.vehicle_make, row.vehicle_model, row.vehicle_year) {
            (Some(make), Some(model), Some(year)) => Some(Vehicle { make, model, year }),
            _ => None,
        };

        Ok(Trip {
            id: row.id,
            user_id: row.user_id,
            name: row.name,
            start_time: row.start_time,
            end_time: row.end_time,
            distance: row.distance,
            duration: row.duration,
            status,
            route: Vec::new(),
            source: row.source,
            destination: row.destination,
            vehicle,
        })
    }
}

impl UserStore for PostgresStore {
    async fn create_user(&self, user: User) -> Result<()> {
        sqlx::query(queries::INSERT_USER)
            .bind(user.id)
            .bind(&user.email)
            .bind(&user.username)
            .bind(&user.password_hash)
            .bind(user.created_at)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn find_user_by_identifier(&self, identifier: String) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(queries::SELECT_USER_BY_IDENTIFIER)
            .bind(identifier)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(queries::SELECT_USER_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }
}

impl TripStore for PostgresStore {
    async fn insert_trip(&self, trip: Trip) -> Result<()> {
        let (vehicle_make, vehicle_model, vehicle_year) = match trip.vehicle {
            Some(v) => (Some(v.make), Some(v.model), Some(v.year)),
            None => (None, None, None),
        };

        sqlx::query(queries::INSERT_TRIP)
            .bind(trip.id)
            .bind(trip.user_id)
            .bind(&trip.name)
            .bind(trip.start_time)
            .bind(trip.status.to_string())
            .bind(&trip.source)
            .bind(&trip.destination)
            .bind(vehicle_make)
            .bind(vehicle_model)
            .bind(vehicle_year)
            .bind(Utc::now())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn complete_trip(
        &self,
        trip_id: Uuid,
        user_id: Uuid,
        end_time: DateTime<Utc>,
    ) -> Result<Trip> {
        let row = sqlx::query_as::<_, TripRow>(queries::COMPLETE_TRIP)
            .bind(end_time)
            .bind(trip_id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => Trip::try_from(row),
            // Zero rows matched: tell an exhausted trip apart from a
            // missing or foreign one so callers can retry safely.
            None => match self.trip_status(trip_id, user_id).await? {
                Some(TripStatus::Completed) => Err(Error::AlreadyCompleted),
                _ => Err(Error::NotFound("Trip not found".to_string())),
            },
        }
    }

    async fn trip_status(&self, trip_id: Uuid, user_id: Uuid) -> Result<Option<TripStatus>> {
        let status: Option<String> = sqlx::query_scalar(queries::SELECT_TRIP_STATUS)
            .bind(trip_id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        match status {
            Some(s) => {
                let parsed = s.parse::<TripStatus>().map_err(Error::Internal)?;
                Ok(Some(parsed))
            }
            None => Ok(None),
        }
    }

    async fn trips_by_user(&self, user_id: Uuid) -> Result<Vec<Trip>> {
        let rows = sqlx::query(queries::SELECT_TRIPS_BY_USER)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;

        // One bad row must not take the whole listing down.
        let mut trips = Vec::with_capacity(rows.len());
        for row in rows {
            let trip = TripRow::from_row(&row)
                .map_err(Error::from)
                .and_then(Trip::try_from);
            match trip {
                Ok(trip) => trips.push(trip),
                Err(e) => warn!("Skipping undecodable trip row for user {}: {}", user_id, e),
            }
        }
        Ok(trips)
    }
}

impl PointStore for PostgresStore {
    async fn insert_batch(
        &self,
        trip_id: Uuid,
        batch_id: Option<Uuid>,
        points: Vec<GpsPoint>,
    ) -> Result<bool> {
        let mut tx = self.pool.begin().await?;

        if let Some(batch_id) = batch_id {
            let registered = sqlx::query(queries::INSERT_POINT_BATCH)
                .bind(trip_id)
                .bind(batch_id)
                .execute(&mut *tx)
                .await?;
            if registered.rows_affected() == 0 {
                // Batch already applied; skip instead of duplicating rows.
                tx.rollback().await?;
                return Ok(false);
            }
        }

        for point in &points {
            sqlx::query(queries::INSERT_POINT)
                .bind(trip_id)
                .bind(point.latitude)
                .bind(point.longitude)
                .bind(point.altitude)
                .bind(point.accuracy)
                .bind(point.speed)
                .bind(point.heading)
                .bind(point.timestamp)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(true)
    }

    async fn points_by_trip(&self, trip_id: Uuid) -> Result<Vec<GpsPoint>> {
        let points = sqlx::query_as::<_, GpsPoint>(queries::SELECT_POINTS_BY_TRIP)
            .bind(trip_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(points)
    }
}
