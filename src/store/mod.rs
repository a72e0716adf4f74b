use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::Result;
use crate::models::point::GpsPoint;
use crate::models::trip::{Trip, TripStatus};
use crate::models::user::User;

#[cfg(test)]
use mockall::automock;

mod postgres;

pub use postgres::PostgresStore;

#[cfg_attr(test, automock)]
pub trait UserStore: Send + Sync {
    async fn create_user(&self, user: User) -> Result<()>;

    /// Looks the user up by email or username in a single query.
    async fn find_user_by_identifier(&self, identifier: String) -> Result<Option<User>>;

    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>>;
}

#[cfg_attr(test, automock)]
pub trait TripStore: Send + Sync {
    async fn insert_trip(&self, trip: Trip) -> Result<()>;

    /// Transitions an active trip to completed in one conditional update.
    /// The predicate carries the ownership check; a completed trip fails
    /// with `AlreadyCompleted`, a missing or foreign one with `NotFound`.
    async fn complete_trip(
        &self,
        trip_id: Uuid,
        user_id: Uuid,
        end_time: DateTime<Utc>,
    ) -> Result<Trip>;

    async fn trip_status(&self, trip_id: Uuid, user_id: Uuid) -> Result<Option<TripStatus>>;

    /// All trips owned by the user, newest first, routes left empty.
    async fn trips_by_user(&self, user_id: Uuid) -> Result<Vec<Trip>>;
}

#[cfg_attr(test, automock)]
pub trait PointStore: Send + Sync {
    /// Persists a batch in a single transaction: every point or none.
    /// Returns false when `batch_id` was already registered for the trip,
    /// in which case nothing is written.
    async fn insert_batch(
        &self,
        trip_id: Uuid,
        batch_id: Option<Uuid>,
        points: Vec<GpsPoint>,
    ) -> Result<bool>;

    /// Every sample of the trip, ascending by sample timestamp.
    async fn points_by_trip(&self, trip_id: Uuid) -> Result<Vec<GpsPoint>>;
}
