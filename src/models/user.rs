use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub username: String,

    #[serde(skip_serializing)] // never send the hash in API responses
    #[serde(default)]
    pub password_hash: String,

    pub created_at: DateTime<Utc>,
}
