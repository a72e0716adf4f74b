use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::http::AppState;
use crate::models::point::GpsPoint;
use crate::models::trip::{Trip, Vehicle};
use crate::services::{ingest, session};

#[derive(Deserialize, Default)]
pub struct TripMetadata {
    pub name: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartTripRequest {
    pub user_id: Uuid,
    #[serde(default)]
    pub metadata: Option<TripMetadata>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default)]
    pub vehicle: Option<Vehicle>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartTripResponse {
    pub success: bool,
    pub trip_id: Uuid,
    pub start_time: DateTime<Utc>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopTripRequest {
    pub user_id: Uuid,
    pub trip_id: Uuid,
}

#[derive(Serialize)]
pub struct StopTripResponse {
    pub success: bool,
    pub trip: Trip,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadPointsRequest {
    pub user_id: Uuid,
    pub trip_id: Uuid,
    #[serde(default)]
    pub batch_id: Option<Uuid>,
    pub points: Vec<GpsPoint>,
}

pub async fn start_trip(State(state): State<AppState>, Json(req): Json<StartTripRequest>) -> Response {
    let name = req.metadata.and_then(|m| m.name);

    match session::start_trip(
        state.store.clone(),
        req.user_id,
        name,
        req.source,
        req.destination,
        req.vehicle,
    )
    .await
    {
        Ok((trip_id, start_time)) => Json(StartTripResponse {
            success: true,
            trip_id,
            start_time,
        })
        .into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn stop_trip(State(state): State<AppState>, Json(req): Json<StopTripRequest>) -> Response {
    match session::stop_trip(
        state.store.clone(),
        state.store.clone(),
        req.user_id,
        req.trip_id,
    )
    .await
    {
        Ok(trip) => Json(StopTripResponse {
            success: true,
            trip,
        })
        .into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn upload_points(
    State(state): State<AppState>,
    Json(req): Json<UploadPointsRequest>,
) -> Response {
    match ingest::upload_points(
        state.store.clone(),
        state.store.clone(),
        req.user_id,
        req.trip_id,
        req.batch_id,
        req.points,
    )
    .await
    {
        Ok(()) => StatusCode::OK.into_response(),
        Err(err) => err.into_response(),
    }
}
