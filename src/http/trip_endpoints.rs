use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::error::Error;
use crate::http::AppState;
use crate::services::trips;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTripsQuery {
    #[serde(default)]
    pub user_id: Option<Uuid>,
}

pub async fn list_trips(
    State(state): State<AppState>,
    Query(query): Query<ListTripsQuery>,
) -> Response {
    let Some(user_id) = query.user_id else {
        return Error::Validation("userId is required".to_string()).into_response();
    };

    match trips::list_trips(state.store.clone(), user_id).await {
        Ok(list) => Json(list).into_response(),
        Err(err) => err.into_response(),
    }
}
