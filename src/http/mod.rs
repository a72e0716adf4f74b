mod auth_endpoints;
mod tracking_endpoints;
mod trip_endpoints;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::config::AppConfig;
use crate::db::DbPool;
use crate::error::Error;
use crate::store::PostgresStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<PostgresStore>,
    pub jwt_secret: String,
    pub token_ttl_hours: i64,
}

pub fn router(state: AppState) -> Router {
    // Mobile clients call from any origin; preflights are answered by the
    // layer itself.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/auth/signup", post(auth_endpoints::sign_up))
        .route("/auth/login", post(auth_endpoints::login))
        .route("/auth/me", get(auth_endpoints::validate_session))
        .route("/trips", get(trip_endpoints::list_trips))
        .route("/tracking/start", post(tracking_endpoints::start_trip))
        .route("/tracking/stop", post(tracking_endpoints::stop_trip))
        .route("/tracking/points", post(tracking_endpoints::upload_points))
        .layer(cors)
        .with_state(state)
}

pub async fn serve(config: &AppConfig, pool: DbPool) -> anyhow::Result<()> {
    let state = AppState {
        store: Arc::new(PostgresStore::new(pool)),
        jwt_secret: config.jwt_secret.clone(),
        token_ttl_hours: config.token_ttl_hours,
    };

    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    info!("Listening on {}", config.listen_addr);
    axum::serve(listener, app).await?;

    Ok(())
}

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    error: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match &self {
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::Unauthorized(_) | Error::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Error::Duplicate(_) | Error::AlreadyCompleted => StatusCode::CONFLICT,
            // An id+owner miss must look the same as a server fault to a
            // non-owner.
            Error::Referential(_)
            | Error::NotFound(_)
            | Error::Storage(_)
            | Error::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = ErrorBody {
            success: false,
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
