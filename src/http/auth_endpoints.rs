use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::http::AppState;
use crate::models::user::User;
use crate::services::auth;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    pub email: String,
    pub username: String,
    pub password: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email_or_username: String,
    pub password: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AuthResponse {
    fn ok(user: User, token: String) -> Self {
        Self {
            success: true,
            user: Some(user),
            token: Some(token),
            error: None,
        }
    }

    fn failed(message: &str) -> Self {
        Self {
            success: false,
            user: None,
            token: None,
            error: Some(message.to_string()),
        }
    }
}

pub async fn sign_up(State(state): State<AppState>, Json(req): Json<SignUpRequest>) -> Response {
    match auth::sign_up(
        state.store.clone(),
        req.email,
        req.username,
        req.password,
        &state.jwt_secret,
        state.token_ttl_hours,
    )
    .await
    {
        Ok((user, token)) => Json(AuthResponse::ok(user, token)).into_response(),
        Err(Error::Duplicate(_)) => {
            Json(AuthResponse::failed("Email or username already exists")).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub async fn login(State(state): State<AppState>, Json(req): Json<LoginRequest>) -> Response {
    match auth::login(
        state.store.clone(),
        req.email_or_username,
        req.password,
        &state.jwt_secret,
        state.token_ttl_hours,
    )
    .await
    {
        Ok((user, token)) => Json(AuthResponse::ok(user, token)).into_response(),
        Err(Error::InvalidCredentials) => {
            Json(AuthResponse::failed("Invalid credentials")).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub async fn validate_session(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let token = match headers.get("authorization").and_then(|v| v.to_str().ok()) {
        Some(raw) => raw.strip_prefix("Bearer ").unwrap_or(raw).trim().to_string(),
        None => {
            return Error::Unauthorized("Missing authorization token".to_string()).into_response()
        }
    };

    match auth::validate_session(state.store.clone(), &token, &state.jwt_secret).await {
        Ok((user, token)) => Json(AuthResponse::ok(user, token)).into_response(),
        Err(err) => err.into_response(),
    }
}
