use std::sync::Arc;

use bcrypt::{hash, verify, DEFAULT_COST};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::user::User;
use crate::store::UserStore;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub exp: usize,
    pub sub: String,
}

/// Signed, expiring session token; the subject is the user id.
pub fn issue_token(user_id: Uuid, jwt_secret: &str, ttl_hours: i64) -> Result<String> {
    let claims = Claims {
        exp: (Utc::now() + Duration::hours(ttl_hours)).timestamp() as usize,
        sub: user_id.to_string(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_secret.as_ref()),
    )
    .map_err(|e| Error::Internal(format!("failed to encode token: {}", e)))
}

pub async fn sign_up(
    users: Arc<impl UserStore>,
    email: String,
    username: String,
    password: String,
    jwt_secret: &str,
    ttl_hours: i64,
) -> Result<(User, String)> {
    if email.trim().is_empty() || username.trim().is_empty() || password.is_empty() {
        return Err(Error::Validation(
            "email, username and password are required".to_string(),
        ));
    }

    let password_hash = hash(password, DEFAULT_COST)?;

    let user = User {
        id: Uuid::new_v4(),
        email,
        username,
        password_hash,
        created_at: Utc::now(),
    };

    users.create_user(user.clone()).await?;
    let token = issue_token(user.id, jwt_secret, ttl_hours)?;

    Ok((user, token))
}

pub async fn login(
    users: Arc<impl UserStore>,
    email_or_username: String,
    password: String,
    jwt_secret: &str,
    ttl_hours: i64,
) -> Result<(User, String)> {
    let user = users
        .find_user_by_identifier(email_or_username)
        .await?
        .ok_or(Error::InvalidCredentials)?;

    if !verify(password, &user.password_hash)? {
        return Err(Error::InvalidCredentials);
    }

    let token = issue_token(user.id, jwt_secret, ttl_hours)?;
    Ok((user, token))
}

pub async fn validate_session(
    users: Arc<impl UserStore>,
    token: &str,
    jwt_secret: &str,
) -> Result<(User, String)> {
    let claims = decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_secret.as_ref()),
        &Validation::default(),
    )
    .map_err(|_| Error::Unauthorized("Invalid token".to_string()))?
    .claims;

    let user_id = claims
        .sub
        .parse::<Uuid>()
        .map_err(|_| Error::Unauthorized("Invalid token".to_string()))?;

    let user = users
        .find_user_by_id(user_id)
        .await?
        .ok_or_else(|| Error::Unauthorized("Invalid token".to_string()))?;

    Ok((user, token.to_string()))
}
