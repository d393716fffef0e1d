use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};

use crate::auth::{hash_password, verify_password, AuthUser};
use crate::error::{ApiError, ApiResult};
use crate::main_lib::AppState;
use crate::models::{AuthResponse, Credentials, UserEnvelope};

/// Credential endpoints; reachable without a token.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
}

/// Endpoints about the authenticated caller; mounted behind the auth
/// middleware.
pub fn protected_router() -> Router<Arc<AppState>> {
    Router::new().route("/auth/me", get(me))
}

async fn register(
    State(state): State<Arc<AppState>>,
    Json(credentials): Json<Credentials>,
) -> ApiResult<(StatusCode, Json<AuthResponse>)> {
    if credentials.password.is_empty() {
        return Err(ApiError::bad_request("Email and password are required"));
    }

    let password_hash = hash_password(&credentials.password)?;
    let user = state
        .user_service
        .register(&credentials.email, password_hash)
        .await?;

    let token = state.token_issuer.issue(&user.id)?;
    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token,
            user: user.into(),
        }),
    ))
}

async fn login(
    State(state): State<Arc<AppState>>,
    Json(credentials): Json<Credentials>,
) -> ApiResult<Json<AuthResponse>> {
    if credentials.email.is_empty() || credentials.password.is_empty() {
        return Err(ApiError::bad_request("Email and password are required"));
    }

    // A wrong email and a wrong password produce the same response.
    let user = state
        .user_service
        .find_by_email(&credentials.email)?
        .filter(|user| verify_password(&credentials.password, &user.password_hash))
        .ok_or_else(|| ApiError::unauthorized("Invalid email or password"))?;

    let token = state.token_issuer.issue(&user.id)?;
    Ok(Json(AuthResponse {
        token,
        user: user.into(),
    }))
}

async fn me(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
) -> ApiResult<Json<UserEnvelope>> {
    let user = state
        .user_service
        .find_by_id(&auth.user_id)?
        .ok_or_else(|| ApiError::not_found("User not found"))?;
    Ok(Json(UserEnvelope { user: user.into() }))
}
