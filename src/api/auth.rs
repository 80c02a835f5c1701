use axum::{Json, extract::State};
use std::sync::Arc;

use crate::api::error::ApiError;
use crate::api::extract::LenientJson;
use crate::api::payloads::{
    LoginRequest, LoginResponse, SUCCESS, SessionUser, SignupRequest, SignupResponse,
};
use crate::api::server::AppState;

// Demo credentials baked into the mobile app's test build. Compared in
// plaintext: this is a mock, not an authentication system.
const DEMO_USERNAME: &str = "admin";
const DEMO_PASSWORD: &str = "editnova2025";

pub async fn login(
    State(state): State<Arc<AppState>>,
    LenientJson(payload): LenientJson<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    if payload.username != DEMO_USERNAME || payload.password != DEMO_PASSWORD {
        tracing::warn!(username = %payload.username, "login rejected");
        return Err(ApiError::InvalidCredentials);
    }

    let token = state.store.create_session(&payload.username).await?;

    Ok(Json(LoginResponse {
        status: SUCCESS,
        token,
        user: SessionUser {
            username: payload.username,
            is_premium: true,
        },
    }))
}

/// Registers whatever it is given; no format or strength checks.
pub async fn signup(
    State(state): State<Arc<AppState>>,
    LenientJson(payload): LenientJson<SignupRequest>,
) -> Result<Json<SignupResponse>, ApiError> {
    let user_id = state
        .store
        .create_user(&payload.username, &payload.email, &payload.password)
        .await?;

    Ok(Json(SignupResponse {
        status: SUCCESS,
        message: "Account created successfully".to_string(),
        user_id,
    }))
}
