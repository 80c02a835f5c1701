use std::sync::Arc;

use axum::Json;
use axum::extract::State;

use crate::api::payloads::AchievementsResponse;
use crate::api::server::AppState;
use crate::engine::catalogue::{ACHIEVEMENTS, DEMO_PROFILE, Profile, TEMPLATES, Templates};
use crate::store::models::UsageStats;

pub async fn usage(State(state): State<Arc<AppState>>) -> Json<UsageStats> {
    Json(state.store.usage().await)
}

pub async fn templates() -> Json<Templates> {
    Json(TEMPLATES)
}

pub async fn achievements() -> Json<AchievementsResponse> {
    Json(AchievementsResponse {
        achievements: ACHIEVEMENTS,
    })
}

// Not tied to any session; every caller gets the demo account.
pub async fn profile() -> Json<Profile> {
    Json(DEMO_PROFILE)
}
