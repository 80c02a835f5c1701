use axum::Json;
use chrono::{Duration, SecondsFormat, Utc};

use crate::api::extract::LenientJson;
use crate::api::payloads::{
    MessageResponse, SUCCESS, ToggleFeatureRequest, UpgradePremiumRequest, UpgradePremiumResponse,
};
use crate::engine::catalogue::PREMIUM_FEATURES;

const PREMIUM_PERIOD_DAYS: i64 = 30;

/// Acknowledges the toggle; nothing is persisted.
pub async fn toggle_feature(
    LenientJson(payload): LenientJson<ToggleFeatureRequest>,
) -> Json<MessageResponse> {
    let state = if payload.enabled { "enabled" } else { "disabled" };
    Json(MessageResponse {
        status: SUCCESS,
        message: format!("{} {state}", payload.feature),
    })
}

pub async fn upgrade_premium(
    LenientJson(payload): LenientJson<UpgradePremiumRequest>,
) -> Json<UpgradePremiumResponse> {
    let valid_until = Utc::now() + Duration::days(PREMIUM_PERIOD_DAYS);
    Json(UpgradePremiumResponse {
        status: SUCCESS,
        message: format!("Upgraded to {} premium", payload.plan),
        features: PREMIUM_FEATURES,
        valid_until: valid_until.to_rfc3339_opts(SecondsFormat::Micros, true),
    })
}
