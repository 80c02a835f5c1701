//! Request and response bodies for the mock endpoints.
//!
//! Request structs are read field by field through [`FromFields`]; each
//! `from_fields` carries the per-route fallbacks used when a field is absent,
//! null, or unusable.

use serde::Serialize;
use serde_json::Value;

use crate::api::extract::{Fields, FromFields};

pub const SUCCESS: &str = "success";

// ─── Requests ────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl FromFields for LoginRequest {
    fn from_fields(fields: &Fields) -> Self {
        Self {
            username: fields.text("username", ""),
            password: fields.text("password", ""),
        }
    }
}

#[derive(Debug)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl FromFields for SignupRequest {
    fn from_fields(fields: &Fields) -> Self {
        Self {
            username: fields.text("username", ""),
            email: fields.text("email", ""),
            password: fields.text("password", ""),
        }
    }
}

#[derive(Debug)]
pub struct ToggleFeatureRequest {
    pub feature: String,
    pub enabled: bool,
}

impl FromFields for ToggleFeatureRequest {
    fn from_fields(fields: &Fields) -> Self {
        Self {
            feature: fields.text("feature", "unknown"),
            enabled: fields.flag("enabled", false),
        }
    }
}

#[derive(Debug)]
pub struct UploadImageRequest {
    pub filename: String,
    pub size: u64,
}

impl FromFields for UploadImageRequest {
    fn from_fields(fields: &Fields) -> Self {
        Self {
            filename: fields.text("filename", "image.jpg"),
            size: fields.count("size", 1_024_000),
        }
    }
}

#[derive(Debug)]
pub struct ProcessImageRequest {
    pub operation: String,
    pub image_id: String,
}

impl FromFields for ProcessImageRequest {
    fn from_fields(fields: &Fields) -> Self {
        Self {
            operation: fields.text("operation", "enhance"),
            image_id: fields.text("imageId", ""),
        }
    }
}

/// Body shared by endpoints that only take an image id.
#[derive(Debug)]
pub struct ImageRef {
    pub image_id: String,
}

impl FromFields for ImageRef {
    fn from_fields(fields: &Fields) -> Self {
        Self {
            image_id: fields.text("imageId", ""),
        }
    }
}

#[derive(Debug)]
pub struct ScanFileRequest {
    pub filename: String,
}

impl FromFields for ScanFileRequest {
    fn from_fields(fields: &Fields) -> Self {
        Self {
            filename: fields.text("filename", "document.pdf"),
        }
    }
}

#[derive(Debug)]
pub struct GenerateArtRequest {
    pub description: String,
    pub style: String,
}

impl FromFields for GenerateArtRequest {
    fn from_fields(fields: &Fields) -> Self {
        Self {
            description: fields.text("description", "abstract art"),
            style: fields.text("style", "modern"),
        }
    }
}

#[derive(Debug)]
pub struct CreatePosterRequest {
    pub theme: String,
    pub text: String,
}

impl FromFields for CreatePosterRequest {
    fn from_fields(fields: &Fields) -> Self {
        Self {
            theme: fields.text("theme", "modern"),
            text: fields.text("text", "Sample Poster"),
        }
    }
}

#[derive(Debug)]
pub struct TranslateRequest {
    pub text: String,
    pub source_lang: String,
    pub target_lang: String,
}

impl FromFields for TranslateRequest {
    fn from_fields(fields: &Fields) -> Self {
        Self {
            text: fields.text("text", ""),
            source_lang: fields.text("sourceLang", "en"),
            target_lang: fields.text("targetLang", "es"),
        }
    }
}

#[derive(Debug)]
pub struct GenerateQrRequest {
    pub text: String,
    /// Sent as `type`.
    pub kind: String,
}

impl FromFields for GenerateQrRequest {
    fn from_fields(fields: &Fields) -> Self {
        Self {
            text: fields.text("text", "https://editnova.com"),
            kind: fields.text("type", "url"),
        }
    }
}

#[derive(Debug)]
pub struct BatchProcessRequest {
    /// Ids are echoed back verbatim, so any JSON value is accepted.
    pub file_ids: Vec<Value>,
    pub operation: String,
}

impl FromFields for BatchProcessRequest {
    fn from_fields(fields: &Fields) -> Self {
        Self {
            file_ids: fields.list("fileIds"),
            operation: fields.text("operation", "resize"),
        }
    }
}

#[derive(Debug)]
pub struct SocialShareRequest {
    pub platform: String,
    pub image_id: String,
}

impl FromFields for SocialShareRequest {
    fn from_fields(fields: &Fields) -> Self {
        Self {
            platform: fields.text("platform", "instagram"),
            image_id: fields.text("imageId", ""),
        }
    }
}

#[derive(Debug)]
pub struct UpgradePremiumRequest {
    pub plan: String,
}

impl FromFields for UpgradePremiumRequest {
    fn from_fields(fields: &Fields) -> Self {
        Self {
            plan: fields.text("plan", "monthly"),
        }
    }
}

// ─── Responses ───────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct AchievementsResponse {
    pub achievements: &'static [crate::engine::catalogue::Achievement],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub username: String,
    pub is_premium: bool,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub status: &'static str,
    pub token: String,
    pub user: SessionUser,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupResponse {
    pub status: &'static str,
    pub message: String,
    pub user_id: String,
}

/// `{"status": "success", "message": ...}` with nothing else to report.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub status: &'static str,
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadImageResponse {
    pub status: &'static str,
    pub image_id: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessImageResponse {
    pub status: &'static str,
    pub message: String,
    pub processing_time: f64,
    pub result_url: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveBackgroundResponse {
    pub status: &'static str,
    pub message: String,
    pub result_url: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanFileResponse {
    pub status: &'static str,
    pub filename: String,
    pub threats: Vec<String>,
    pub safe: bool,
    pub scan_time: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateArtResponse {
    pub status: &'static str,
    pub art_id: String,
    pub message: String,
    pub image_url: String,
    pub generation_time: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePosterResponse {
    pub status: &'static str,
    pub poster_id: String,
    pub message: String,
    pub image_url: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateResponse {
    pub status: &'static str,
    pub original_text: String,
    pub translated_text: String,
    pub source_lang: String,
    pub target_lang: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateQrResponse {
    pub status: &'static str,
    pub qr_id: String,
    pub message: String,
    pub qr_url: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OcrResponse {
    pub status: &'static str,
    pub extracted_text: String,
    pub confidence: f64,
    pub language: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchItem {
    pub file_id: Value,
    pub status: &'static str,
    pub result_url: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchProcessResponse {
    pub status: &'static str,
    pub message: String,
    pub results: Vec<BatchItem>,
    pub total_processed: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialShareResponse {
    pub status: &'static str,
    pub message: String,
    pub share_url: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpgradePremiumResponse {
    pub status: &'static str,
    pub message: String,
    pub features: &'static [&'static str],
    pub valid_until: String,
}
