use std::sync::Arc;

use axum::{Json, extract::State};
use uuid::Uuid;

use crate::api::extract::{LenientJson, value_text};
use crate::api::payloads::{
    BatchItem, BatchProcessRequest, BatchProcessResponse, CreatePosterRequest,
    CreatePosterResponse, GenerateArtRequest, GenerateArtResponse, ImageRef,
    ProcessImageRequest, ProcessImageResponse, RemoveBackgroundResponse, SUCCESS,
    ScanFileRequest, ScanFileResponse, SocialShareRequest, SocialShareResponse,
    UploadImageRequest, UploadImageResponse,
};
use crate::api::server::AppState;
use crate::engine::catalogue::THREAT_OUTCOMES;
use crate::engine::random::pick;
use crate::store::models::Counter;

pub async fn upload_image(
    State(state): State<Arc<AppState>>,
    LenientJson(payload): LenientJson<UploadImageRequest>,
) -> Json<UploadImageResponse> {
    let image_id = state
        .store
        .create_file_record(&payload.filename, payload.size, "image")
        .await;

    Json(UploadImageResponse {
        status: SUCCESS,
        image_id,
        message: "Image uploaded successfully".to_string(),
    })
}

/// The id is never looked up; unknown ids "process" just as well.
pub async fn process_image(
    State(state): State<Arc<AppState>>,
    LenientJson(payload): LenientJson<ProcessImageRequest>,
) -> Json<ProcessImageResponse> {
    Json(ProcessImageResponse {
        status: SUCCESS,
        message: format!("Image {} completed", payload.operation),
        processing_time: state.random.uniform(1.5, 3.0),
        result_url: format!("processed_{}.jpg", payload.image_id),
    })
}

pub async fn remove_background(
    State(state): State<Arc<AppState>>,
    LenientJson(payload): LenientJson<ImageRef>,
) -> Json<RemoveBackgroundResponse> {
    state.store.increment(Counter::BackgroundRemoved).await;

    Json(RemoveBackgroundResponse {
        status: SUCCESS,
        message: "Background removed successfully".to_string(),
        result_url: format!("bg_removed_{}.png", payload.image_id),
    })
}

pub async fn scan_file(
    State(state): State<Arc<AppState>>,
    LenientJson(payload): LenientJson<ScanFileRequest>,
) -> Json<ScanFileResponse> {
    state.store.increment(Counter::FilesScanned).await;

    let threats: Vec<String> = pick(state.random.as_ref(), THREAT_OUTCOMES)
        .iter()
        .map(|t| t.to_string())
        .collect();
    if !threats.is_empty() {
        state.store.increment(Counter::ThreatsBlocked).await;
    }

    Json(ScanFileResponse {
        status: SUCCESS,
        filename: payload.filename,
        safe: threats.is_empty(),
        threats,
        scan_time: state.random.uniform(0.5, 2.0),
    })
}

pub async fn generate_art(
    State(state): State<Arc<AppState>>,
    LenientJson(payload): LenientJson<GenerateArtRequest>,
) -> Json<GenerateArtResponse> {
    state.store.increment(Counter::AiArtGenerated).await;

    let art_id = Uuid::new_v4().to_string();
    Json(GenerateArtResponse {
        status: SUCCESS,
        message: format!(
            "AI art generated: {} in {} style",
            payload.description, payload.style
        ),
        image_url: format!("ai_art_{art_id}.jpg"),
        art_id,
        generation_time: state.random.uniform(3.0, 8.0),
    })
}

pub async fn create_poster(
    LenientJson(payload): LenientJson<CreatePosterRequest>,
) -> Json<CreatePosterResponse> {
    let poster_id = Uuid::new_v4().to_string();
    tracing::debug!(%poster_id, text = %payload.text, "poster created");

    Json(CreatePosterResponse {
        status: SUCCESS,
        message: format!("Poster created with {} theme", payload.theme),
        image_url: format!("poster_{poster_id}.jpg"),
        poster_id,
    })
}

pub async fn batch_process(
    LenientJson(payload): LenientJson<BatchProcessRequest>,
) -> Json<BatchProcessResponse> {
    let operation = payload.operation;
    let results: Vec<BatchItem> = payload
        .file_ids
        .into_iter()
        .map(|file_id| BatchItem {
            result_url: format!("{operation}_{}.jpg", value_text(&file_id)),
            file_id,
            status: SUCCESS,
        })
        .collect();

    Json(BatchProcessResponse {
        status: SUCCESS,
        message: format!("Batch {operation} completed"),
        total_processed: results.len(),
        results,
    })
}

pub async fn social_share(
    LenientJson(payload): LenientJson<SocialShareRequest>,
) -> Json<SocialShareResponse> {
    Json(SocialShareResponse {
        status: SUCCESS,
        message: format!("Shared to {}", payload.platform),
        share_url: format!("https://{}.com/shared_{}", payload.platform, payload.image_id),
    })
}
