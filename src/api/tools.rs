use std::sync::Arc;

use axum::{Json, extract::State};
use uuid::Uuid;

use crate::api::extract::LenientJson;
use crate::api::payloads::{
    GenerateQrRequest, GenerateQrResponse, ImageRef, OcrResponse, SUCCESS, TranslateRequest,
    TranslateResponse,
};
use crate::api::server::AppState;
use crate::engine::catalogue::OCR_SAMPLES;
use crate::engine::random::pick;
use crate::engine::translate::translate;
use crate::store::models::Counter;

pub async fn translate_text(
    State(state): State<Arc<AppState>>,
    LenientJson(payload): LenientJson<TranslateRequest>,
) -> Json<TranslateResponse> {
    state.store.increment(Counter::TextsTranslated).await;

    let translated_text = translate(&payload.text, &payload.source_lang, &payload.target_lang);
    Json(TranslateResponse {
        status: SUCCESS,
        original_text: payload.text,
        translated_text,
        source_lang: payload.source_lang,
        target_lang: payload.target_lang,
    })
}

pub async fn generate_qr(
    State(state): State<Arc<AppState>>,
    LenientJson(payload): LenientJson<GenerateQrRequest>,
) -> Json<GenerateQrResponse> {
    state.store.increment(Counter::QrCodesGenerated).await;

    let qr_id = Uuid::new_v4().to_string();
    tracing::debug!(%qr_id, text = %payload.text, "qr code generated");

    Json(GenerateQrResponse {
        status: SUCCESS,
        message: format!("QR code generated for {}", payload.kind),
        qr_url: format!("qr_{qr_id}.png"),
        qr_id,
    })
}

pub async fn ocr_extract(
    State(state): State<Arc<AppState>>,
    LenientJson(payload): LenientJson<ImageRef>,
) -> Json<OcrResponse> {
    tracing::debug!(image_id = %payload.image_id, "ocr requested");

    Json(OcrResponse {
        status: SUCCESS,
        extracted_text: pick(state.random.as_ref(), OCR_SAMPLES).to_string(),
        confidence: state.random.uniform(85.0, 98.5),
        language: "en",
    })
}
