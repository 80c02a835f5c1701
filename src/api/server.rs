use std::any::Any;
use std::sync::Arc;

use axum::{
    Router,
    extract::{DefaultBodyLimit, Request},
    http::{HeaderValue, Method, StatusCode, header},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{MethodRouter, get, post},
};
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::api::error::{ApiError, internal_error_response};
use crate::api::{account, auth, catalog, media, tools};
use crate::config::Config;
use crate::engine::random::MockRandom;
use crate::store::repo::Store;

const ALLOW_METHODS: &str = "GET, POST, OPTIONS, PUT, DELETE";
const ALLOW_HEADERS: &str = "Content-Type, Authorization, X-Requested-With";
/// Large enough for a batch of tens of thousands of ids.
pub const MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

pub struct AppState {
    pub store: Store,
    pub random: Arc<dyn MockRandom>,
}

impl AppState {
    pub fn new(store: Store, random: Arc<dyn MockRandom>) -> Self {
        Self { store, random }
    }
}

/// One row of the dispatch table.
pub struct Route {
    pub method: Method,
    pub path: &'static str,
    pub summary: &'static str,
    handler: MethodRouter<Arc<AppState>>,
}

impl Route {
    fn get(path: &'static str, summary: &'static str, handler: MethodRouter<Arc<AppState>>) -> Self {
        Self {
            method: Method::GET,
            path,
            summary,
            // axum answers HEAD from the GET handler unless HEAD is routed.
            handler: handler.head(not_found),
        }
    }

    fn post(path: &'static str, summary: &'static str, handler: MethodRouter<Arc<AppState>>) -> Self {
        Self {
            method: Method::POST,
            path,
            summary,
            handler,
        }
    }
}

pub fn routes() -> Vec<Route> {
    vec![
        Route::get("/api/usage", "Usage statistics", get(catalog::usage)),
        Route::get("/api/templates", "Design templates", get(catalog::templates)),
        Route::get("/api/achievements", "User achievements", get(catalog::achievements)),
        Route::get("/api/user/profile", "User profile", get(catalog::profile)),
        Route::post("/api/login", "User authentication", post(auth::login)),
        Route::post("/api/signup", "User registration", post(auth::signup)),
        Route::post("/api/toggle-feature", "Feature toggles", post(account::toggle_feature)),
        Route::post("/api/upload-image", "Image upload", post(media::upload_image)),
        Route::post("/api/process-image", "Image processing", post(media::process_image)),
        Route::post("/api/remove-background", "Background removal", post(media::remove_background)),
        Route::post("/api/scan-file", "File security scan", post(media::scan_file)),
        Route::post("/api/generate-art", "AI art generation", post(media::generate_art)),
        Route::post("/api/create-poster", "Poster creation", post(media::create_poster)),
        Route::post("/api/translate-text", "Text translation", post(tools::translate_text)),
        Route::post("/api/generate-qr", "QR code generation", post(tools::generate_qr)),
        Route::post("/api/ocr-extract", "OCR text extraction", post(tools::ocr_extract)),
        Route::post("/api/batch-process", "Batch file operations", post(media::batch_process)),
        Route::post("/api/social-share", "Social media sharing", post(media::social_share)),
        Route::post("/api/upgrade-premium", "Premium upgrade", post(account::upgrade_premium)),
    ]
}

/// Builds the full application: dispatch table plus the uniform middleware.
///
/// Paths match exactly. A known path hit with the wrong method gets the same
/// 404 as an unknown path, not a 405.
pub fn build_router(state: Arc<AppState>) -> Router {
    let router = routes()
        .into_iter()
        .fold(Router::new(), |router, route| {
            router.route(route.path, route.handler.fallback(not_found))
        })
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state);

    with_middleware(router)
}

/// Outermost first: CORS headers, request tracing, OPTIONS short-circuit,
/// panic capture.
fn with_middleware(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(middleware::from_fn(preflight))
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOW_HEADERS),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOW_METHODS),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}

// Any OPTIONS, registered path or not, is a successful preflight.
async fn preflight(request: Request, next: Next) -> Response {
    if request.method() == &Method::OPTIONS {
        return StatusCode::OK.into_response();
    }
    next.run(request).await
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        *s
    } else {
        "unknown panic payload"
    };
    tracing::error!(detail, "handler panicked");
    internal_error_response()
}

pub async fn start_server(config: &Config, state: Arc<AppState>) -> anyhow::Result<()> {
    let listener = TcpListener::bind(config.bind_addr()).await?;
    let addr = listener.local_addr()?;

    tracing::info!(%addr, "EditNova mock API listening");
    for route in routes() {
        tracing::info!(method = %route.method, path = route.path, "{}", route.summary);
    }

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(%err, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(%err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down..."),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down..."),
    }
}
