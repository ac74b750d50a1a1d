use axum::Router;
use axum::http::HeaderValue;
use tokio::signal;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace;
use tower_http::trace::TraceLayer;
use tracing::{Level, warn};

use crate::file_scan::ScanOptions;
use crate::utils::storage_resolver::{STATIC_MOUNT, StorageResolver};

pub mod error;
mod photos_api;

pub fn router(app_state: AppStateRef) -> Router {
    Router::new()
        .merge(photos_api::router(app_state))
        .nest_service(STATIC_MOUNT, ServeDir::new(&app_state.storage.image_folder))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(trace::DefaultMakeSpan::new().level(Level::INFO))
                .on_response(trace::DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors_layer(&app_state.allowed_origins))
}

/// Only the listed origins may read responses. Credentials are allowed, so methods
/// and headers are mirrored back instead of answered with a wildcard.
fn cors_layer(allowed_origins: &[HeaderValue]) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins.iter().cloned()))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}

pub struct AppState {
    pub storage: StorageResolver,
    pub scan_options: ScanOptions,
    pub allowed_origins: Vec<HeaderValue>,
}

impl AppState {
    pub fn new(
        storage: StorageResolver,
        scan_options: ScanOptions,
        allowed_origins: Vec<HeaderValue>,
    ) -> Self {
        Self {
            storage,
            scan_options,
            allowed_origins,
        }
    }
}

pub type AppStateRef = &'static AppState;

pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {e}")
        }
    };

    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
