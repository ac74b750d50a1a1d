use crate::file_scan::ScanOptions;
use crate::http::AppState;
use crate::utils::env_reader::EnvVariables;
use crate::utils::storage_resolver::StorageResolver;
use mimalloc::MiMalloc;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod file_scan;
mod http;
mod model;
mod utils;

#[tokio::main]
async fn main() {
    let vars = EnvVariables::get_all();

    // Logging
    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().compact())
        .init();

    let storage = StorageResolver::new(vars.images_path);
    if !storage.image_folder.is_dir() {
        warn!(
            "Image folder does not exist: {}",
            storage.image_folder.display()
        );
    }

    info!("Serving images from {}", storage.image_folder.display());
    info!(
        "Allowed origins: {:?}",
        vars.cors_origins
            .iter()
            .filter_map(|origin| origin.to_str().ok())
            .collect::<Vec<_>>()
    );
    if vars.apply_hemisphere_sign {
        info!("Hemisphere sign correction enabled");
    }

    let scan_options = ScanOptions {
        apply_hemisphere_sign: vars.apply_hemisphere_sign,
    };
    let app_state = AppState::new(storage, scan_options, vars.cors_origins);
    let app_state = Box::leak(Box::new(app_state));

    info!("Server listening on port {}", vars.server_port);

    let http_service = http::router(app_state).into_make_service();
    let addr = SocketAddr::from(([0, 0, 0, 0], vars.server_port));
    let listener = TcpListener::bind(addr)
        .await
        .expect("Failed to bind to port");

    axum::serve(listener, http_service)
        .with_graceful_shutdown(http::shutdown_signal())
        .await
        .expect("Failed to start server")
}
