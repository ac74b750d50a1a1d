use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use tokio::task::spawn_blocking;
use tracing::info;

use crate::file_scan::list_photos;
use crate::http::AppStateRef;
use crate::http::error::HttpResult;
use crate::model::photo_location::PhotoLocation;

pub fn router(app_state: AppStateRef) -> Router {
    Router::new()
        .route("/photos", get(photos_list))
        .with_state(app_state)
}

async fn photos_list(State(state): State<AppStateRef>) -> HttpResult<Json<Vec<PhotoLocation>>> {
    let photos =
        spawn_blocking(move || list_photos(&state.storage.image_folder, state.scan_options))
            .await??;

    info!("Serving {} photo locations", photos.len());

    Ok(Json(photos))
}
