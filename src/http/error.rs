use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::error::Error;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum HttpError {
    #[error("IO error: `{0}`")]
    IO(#[from] std::io::Error),
    #[error("Background task failed: `{0}`")]
    Join(#[from] tokio::task::JoinError),
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        if let Some(source) = self.source() {
            error!("Error: {self}, caused by: {source}");
        } else {
            error!("Error: {self}");
        }

        let message = match self {
            HttpError::IO(error) => error.to_string(),
            HttpError::Join(error) => error.to_string(),
        };

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": message })),
        )
            .into_response()
    }
}

pub type HttpResult<T> = Result<T, HttpError>;
