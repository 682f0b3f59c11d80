use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use catalog::CatalogError;
use engine::EngineError;
use serde_json::json;
use thiserror::Error;

use crate::reviews::ReviewError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Malformed payload")]
    MalformedPayload,

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Template(#[from] CatalogError),

    #[error(transparent)]
    Review(#[from] ReviewError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::MalformedPayload => StatusCode::BAD_REQUEST,
            AppError::Engine { .. } => StatusCode::BAD_REQUEST,
            AppError::Template { .. } => StatusCode::NOT_FOUND,
            AppError::Review { .. } => StatusCode::BAD_REQUEST,
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
