use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::geometry::GeometryError;
use crate::scene::SceneError;

#[derive(Debug)]
pub enum ApiError {
    Geometry(GeometryError),
    Scene(SceneError),
}

impl From<GeometryError> for ApiError {
    fn from(e: GeometryError) -> Self {
        ApiError::Geometry(e)
    }
}

impl From<SceneError> for ApiError {
    fn from(e: SceneError) -> Self {
        match e {
            SceneError::Geometry(e) => ApiError::Geometry(e),
            other => ApiError::Scene(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Geometry(e) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::with_message("invalid_parameter", &e.to_string())),
            )
                .into_response(),
            ApiError::Scene(e) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::with_message("invalid_object", &e.to_string())),
            )
                .into_response(),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorResponse {
    pub fn with_message(error: &str, message: &str) -> Self {
        ErrorResponse {
            error: error.to_string(),
            message: Some(message.to_string()),
        }
    }
}
