use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::catalog::TrackedObject;
use crate::geometry::{graticule as build_graticule, GraticuleLine};
use crate::scene::{Marker, OrbitTrack, SceneBuilder};
use crate::web::api::error::{ApiResult, ErrorResponse};
use crate::web::server::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SceneRequest {
    pub satellites: Vec<TrackedObject>,
    #[serde(default)]
    pub segments: Option<usize>,
    #[serde(default)]
    pub elapsed_seconds: f64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SceneResponse {
    pub tracks: Vec<OrbitTrack>,
    pub markers: Vec<Marker>,
    pub elapsed_seconds: f64,
}

#[utoipa::path(
    post,
    path = "/api/scene",
    tag = "scene",
    request_body = SceneRequest,
    responses(
        (status = 200, description = "Orbit tracks and marker positions", body = SceneResponse),
        (status = 400, description = "An object has invalid orbit parameters", body = ErrorResponse)
    )
)]
pub async fn scene(
    State(state): State<AppState>,
    Json(request): Json<SceneRequest>,
) -> ApiResult<Json<SceneResponse>> {
    let mut builder = SceneBuilder::new(&state.config.scene, state.config.palette.clone())?;
    if let Some(segments) = request.segments {
        builder = builder.with_segments(segments);
    }

    let scene = builder.build(&request.satellites).inspect_err(|e| {
        log::warn!("Rejected scene request: {}", e);
    })?;
    let markers = scene.markers(request.elapsed_seconds)?;

    Ok(Json(SceneResponse {
        tracks: scene.tracks,
        markers,
        elapsed_seconds: request.elapsed_seconds,
    }))
}

#[utoipa::path(
    get,
    path = "/api/graticule",
    tag = "scene",
    responses(
        (status = 200, description = "Latitude and longitude lines around the body", body = Vec<GraticuleLine>)
    )
)]
pub async fn graticule(State(state): State<AppState>) -> Json<Vec<GraticuleLine>> {
    Json(build_graticule(state.config.scene.body_radius))
}
