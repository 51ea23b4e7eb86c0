use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::geometry::{default_phase, OrbitPlane, Point3};
use crate::web::api::error::{ApiResult, ErrorResponse};
use crate::web::server::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RingQuery {
    pub altitude_km: f64,
    pub inclination_deg: f64,
    #[serde(default)]
    pub segments: Option<usize>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RingResponse {
    pub radius: f64,
    pub segments: usize,
    pub points: Vec<Point3>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct MarkerQuery {
    pub altitude_km: f64,
    pub inclination_deg: f64,
    #[serde(default)]
    pub elapsed_seconds: f64,
    #[serde(default)]
    pub phase: Option<f64>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MarkerResponse {
    pub position: Point3,
    pub angle: f64,
    pub phase: f64,
    pub period_s: f64,
}

#[utoipa::path(
    get,
    path = "/api/orbit/ring",
    tag = "orbit",
    params(
        ("altitude_km" = f64, Query, description = "Altitude above the reference body (km)"),
        ("inclination_deg" = f64, Query, description = "Inclination in degrees"),
        ("segments" = Option<usize>, Query, description = "Ring segments, 3 to 4096")
    ),
    responses(
        (status = 200, description = "Closed orbit ring", body = RingResponse),
        (status = 400, description = "Invalid geometry parameters", body = ErrorResponse)
    )
)]
pub async fn ring(
    State(state): State<AppState>,
    Query(query): Query<RingQuery>,
) -> ApiResult<Json<RingResponse>> {
    let scene = &state.config.scene;
    let plane = OrbitPlane::new(query.altitude_km, query.inclination_deg, scene.scale()?)?;
    let segments = query.segments.unwrap_or(scene.ring_segments);

    Ok(Json(RingResponse {
        radius: plane.radius(),
        segments,
        points: plane.ring(segments)?,
    }))
}

#[utoipa::path(
    get,
    path = "/api/orbit/marker",
    tag = "orbit",
    params(
        ("altitude_km" = f64, Query, description = "Altitude above the reference body (km)"),
        ("inclination_deg" = f64, Query, description = "Inclination in degrees"),
        ("elapsed_seconds" = Option<f64>, Query, description = "Seconds since animation start"),
        ("phase" = Option<f64>, Query, description = "Starting angle in radians; derived from altitude when omitted")
    ),
    responses(
        (status = 200, description = "Marker position on the orbit ring", body = MarkerResponse),
        (status = 400, description = "Invalid geometry parameters", body = ErrorResponse)
    )
)]
pub async fn marker(
    State(state): State<AppState>,
    Query(query): Query<MarkerQuery>,
) -> ApiResult<Json<MarkerResponse>> {
    let scene = &state.config.scene;
    let timing = scene.timing()?;
    let plane = OrbitPlane::new(query.altitude_km, query.inclination_deg, scene.scale()?)?;

    let phase = query
        .phase
        .unwrap_or_else(|| default_phase(query.altitude_km));
    let angle = plane.marker_angle(phase, query.elapsed_seconds, &timing)?;

    Ok(Json(MarkerResponse {
        position: plane.point_at(angle),
        angle,
        phase,
        period_s: timing.period(query.altitude_km),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, response::IntoResponse};
    use crate::web::api::error::ApiError;
    use crate::geometry::{GeometryError, MAX_SEGMENTS};
    use crate::web::api::test_support::state;

    #[tokio::test]
    async fn ring_uses_configured_segments_by_default() {
        let Json(body) = ring(
            State(state()),
            Query(RingQuery {
                altitude_km: 6371.0,
                inclination_deg: 0.0,
                segments: None,
            }),
        )
        .await
        .unwrap();

        assert_eq!(body.segments, 128);
        assert_eq!(body.points.len(), 129);
        assert!((body.radius - 2.0).abs() < 1e-12);
        assert_eq!(body.points.first(), body.points.last());
    }

    #[tokio::test]
    async fn ring_rejects_negative_altitude() {
        let result = ring(
            State(state()),
            Query(RingQuery {
                altitude_km: -5.0,
                inclination_deg: 0.0,
                segments: Some(8),
            }),
        )
        .await;
        assert!(matches!(result, Err(ApiError::Geometry(_))));
    }

    #[tokio::test]
    async fn ring_rejects_oversized_segment_count() {
        for segments in [MAX_SEGMENTS + 1, usize::MAX] {
            let err = ring(
                State(state()),
                Query(RingQuery {
                    altitude_km: 400.0,
                    inclination_deg: 10.0,
                    segments: Some(segments),
                }),
            )
            .await
            .unwrap_err();
            assert!(matches!(
                err,
                ApiError::Geometry(GeometryError::InvalidParameter { name: "segments", .. })
            ));
            assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
        }
    }

    #[tokio::test]
    async fn marker_defaults_phase_from_altitude() {
        let Json(body) = marker(
            State(state()),
            Query(MarkerQuery {
                altitude_km: 420.0,
                inclination_deg: 51.6,
                elapsed_seconds: 0.0,
                phase: None,
            }),
        )
        .await
        .unwrap();

        assert_eq!(body.phase, default_phase(420.0));
        assert_eq!(body.angle, body.phase);
        assert_eq!(body.period_s, 20.0 + 420.0 * 0.02);
    }

    #[tokio::test]
    async fn marker_accepts_retrograde_inclination() {
        let Json(body) = marker(
            State(state()),
            Query(MarkerQuery {
                altitude_km: 420.0,
                inclination_deg: 190.0,
                elapsed_seconds: 3.0,
                phase: Some(0.0),
            }),
        )
        .await
        .unwrap();
        let radius = 1.0 + 420.0 / 6371.0;
        assert!((body.position.norm() - radius).abs() < 1e-12);
    }

    #[tokio::test]
    async fn marker_rejects_non_finite_inclination() {
        let result = marker(
            State(state()),
            Query(MarkerQuery {
                altitude_km: 420.0,
                inclination_deg: f64::NAN,
                elapsed_seconds: 3.0,
                phase: Some(0.0),
            }),
        )
        .await;
        assert!(matches!(result, Err(ApiError::Geometry(_))));
    }
}
