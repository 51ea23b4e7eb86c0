use utoipa::OpenApi;

use super::api::error::ErrorResponse;
use super::api::health::HealthResponse;
use super::api::orbit::{MarkerQuery, MarkerResponse, RingQuery, RingResponse};
use super::api::overview::{OverviewRequest, OverviewResponse};
use super::api::scene::{SceneRequest, SceneResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::api::health::health,
        super::api::orbit::ring,
        super::api::orbit::marker,
        super::api::scene::scene,
        super::api::scene::graticule,
        super::api::overview::overview,
    ),
    components(
        schemas(
            HealthResponse,
            RingQuery,
            RingResponse,
            MarkerQuery,
            MarkerResponse,
            SceneRequest,
            SceneResponse,
            OverviewRequest,
            OverviewResponse,
            ErrorResponse,
            crate::geometry::Point3,
            crate::geometry::GraticuleLine,
            crate::geometry::GraticuleKind,
            crate::scene::OrbitTrack,
            crate::scene::Marker,
            crate::catalog::TrackedObject,
            crate::catalog::ConjunctionEvent,
            crate::catalog::ObjectStatus,
            crate::catalog::RiskLevel,
            crate::catalog::FleetOverview,
            crate::catalog::RiskSummary,
            crate::format::AlertRow,
            crate::palette::Color,
        )
    ),
    info(
        title = "Argus View Geometry API",
        description = "Orbit rings, marker animation and dashboard summaries for the tracking dashboard",
        version = "0.1.0"
    ),
    tags(
        (name = "health", description = "Service status"),
        (name = "orbit", description = "Single-orbit geometry"),
        (name = "scene", description = "Globe scene assembly"),
        (name = "overview", description = "Dashboard statistics")
    )
)]
pub struct ApiDoc;
