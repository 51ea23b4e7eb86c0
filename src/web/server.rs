use axum::{routing::get, routing::post, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::api::health as health_handlers;
use super::api::orbit as orbit_handlers;
use super::api::overview as overview_handlers;
use super::api::scene as scene_handlers;
use super::api_doc::ApiDoc;
use super::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(health_handlers::health))
        // Geometry endpoints
        .route("/api/orbit/ring", get(orbit_handlers::ring))
        .route("/api/orbit/marker", get(orbit_handlers::marker))
        .route("/api/scene", post(scene_handlers::scene))
        .route("/api/graticule", get(scene_handlers::graticule))
        // Dashboard summaries
        .route("/api/overview", post(overview_handlers::overview))
        // OpenAPI / Swagger
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()))
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run_server(config: Config) -> std::io::Result<()> {
    let bind_addr = config.web.bind.clone();

    // Fail at startup rather than on the first request.
    if let Err(e) = config.scene.validate() {
        return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e));
    }

    let state = AppState {
        config: Arc::new(config),
    };
    let app = router(state);

    log::info!("Starting server on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await
}
