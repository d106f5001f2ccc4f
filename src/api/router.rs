//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{middleware, routing::get, Router};
use metrics_exporter_prometheus::PrometheusHandle;
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::dto::*;
use crate::api::handlers::{health, leitores, motos, registros, TrackingState};
use crate::api::metrics::{http_metrics_middleware, prometheus_metrics, MetricsState};
use crate::application::TrackingService;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Motos
        motos::list_motos,
        motos::get_moto,
        motos::create_moto,
        motos::update_moto,
        motos::delete_moto,
        // Leitores
        leitores::list_leitores,
        leitores::get_leitor,
        leitores::create_leitor,
        leitores::update_leitor,
        leitores::delete_leitor,
        // Registros
        registros::list_registros,
        registros::get_registro,
        registros::create_registro,
        registros::delete_registro,
    ),
    components(
        schemas(
            // Common
            ApiResponse<String>,
            // Motos
            MotoDto,
            CreateMotoRequest,
            UpdateMotoRequest,
            // Leitores
            LeitorDto,
            CreateLeitorRequest,
            UpdateLeitorRequest,
            // Registros
            RegistroDto,
            CreateRegistroRequest,
            // Health
            health::HealthResponse,
            health::ComponentHealth,
        )
    ),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "Motos", description = "Motorcycle fleet CRUD; each moto optionally points at the reader it was last assigned to"),
        (name = "Leitores", description = "Fixed RFID reader CRUD; readers are joined with their currently assigned motos"),
        (name = "Registros", description = "Append-only RFID scan log: create and delete only, listed most recent first"),
    ),
    info(
        title = "MotoTrack RFID Tracking API",
        version = "1.0.0",
        description = "REST API for tracking RFID-tagged motorcycles across fixed readers",
        license(name = "MIT"),
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(
    service: Arc<TrackingService>,
    db: DatabaseConnection,
    prometheus_handle: PrometheusHandle,
) -> Router {
    let tracking_state = TrackingState { service };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let moto_routes = Router::new()
        .route("/", get(motos::list_motos).post(motos::create_moto))
        .route(
            "/{id}",
            get(motos::get_moto)
                .put(motos::update_moto)
                .delete(motos::delete_moto),
        )
        .with_state(tracking_state.clone());

    let leitor_routes = Router::new()
        .route(
            "/",
            get(leitores::list_leitores).post(leitores::create_leitor),
        )
        .route(
            "/{id}",
            get(leitores::get_leitor)
                .put(leitores::update_leitor)
                .delete(leitores::delete_leitor),
        )
        .with_state(tracking_state.clone());

    // No PUT: the scan log is append-only
    let registro_routes = Router::new()
        .route(
            "/",
            get(registros::list_registros).post(registros::create_registro),
        )
        .route(
            "/{id}",
            get(registros::get_registro).delete(registros::delete_registro),
        )
        .with_state(tracking_state);

    let health_state = health::HealthState {
        db,
        started_at: Arc::new(Instant::now()),
    };

    let metrics_state = MetricsState {
        handle: prometheus_handle,
    };

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    // Build router
    Router::new()
        // Swagger UI
        .merge(swagger_routes)
        // Health
        .route("/health", get(health::health_check).with_state(health_state))
        // Prometheus scrape endpoint
        .route(
            "/metrics",
            get(prometheus_metrics).with_state(metrics_state),
        )
        // Resources
        .nest("/api/v1/motos", moto_routes)
        .nest("/api/v1/leitores", leitor_routes)
        .nest("/api/v1/registros", registro_routes)
        // Middleware
        .layer(middleware::from_fn(http_metrics_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

// ── Tests ──────────────────────────────────────────────────────
