//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{routing::get, Router};
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::ReservationService;
use crate::interfaces::http::common::{ApiResponse, MessageDto};
use crate::interfaces::http::modules::health::{self, HealthState};
use crate::interfaces::http::modules::reservations::{self, dto::*, ReservationAppState};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::handlers::health_check,
        reservations::handlers::create_reservation,
        reservations::handlers::list_reservations,
        reservations::handlers::get_reservation,
        reservations::handlers::update_reservation,
        reservations::handlers::delete_reservation,
        reservations::handlers::quote_reservation,
    ),
    components(
        schemas(
            ApiResponse<ReservationDto>,
            ApiResponse<Vec<ReservationDto>>,
            ApiResponse<QuoteDto>,
            ApiResponse<MessageDto>,
            ReservationRequest,
            ReservationDto,
            QuoteRequest,
            QuoteDto,
            MessageDto,
            health::handlers::HealthResponse,
            health::handlers::ComponentHealth,
        )
    ),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "Reservations", description = "Room reservations with per-room conflict detection"),
    ),
    info(
        title = "Room Booking API",
        version = "1.0.0",
        description = "REST API for booking rooms by the hour or by the day",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes.
///
/// `db` is `None` when reservations live in the in-memory store.
pub fn create_api_router(
    service: Arc<ReservationService>,
    db: Option<DatabaseConnection>,
) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let health_routes = Router::new()
        .route("/health", get(health::handlers::health_check))
        .with_state(HealthState {
            db,
            started_at: Arc::new(Instant::now()),
        });

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    Router::new()
        .merge(swagger_routes)
        .merge(health_routes)
        .merge(reservations::routes(ReservationAppState { service }))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
