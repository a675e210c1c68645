//! Reservation HTTP handlers

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::info;

use crate::application::ReservationService;
use crate::interfaces::http::common::{
    domain_error, ApiResponse, ApiResult, MessageDto, ValidatedJson,
};

use super::dto::*;

/// Application state for reservation handlers.
#[derive(Clone)]
pub struct ReservationAppState {
    pub service: Arc<ReservationService>,
}

fn ok<T>(status: StatusCode, data: T) -> ApiResult<T> {
    Ok((status, Json(ApiResponse::success(data))))
}

#[utoipa::path(
    post,
    path = "/api/v1/reservations",
    tag = "Reservations",
    request_body = ReservationRequest,
    responses(
        (status = 201, description = "Reservation created", body = ApiResponse<ReservationDto>),
        (status = 409, description = "Room already reserved for this period"),
        (status = 422, description = "Invalid request")
    )
)]
pub async fn create_reservation(
    State(state): State<ReservationAppState>,
    ValidatedJson(request): ValidatedJson<ReservationRequest>,
) -> ApiResult<ReservationDto> {
    let candidate = request.into_domain().map_err(domain_error)?;
    let reservation = state.service.create(candidate).await.map_err(domain_error)?;

    info!(
        id = reservation.id,
        room_id = reservation.room_id,
        client_id = reservation.client_id,
        "Reservation created"
    );
    ok(StatusCode::CREATED, reservation.into())
}

#[utoipa::path(
    get,
    path = "/api/v1/reservations",
    tag = "Reservations",
    responses(
        (status = 200, description = "All reservations", body = ApiResponse<Vec<ReservationDto>>)
    )
)]
pub async fn list_reservations(
    State(state): State<ReservationAppState>,
) -> ApiResult<Vec<ReservationDto>> {
    let reservations = state.service.get_all().await.map_err(domain_error)?;
    ok(
        StatusCode::OK,
        reservations.into_iter().map(ReservationDto::from).collect(),
    )
}

#[utoipa::path(
    get,
    path = "/api/v1/reservations/{id}",
    tag = "Reservations",
    params(("id" = i32, Path, description = "Reservation ID")),
    responses(
        (status = 200, description = "The reservation, or null data when absent", body = ApiResponse<ReservationDto>)
    )
)]
pub async fn get_reservation(
    State(state): State<ReservationAppState>,
    Path(id): Path<i32>,
) -> ApiResult<Option<ReservationDto>> {
    let reservation = state.service.get_by_id(id).await.map_err(domain_error)?;
    ok(StatusCode::OK, reservation.map(ReservationDto::from))
}

#[utoipa::path(
    put,
    path = "/api/v1/reservations/{id}",
    tag = "Reservations",
    params(("id" = i32, Path, description = "Reservation ID")),
    request_body = ReservationRequest,
    responses(
        (status = 200, description = "Reservation updated", body = ApiResponse<ReservationDto>),
        (status = 404, description = "Reservation not found"),
        (status = 409, description = "Room already reserved for this period"),
        (status = 422, description = "Invalid request")
    )
)]
pub async fn update_reservation(
    State(state): State<ReservationAppState>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<ReservationRequest>,
) -> ApiResult<ReservationDto> {
    let candidate = request.into_domain().map_err(domain_error)?;
    let reservation = state
        .service
        .update(id, candidate)
        .await
        .map_err(domain_error)?;

    info!(id, room_id = reservation.room_id, "Reservation updated");
    ok(StatusCode::OK, reservation.into())
}

#[utoipa::path(
    delete,
    path = "/api/v1/reservations/{id}",
    tag = "Reservations",
    params(("id" = i32, Path, description = "Reservation ID")),
    responses(
        (status = 200, description = "Reservation deleted", body = ApiResponse<MessageDto>),
        (status = 404, description = "Reservation not found")
    )
)]
pub async fn delete_reservation(
    State(state): State<ReservationAppState>,
    Path(id): Path<i32>,
) -> ApiResult<MessageDto> {
    state.service.delete(id).await.map_err(domain_error)?;

    info!(id, "Reservation deleted");
    ok(
        StatusCode::OK,
        MessageDto {
            message: "Reservation deleted successfully".to_string(),
        },
    )
}

#[utoipa::path(
    post,
    path = "/api/v1/reservations/quote",
    tag = "Reservations",
    request_body = QuoteRequest,
    responses(
        (status = 200, description = "Price for the slot", body = ApiResponse<QuoteDto>),
        (status = 422, description = "Invalid request")
    )
)]
pub async fn quote_reservation(
    ValidatedJson(request): ValidatedJson<QuoteRequest>,
) -> ApiResult<QuoteDto> {
    let quote = request.quote().map_err(domain_error)?;
    ok(StatusCode::OK, quote.into())
}
