//! Response envelope and domain error mapping shared by all handlers

pub mod validated_json;

pub use validated_json::{ValidatedJson, ValidatedJsonRejection};

use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use tracing::{error, info};
use utoipa::ToSchema;

use crate::domain::DomainError;

/// Standard JSON envelope
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    /// `true` if the request succeeded
    pub success: bool,
    /// Payload; `null` on error
    pub data: Option<T>,
    /// Error description; omitted on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Plain acknowledgement payload
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageDto {
    pub message: String,
}

pub type ApiError<T> = (StatusCode, Json<ApiResponse<T>>);
pub type ApiResult<T> = Result<(StatusCode, Json<ApiResponse<T>>), ApiError<T>>;

pub fn status_for(err: &DomainError) -> StatusCode {
    match err {
        DomainError::ReservationConflict { .. } => StatusCode::CONFLICT,
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        DomainError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Map a domain error to its HTTP status and envelope, logging server-side
/// failures.
pub fn domain_error<T>(err: DomainError) -> ApiError<T> {
    let status = status_for(&err);
    match &err {
        DomainError::Storage(_) => error!(error = %err, "Storage failure"),
        DomainError::ReservationConflict {
            room_id,
            conflicting_ids,
        } => info!(room_id, ?conflicting_ids, "Reservation rejected: slot taken"),
        _ => {}
    }
    (status, Json(ApiResponse::error(err.to_string())))
}
