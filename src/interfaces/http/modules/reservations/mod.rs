//! Reservation REST module

pub mod dto;
pub mod handlers;

use axum::routing::{get, post};
use axum::Router;

pub use handlers::ReservationAppState;

pub fn routes(state: ReservationAppState) -> Router {
    Router::new()
        .route(
            "/api/v1/reservations",
            post(handlers::create_reservation).get(handlers::list_reservations),
        )
        .route("/api/v1/reservations/quote", post(handlers::quote_reservation))
        .route(
            "/api/v1/reservations/{id}",
            get(handlers::get_reservation)
                .put(handlers::update_reservation)
                .delete(handlers::delete_reservation),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::application::ReservationService;
    use crate::infrastructure::InMemoryReservationRepository;

    fn app() -> Router {
        let repo = Arc::new(InMemoryReservationRepository::new());
        routes(ReservationAppState {
            service: Arc::new(ReservationService::new(repo)),
        })
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let req = match body {
            Some(b) => builder
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&b).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let resp = app.clone().oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    fn payload(room_id: i32, start: &str, end: &str) -> Value {
        json!({
            "startDate": start,
            "endDate": end,
            "type": "HOURLY",
            "totalPrice": 100,
            "clientId": 1,
            "roomId": room_id
        })
    }

    #[tokio::test]
    async fn create_then_conflict_then_adjacent() {
        let app = app();

        let (status, body) = send(
            &app,
            "POST",
            "/api/v1/reservations",
            Some(payload(5, "2024-01-01T10:00:00Z", "2024-01-01T12:00:00Z")),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["roomId"], 5);

        let (status, body) = send(
            &app,
            "POST",
            "/api/v1/reservations",
            Some(payload(5, "2024-01-01T11:00:00Z", "2024-01-01T13:00:00Z")),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().contains("already reserved"));

        let (status, _) = send(
            &app,
            "POST",
            "/api/v1/reservations",
            Some(payload(5, "2024-01-01T12:00:00Z", "2024-01-01T14:00:00Z")),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let (_, body) = send(&app, "GET", "/api/v1/reservations", None).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn update_and_delete_by_id() {
        let app = app();
        let (_, created) = send(
            &app,
            "POST",
            "/api/v1/reservations",
            Some(payload(5, "2024-01-01T10:00:00Z", "2024-01-01T12:00:00Z")),
        )
        .await;
        let id = created["data"]["id"].as_i64().unwrap();
        let uri = format!("/api/v1/reservations/{id}");

        let (status, body) = send(
            &app,
            "PUT",
            &uri,
            Some(payload(5, "2024-01-01T10:30:00Z", "2024-01-01T12:30:00Z")),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["data"]["startDate"]
            .as_str()
            .unwrap()
            .starts_with("2024-01-01T10:30:00"));

        let (status, _) = send(&app, "DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = send(&app, "GET", &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["data"].is_null());
    }

    #[tokio::test]
    async fn missing_ids_are_404() {
        let app = app();
        let (status, _) = send(&app, "DELETE", "/api/v1/reservations/999", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(
            &app,
            "PUT",
            "/api/v1/reservations/999",
            Some(payload(5, "2024-01-01T10:00:00Z", "2024-01-01T11:00:00Z")),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn inverted_slot_is_422() {
        let app = app();
        let (status, body) = send(
            &app,
            "POST",
            "/api/v1/reservations",
            Some(payload(5, "2024-01-01T12:00:00Z", "2024-01-01T10:00:00Z")),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["error"].as_str().unwrap().contains("startDate"));
    }

    #[tokio::test]
    async fn quote_prices_a_daily_slot() {
        let app = app();
        let (status, body) = send(
            &app,
            "POST",
            "/api/v1/reservations/quote",
            Some(json!({
                "startDate": "2024-01-01T10:00:00Z",
                "endDate": "2024-01-02T11:00:00Z",
                "type": "DAILY",
                "pricePerHour": 20,
                "pricePerDay": 150
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["units"], 2.0);
        assert_eq!(body["data"]["totalPrice"], 300.0);
    }

    #[tokio::test]
    async fn quote_overflow_is_422() {
        let app = app();
        let (status, body) = send(
            &app,
            "POST",
            "/api/v1/reservations/quote",
            Some(json!({
                "startDate": "2024-01-01T10:00:00Z",
                "endDate": "2024-01-01T20:00:00Z",
                "type": "HOURLY",
                "pricePerHour": 1e28,
                "pricePerDay": 1
            })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "Validation: price overflow");
    }

    #[tokio::test]
    async fn accepts_datetime_local_form_values() {
        let app = app();
        let (status, body) = send(
            &app,
            "POST",
            "/api/v1/reservations",
            Some(payload(5, "2024-01-01T10:00", "2024-01-01T12:00")),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert!(body["data"]["startDate"]
            .as_str()
            .unwrap()
            .starts_with("2024-01-01T10:00:00"));

        let (status, _) = send(
            &app,
            "POST",
            "/api/v1/reservations",
            Some(payload(5, "2024-01-01T11:00:00Z", "2024-01-01T13:00:00Z")),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
    }
}
