//! Reservation DTOs

use std::borrow::Cow;

use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::domain::{
    DomainResult, NewReservation, PriceQuote, Reservation, ReservationType, RoomRates, TimeSlot,
};

/// Formats accepted for timestamps without an offset, read as UTC.
/// `datetime-local` form inputs send the first one.
const LOCAL_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"];

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    LOCAL_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).ok_or_else(|| {
        serde::de::Error::custom(format!(
            "invalid timestamp '{}', expected RFC 3339 or YYYY-MM-DDTHH:MM[:SS]",
            raw
        ))
    })
}

fn slot_error(start: &DateTime<Utc>, end: &DateTime<Utc>) -> Result<(), ValidationError> {
    if start < end {
        return Ok(());
    }
    Err(ValidationError::new("slot").with_message(Cow::from("startDate must be before endDate")))
}

fn non_negative(field: &'static str, value: &Decimal) -> Result<(), ValidationError> {
    if *value >= Decimal::ZERO {
        return Ok(());
    }
    Err(ValidationError::new("non_negative")
        .with_message(Cow::from(format!("{} must not be negative", field))))
}

/// Create or full-replacement update of a reservation
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_reservation_request"))]
pub struct ReservationRequest {
    /// Slot start, inclusive (RFC 3339, or local time read as UTC)
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub start_date: DateTime<Utc>,
    /// Slot end, exclusive
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub end_date: DateTime<Utc>,
    #[serde(rename = "type")]
    #[schema(value_type = String, example = "HOURLY")]
    pub reservation_type: ReservationType,
    /// Price computed by the client from the room's rates
    #[schema(value_type = f64, example = 150.0)]
    pub total_price: Decimal,
    #[validate(range(min = 1))]
    pub client_id: i32,
    #[validate(range(min = 1))]
    pub room_id: i32,
}

fn validate_reservation_request(req: &ReservationRequest) -> Result<(), ValidationError> {
    slot_error(&req.start_date, &req.end_date)?;
    non_negative("totalPrice", &req.total_price)
}

impl ReservationRequest {
    pub fn into_domain(self) -> DomainResult<NewReservation> {
        let slot = TimeSlot::new(self.start_date, self.end_date)?;
        NewReservation::new(
            self.room_id,
            self.client_id,
            slot,
            self.reservation_type,
            self.total_price,
        )
    }
}

/// Reservation details in API responses
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReservationDto {
    pub id: i32,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[serde(rename = "type")]
    #[schema(value_type = String, example = "DAILY")]
    pub reservation_type: ReservationType,
    #[schema(value_type = f64)]
    pub total_price: Decimal,
    pub client_id: i32,
    pub room_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Reservation> for ReservationDto {
    fn from(r: Reservation) -> Self {
        Self {
            id: r.id,
            start_date: r.slot.start(),
            end_date: r.slot.end(),
            reservation_type: r.reservation_type,
            total_price: r.total_price,
            client_id: r.client_id,
            room_id: r.room_id,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

/// Price a prospective slot from the room's rates
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_quote_request"))]
pub struct QuoteRequest {
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub start_date: DateTime<Utc>,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub end_date: DateTime<Utc>,
    #[serde(rename = "type")]
    #[schema(value_type = String, example = "HOURLY")]
    pub reservation_type: ReservationType,
    #[schema(value_type = f64)]
    pub price_per_hour: Decimal,
    #[schema(value_type = f64)]
    pub price_per_day: Decimal,
}

fn validate_quote_request(req: &QuoteRequest) -> Result<(), ValidationError> {
    slot_error(&req.start_date, &req.end_date)?;
    non_negative("pricePerHour", &req.price_per_hour)?;
    non_negative("pricePerDay", &req.price_per_day)
}

impl QuoteRequest {
    pub fn quote(&self) -> DomainResult<PriceQuote> {
        let slot = TimeSlot::new(self.start_date, self.end_date)?;
        let rates = RoomRates::new(self.price_per_hour, self.price_per_day);
        rates.quote(self.reservation_type, &slot)
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuoteDto {
    #[serde(rename = "type")]
    #[schema(value_type = String)]
    pub reservation_type: ReservationType,
    /// Hours for HOURLY, started days for DAILY
    #[schema(value_type = f64)]
    pub units: Decimal,
    #[schema(value_type = f64)]
    pub unit_price: Decimal,
    #[schema(value_type = f64)]
    pub total_price: Decimal,
}

impl From<PriceQuote> for QuoteDto {
    fn from(q: PriceQuote) -> Self {
        Self {
            reservation_type: q.reservation_type,
            units: q.units,
            unit_price: q.unit_price,
            total_price: q.total_price,
        }
    }
}
