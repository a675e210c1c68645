//! Reservation domain entity

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::slot::TimeSlot;
use crate::domain::{DomainError, DomainResult};

/// How a reservation is billed. Informational only; it does not constrain
/// the length of the booked slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationType {
    Hourly,
    Daily,
}

impl ReservationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hourly => "HOURLY",
            Self::Daily => "DAILY",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "HOURLY" => Some(Self::Hourly),
            "DAILY" => Some(Self::Daily),
            _ => None,
        }
    }
}

impl std::fmt::Display for ReservationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Candidate reservation: everything the caller supplies, no identity yet.
///
/// Used both for creation and as the full replacement payload of an update.
#[derive(Debug, Clone, PartialEq)]
pub struct NewReservation {
    pub room_id: i32,
    pub client_id: i32,
    pub slot: TimeSlot,
    pub reservation_type: ReservationType,
    /// Price computed by the caller; stored as-is
    pub total_price: Decimal,
}

impl NewReservation {
    pub fn new(
        room_id: i32,
        client_id: i32,
        slot: TimeSlot,
        reservation_type: ReservationType,
        total_price: Decimal,
    ) -> DomainResult<Self> {
        if total_price < Decimal::ZERO {
            return Err(DomainError::Validation(format!(
                "totalPrice must not be negative, got {}",
                total_price
            )));
        }
        Ok(Self {
            room_id,
            client_id,
            slot,
            reservation_type,
            total_price,
        })
    }
}

/// A stored booking of one room for one slot
#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    pub id: i32,
    pub room_id: i32,
    pub client_id: i32,
    pub slot: TimeSlot,
    pub reservation_type: ReservationType,
    pub total_price: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Reservation {
    /// Materialize a stored record from a candidate, as a store does on insert.
    pub fn from_new(id: i32, new: NewReservation, now: DateTime<Utc>) -> Self {
        Self {
            id,
            room_id: new.room_id,
            client_id: new.client_id,
            slot: new.slot,
            reservation_type: new.reservation_type,
            total_price: new.total_price,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace every caller-owned field, keeping identity and `created_at`.
    pub fn replace_with(&mut self, new: NewReservation, now: DateTime<Utc>) {
        self.room_id = new.room_id;
        self.client_id = new.client_id;
        self.slot = new.slot;
        self.reservation_type = new.reservation_type;
        self.total_price = new.total_price;
        self.updated_at = now;
    }

    /// Whether this reservation blocks `slot` on `room_id`.
    pub fn conflicts_with(&self, room_id: i32, slot: &TimeSlot) -> bool {
        self.room_id == room_id && self.slot.overlaps(slot)
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn slot(hour: u32, hours: i64) -> TimeSlot {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, hour, 0, 0).unwrap();
        TimeSlot::new(start, start + Duration::hours(hours)).unwrap()
    }

    fn candidate(room_id: i32) -> NewReservation {
        NewReservation::new(room_id, 3, slot(10, 2), ReservationType::Hourly, Decimal::new(2000, 2))
            .unwrap()
    }

    #[test]
    fn type_string_roundtrip() {
        for t in [ReservationType::Hourly, ReservationType::Daily] {
            assert_eq!(ReservationType::parse(t.as_str()), Some(t));
        }
        assert_eq!(ReservationType::parse("WEEKLY"), None);
    }

    #[test]
    fn type_serializes_screaming_case() {
        assert_eq!(
            serde_json::to_string(&ReservationType::Daily).unwrap(),
            "\"DAILY\""
        );
        let t: ReservationType = serde_json::from_str("\"HOURLY\"").unwrap();
        assert_eq!(t, ReservationType::Hourly);
    }

    #[test]
    fn negative_price_is_rejected() {
        let err = NewReservation::new(
            1,
            1,
            slot(10, 1),
            ReservationType::Hourly,
            Decimal::new(-1, 0),
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn zero_price_is_allowed() {
        assert!(NewReservation::new(1, 1, slot(10, 1), ReservationType::Daily, Decimal::ZERO).is_ok());
    }

    #[test]
    fn replace_keeps_identity_and_creation_time() {
        let created = Utc.with_ymd_and_hms(2023, 12, 1, 0, 0, 0).unwrap();
        let mut r = Reservation::from_new(7, candidate(5), created);

        let later = created + Duration::days(1);
        let mut revised = candidate(6);
        revised.slot = slot(14, 3);
        r.replace_with(revised, later);

        assert_eq!(r.id, 7);
        assert_eq!(r.room_id, 6);
        assert_eq!(r.slot, slot(14, 3));
        assert_eq!(r.created_at, created);
        assert_eq!(r.updated_at, later);
    }

    #[test]
    fn conflicts_only_on_same_room() {
        let r = Reservation::from_new(1, candidate(5), Utc::now());
        assert!(r.conflicts_with(5, &slot(11, 2)));
        assert!(!r.conflicts_with(6, &slot(11, 2)));
        assert!(!r.conflicts_with(5, &slot(12, 2)));
    }
}
