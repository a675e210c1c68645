//! Price derivation from a room's rates
//!
//! Hourly bookings are charged for the exact fractional number of hours.
//! Daily bookings are charged per started day.

use rust_decimal::Decimal;

use crate::domain::{DomainError, DomainResult};

use super::model::ReservationType;
use super::slot::TimeSlot;

const MILLIS_PER_HOUR: i64 = 60 * 60 * 1000;
const MILLIS_PER_DAY: i64 = 24 * MILLIS_PER_HOUR;

/// Rates a room is rented at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomRates {
    pub price_per_hour: Decimal,
    pub price_per_day: Decimal,
}

/// Priced slot with the quantity that was billed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceQuote {
    pub reservation_type: ReservationType,
    /// Hours (fractional) or started days, depending on the type
    pub units: Decimal,
    pub unit_price: Decimal,
    pub total_price: Decimal,
}

impl RoomRates {
    pub fn new(price_per_hour: Decimal, price_per_day: Decimal) -> Self {
        Self {
            price_per_hour,
            price_per_day,
        }
    }

    /// Fails with `Validation` when the total does not fit in a `Decimal`.
    pub fn quote(
        &self,
        reservation_type: ReservationType,
        slot: &TimeSlot,
    ) -> DomainResult<PriceQuote> {
        let millis = slot.duration().num_milliseconds();
        let (units, unit_price) = match reservation_type {
            ReservationType::Hourly => (
                Decimal::from(millis) / Decimal::from(MILLIS_PER_HOUR),
                self.price_per_hour,
            ),
            ReservationType::Daily => {
                let days = (millis + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY;
                (Decimal::from(days.max(1)), self.price_per_day)
            }
        };

        let total_price = units
            .checked_mul(unit_price)
            .ok_or_else(|| DomainError::Validation("price overflow".to_string()))?;

        Ok(PriceQuote {
            reservation_type,
            units,
            unit_price,
            total_price: total_price.normalize(),
        })
    }
}
