//! Domain layer: booking entities, value types and storage ports

pub mod reservation;

pub use reservation::{
    NewReservation, PriceQuote, Reservation, ReservationRepository, ReservationType, RoomRates,
    TimeSlot,
};

pub use crate::shared::errors::{DomainError, InfraError};

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
