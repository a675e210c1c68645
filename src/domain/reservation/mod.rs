//! Reservation aggregate
//!
//! Contains the Reservation entity, its booking slot, pricing, and the
//! repository interface.

pub mod model;
pub mod pricing;
pub mod repository;
pub mod slot;

pub use model::{NewReservation, Reservation, ReservationType};
pub use pricing::{PriceQuote, RoomRates};
pub use repository::ReservationRepository;
pub use slot::TimeSlot;
