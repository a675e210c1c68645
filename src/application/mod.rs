//! Application layer - booking use cases on top of the domain ports

pub mod reservations;

pub use reservations::{ConflictChecker, ReservationService};
