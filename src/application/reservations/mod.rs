//! Reservation use cases

pub mod conflict_checker;
pub mod room_locks;
pub mod service;

pub use conflict_checker::ConflictChecker;
pub use room_locks::{RoomGuard, RoomLocks};
pub use service::ReservationService;
