//! # Room Booking
//!
//! Reservation service for bookable rooms. A room can be reserved by the
//! hour or by the day, and a reservation is rejected when its period overlaps
//! another reservation of the same room.
//!
//! ## Architecture
//!
//! - **domain**: Reservations, time slots, pricing and the repository port
//! - **application**: Conflict checking and the reservation use cases
//! - **infrastructure**: SeaORM (SQLite) and in-memory repositories
//! - **interfaces**: REST API with Swagger documentation
//! - **server**: Runtime wiring, tracing and graceful shutdown

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig};

pub use application::{ConflictChecker, ReservationService};
pub use domain::{DomainError, NewReservation, Reservation, ReservationType, TimeSlot};
pub use infrastructure::{
    init_database, DatabaseConfig, InMemoryReservationRepository, SeaOrmReservationRepository,
};

pub use interfaces::http::create_api_router;
