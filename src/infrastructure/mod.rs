//! Infrastructure layer - storage adapters

pub mod database;
pub mod storage;

pub use database::{init_database, DatabaseConfig, SeaOrmReservationRepository};
pub use storage::InMemoryReservationRepository;
