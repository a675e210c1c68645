//! Reservation repository interface

use async_trait::async_trait;

use super::model::{NewReservation, Reservation};
use super::slot::TimeSlot;
use crate::domain::DomainResult;

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Insert a reservation, returning the stored row with its id and timestamps
    async fn create(&self, reservation: NewReservation) -> DomainResult<Reservation>;

    /// Find all reservations, ordered by id
    async fn find_all(&self) -> DomainResult<Vec<Reservation>>;

    /// Find reservation by ID
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Reservation>>;

    /// Find every reservation on `room_id` whose slot overlaps `slot`
    async fn find_conflicts(&self, room_id: i32, slot: &TimeSlot)
        -> DomainResult<Vec<Reservation>>;

    /// Replace all caller-owned fields of an existing reservation.
    /// Fails with `NotFound` if `id` does not exist.
    async fn update(&self, id: i32, reservation: NewReservation) -> DomainResult<Reservation>;

    /// Delete a reservation. Fails with `NotFound` if `id` does not exist.
    async fn delete(&self, id: i32) -> DomainResult<()>;
}
