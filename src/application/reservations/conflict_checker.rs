//! Overlap detection against a room's existing bookings

use std::sync::Arc;

use crate::domain::{DomainResult, Reservation, ReservationRepository, TimeSlot};

/// Finds reservations that would collide with a candidate slot.
///
/// Pure query: the store does the range filtering, this type only applies
/// self-exclusion on top.
#[derive(Clone)]
pub struct ConflictChecker {
    repository: Arc<dyn ReservationRepository>,
}

impl ConflictChecker {
    pub fn new(repository: Arc<dyn ReservationRepository>) -> Self {
        Self { repository }
    }

    /// Every reservation on `room_id` overlapping `slot`.
    ///
    /// An unknown room simply has no reservations and yields an empty set.
    pub async fn find_conflicts(
        &self,
        room_id: i32,
        slot: &TimeSlot,
    ) -> DomainResult<Vec<Reservation>> {
        self.repository.find_conflicts(room_id, slot).await
    }

    /// Like [`find_conflicts`](Self::find_conflicts), but a reservation never
    /// conflicts with itself: the entry with id `reservation_id` is dropped.
    pub async fn find_conflicts_excluding(
        &self,
        room_id: i32,
        slot: &TimeSlot,
        reservation_id: i32,
    ) -> DomainResult<Vec<Reservation>> {
        let mut conflicts = self.find_conflicts(room_id, slot).await?;
        conflicts.retain(|r| r.id != reservation_id);
        Ok(conflicts)
    }
}
