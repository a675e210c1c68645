//! Reservation lifecycle: create / update / delete guarded by conflict checks

use std::sync::Arc;

use crate::domain::{
    DomainError, DomainResult, NewReservation, Reservation, ReservationRepository,
};

use super::conflict_checker::ConflictChecker;
use super::room_locks::RoomLocks;

/// Commits reservations only when they leave the room's schedule free of
/// overlaps.
///
/// Create and update run check-then-write under the target room's lock.
/// Delete needs no check since removing a booking cannot create an overlap.
pub struct ReservationService {
    repository: Arc<dyn ReservationRepository>,
    checker: ConflictChecker,
    room_locks: RoomLocks,
}

impl ReservationService {
    pub fn new(repository: Arc<dyn ReservationRepository>) -> Self {
        Self {
            checker: ConflictChecker::new(repository.clone()),
            repository,
            room_locks: RoomLocks::new(),
        }
    }

    /// Book a slot. Fails with `ReservationConflict` and writes nothing if
    /// the room is already taken for any part of it.
    pub async fn create(&self, reservation: NewReservation) -> DomainResult<Reservation> {
        let _guard = self.room_locks.acquire(reservation.room_id).await;

        let conflicts = self
            .checker
            .find_conflicts(reservation.room_id, &reservation.slot)
            .await?;
        ensure_no_conflicts(reservation.room_id, &conflicts)?;

        self.repository.create(reservation).await
    }

    /// Replace a reservation wholesale.
    ///
    /// The conflict check targets the revised room and slot and ignores the
    /// reservation itself, so moving within its own slot or resaving it
    /// unchanged always passes.
    pub async fn update(&self, id: i32, reservation: NewReservation) -> DomainResult<Reservation> {
        let _guard = self.room_locks.acquire(reservation.room_id).await;

        let conflicts = self
            .checker
            .find_conflicts_excluding(reservation.room_id, &reservation.slot, id)
            .await?;
        ensure_no_conflicts(reservation.room_id, &conflicts)?;

        self.repository.update(id, reservation).await
    }

    pub async fn delete(&self, id: i32) -> DomainResult<()> {
        self.repository.delete(id).await
    }

    pub async fn get_all(&self) -> DomainResult<Vec<Reservation>> {
        self.repository.find_all().await
    }

    /// Absence is `Ok(None)`, not an error.
    pub async fn get_by_id(&self, id: i32) -> DomainResult<Option<Reservation>> {
        self.repository.find_by_id(id).await
    }
}

fn ensure_no_conflicts(room_id: i32, conflicts: &[Reservation]) -> DomainResult<()> {
    if conflicts.is_empty() {
        return Ok(());
    }
    Err(DomainError::ReservationConflict {
        room_id,
        conflicting_ids: conflicts.iter().map(|r| r.id).collect(),
    })
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ReservationType, TimeSlot};
    use crate::infrastructure::InMemoryReservationRepository;
    use chrono::{DateTime, TimeZone, Utc};
    use rust_decimal::Decimal;

    fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, hour, minute, 0).unwrap()
    }

    fn booking(room_id: i32, from: (u32, u32), to: (u32, u32)) -> NewReservation {
        NewReservation::new(
            room_id,
            42,
            TimeSlot::new(at(from.0, from.1), at(to.0, to.1)).unwrap(),
            ReservationType::Hourly,
            Decimal::new(200, 0),
        )
        .unwrap()
    }

    fn service() -> (ReservationService, Arc<InMemoryReservationRepository>) {
        let repo = Arc::new(InMemoryReservationRepository::new());
        (ReservationService::new(repo.clone()), repo)
    }

    #[tokio::test]
    async fn overlapping_create_is_rejected_without_write() {
        let (svc, repo) = service();
        let existing = svc.create(booking(5, (10, 0), (12, 0))).await.unwrap();

        let err = svc.create(booking(5, (11, 0), (13, 0))).await.unwrap_err();
        match err {
            DomainError::ReservationConflict {
                room_id,
                conflicting_ids,
            } => {
                assert_eq!(room_id, 5);
                assert_eq!(conflicting_ids, vec![existing.id]);
            }
            other => panic!("expected conflict, got {other:?}"),
        }
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn adjacent_create_is_accepted() {
        let (svc, _) = service();
        svc.create(booking(5, (10, 0), (12, 0))).await.unwrap();
        let r = svc.create(booking(5, (12, 0), (14, 0))).await.unwrap();
        assert_eq!(r.slot.start(), at(12, 0));
    }

    #[tokio::test]
    async fn update_within_own_slot_is_accepted() {
        let (svc, _) = service();
        let r = svc.create(booking(5, (10, 0), (12, 0))).await.unwrap();

        let moved = svc.update(r.id, booking(5, (10, 30), (12, 30))).await.unwrap();
        assert_eq!(moved.id, r.id);
        assert_eq!(moved.slot.start(), at(10, 30));
    }

    #[tokio::test]
    async fn resaving_unchanged_never_conflicts_with_itself() {
        let (svc, _) = service();
        let r = svc.create(booking(5, (10, 0), (12, 0))).await.unwrap();
        for _ in 0..3 {
            svc.update(r.id, booking(5, (10, 0), (12, 0))).await.unwrap();
        }
    }

    #[tokio::test]
    async fn update_into_another_booking_is_rejected() {
        let (svc, _) = service();
        let first = svc.create(booking(5, (8, 0), (10, 0))).await.unwrap();
        let second = svc.create(booking(5, (10, 0), (12, 0))).await.unwrap();

        let err = svc
            .update(second.id, booking(5, (9, 0), (11, 0)))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DomainError::ReservationConflict { ref conflicting_ids, .. } if *conflicting_ids == vec![first.id]
        ));

        let unchanged = svc.get_by_id(second.id).await.unwrap().unwrap();
        assert_eq!(unchanged.slot.start(), at(10, 0));
    }

    #[tokio::test]
    async fn moving_rooms_checks_the_new_room() {
        let (svc, _) = service();
        let on_five = svc.create(booking(5, (10, 0), (12, 0))).await.unwrap();
        svc.create(booking(6, (10, 0), (12, 0))).await.unwrap();

        let err = svc
            .update(on_five.id, booking(6, (11, 0), (12, 0)))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::ReservationConflict { room_id: 6, .. }));

        let moved = svc.update(on_five.id, booking(7, (11, 0), (12, 0))).await.unwrap();
        assert_eq!(moved.room_id, 7);
    }

    #[tokio::test]
    async fn update_of_missing_reservation_is_not_found() {
        let (svc, _) = service();
        let err = svc.update(999, booking(5, (10, 0), (11, 0))).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn delete_of_missing_reservation_is_not_found() {
        let (svc, _) = service();
        let err = svc.delete(999).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn deleting_frees_the_slot() {
        let (svc, _) = service();
        let r = svc.create(booking(5, (10, 0), (12, 0))).await.unwrap();
        svc.delete(r.id).await.unwrap();
        svc.create(booking(5, (10, 0), (12, 0))).await.unwrap();
    }

    #[tokio::test]
    async fn same_slot_on_different_rooms_is_fine() {
        let (svc, _) = service();
        svc.create(booking(5, (10, 0), (12, 0))).await.unwrap();
        svc.create(booking(6, (10, 0), (12, 0))).await.unwrap();
        assert_eq!(svc.get_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn get_by_id_absent_is_none() {
        let (svc, _) = service();
        assert!(svc.get_by_id(1).await.unwrap().is_none());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_overlapping_creates_admit_exactly_one() {
        let (svc, repo) = service();
        let svc = Arc::new(svc);

        let attempts: Vec<_> = (0..16u32)
            .map(|i| {
                let svc = svc.clone();
                tokio::spawn(async move {
                    // Staggered starts, all covering 11:00
                    svc.create(booking(5, (10, i % 30), (12, 0))).await
                })
            })
            .collect();

        let mut accepted = 0;
        for attempt in attempts {
            match attempt.await.unwrap() {
                Ok(_) => accepted += 1,
                Err(DomainError::ReservationConflict { .. }) => {}
                Err(other) => panic!("unexpected error: {other:?}"),
            }
        }

        assert_eq!(accepted, 1);
        assert_eq!(repo.len(), 1);
    }
}
