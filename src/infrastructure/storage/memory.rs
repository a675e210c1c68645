//! In-memory reservation store

use std::sync::atomic::{AtomicI32, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use tracing::debug;

use crate::domain::{
    DomainError, DomainResult, NewReservation, Reservation, ReservationRepository, TimeSlot,
};

/// In-memory storage for development and testing
pub struct InMemoryReservationRepository {
    reservations: DashMap<i32, Reservation>,
    id_counter: AtomicI32,
}

impl InMemoryReservationRepository {
    pub fn new() -> Self {
        Self {
            reservations: DashMap::new(),
            id_counter: AtomicI32::new(1),
        }
    }

    pub fn len(&self) -> usize {
        self.reservations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reservations.is_empty()
    }
}

impl Default for InMemoryReservationRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReservationRepository for InMemoryReservationRepository {
    async fn create(&self, reservation: NewReservation) -> DomainResult<Reservation> {
        let id = self.id_counter.fetch_add(1, Ordering::SeqCst);
        let stored = Reservation::from_new(id, reservation, Utc::now());
        debug!(id, room_id = stored.room_id, "Storing reservation in memory");
        self.reservations.insert(id, stored.clone());
        Ok(stored)
    }

    async fn find_all(&self) -> DomainResult<Vec<Reservation>> {
        let mut all: Vec<Reservation> = self
            .reservations
            .iter()
            .map(|e| e.value().clone())
            .collect();
        all.sort_by_key(|r| r.id);
        Ok(all)
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Reservation>> {
        Ok(self.reservations.get(&id).map(|r| r.clone()))
    }

    async fn find_conflicts(
        &self,
        room_id: i32,
        slot: &TimeSlot,
    ) -> DomainResult<Vec<Reservation>> {
        let mut hits: Vec<Reservation> = self
            .reservations
            .iter()
            .filter(|e| e.value().conflicts_with(room_id, slot))
            .map(|e| e.value().clone())
            .collect();
        hits.sort_by_key(|r| r.id);
        Ok(hits)
    }

    async fn update(&self, id: i32, reservation: NewReservation) -> DomainResult<Reservation> {
        let mut entry = self
            .reservations
            .get_mut(&id)
            .ok_or_else(|| DomainError::reservation_not_found(id))?;
        entry.replace_with(reservation, Utc::now());
        Ok(entry.clone())
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        self.reservations
            .remove(&id)
            .ok_or_else(|| DomainError::reservation_not_found(id))?;
        Ok(())
    }
}
