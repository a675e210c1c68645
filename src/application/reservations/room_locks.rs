//! Per-room write serialization
//!
//! Conflict checking reads the store and then writes to it. Holding the
//! room's guard across both steps keeps two overlapping bookings for the same
//! room from passing the check concurrently. The guard is process-local.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};

#[derive(Default)]
pub struct RoomLocks {
    locks: DashMap<i32, Arc<Mutex<()>>>,
}

impl RoomLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to `room_id`.
    pub async fn acquire(&self, room_id: i32) -> RoomGuard<'_> {
        // The shard guard must be released before awaiting the mutex.
        let lock = self
            .locks
            .entry(room_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        RoomGuard {
            locks: &self.locks,
            room_id,
            guard: Some(lock.lock_owned().await),
        }
    }

    /// Number of rooms currently held or waited on
    pub fn tracked_rooms(&self) -> usize {
        self.locks.len()
    }
}

/// Exclusive access to one room. Dropping it releases the room and forgets
/// the room's mutex once nobody else holds or awaits it.
pub struct RoomGuard<'a> {
    locks: &'a DashMap<i32, Arc<Mutex<()>>>,
    room_id: i32,
    guard: Option<OwnedMutexGuard<()>>,
}

impl RoomGuard<'_> {
    pub fn room_id(&self) -> i32 {
        self.room_id
    }
}

impl Drop for RoomGuard<'_> {
    fn drop(&mut self) {
        // Release first so our own Arc no longer counts.
        self.guard.take();
        self.locks
            .remove_if(&self.room_id, |_, lock| Arc::strong_count(lock) == 1);
    }
}
