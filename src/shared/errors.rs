use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Validation: {0}")]
    Validation(String),

    #[error("Date conflict: room {room_id} is already reserved for this period")]
    ReservationConflict {
        room_id: i32,
        /// Ids of the reservations that overlap the requested slot
        conflicting_ids: Vec<i32>,
    },

    #[error(transparent)]
    Storage(#[from] InfraError),
}

impl DomainError {
    pub fn reservation_not_found(id: i32) -> Self {
        Self::NotFound {
            entity: "Reservation",
            field: "id",
            value: id.to_string(),
        }
    }

    /// Whether this error is likely transient (e.g. DB connection lost)
    /// and the operation may succeed if retried by the caller.
    pub fn is_transient(&self) -> bool {
        matches!(self, DomainError::Storage(InfraError::Database(_)))
    }
}

#[derive(Debug, Error)]
pub enum InfraError {
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// A stored row could not be mapped back into the domain model
    #[error("Corrupt record: {0}")]
    Corrupt(String),
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        DomainError::Storage(InfraError::Database(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflict_message_names_the_room() {
        let err = DomainError::ReservationConflict {
            room_id: 5,
            conflicting_ids: vec![1, 2],
        };
        assert_eq!(
            err.to_string(),
            "Date conflict: room 5 is already reserved for this period"
        );
    }

    #[test]
    fn only_database_errors_are_transient() {
        let db = DomainError::from(sea_orm::DbErr::Custom("connection reset".into()));
        assert!(db.is_transient());

        let corrupt = DomainError::from(InfraError::Corrupt("bad price".into()));
        assert!(!corrupt.is_transient());
        assert!(!DomainError::reservation_not_found(9).is_transient());
    }

    #[test]
    fn not_found_message() {
        assert_eq!(
            DomainError::reservation_not_found(999).to_string(),
            "Not found: Reservation with id=999"
        );
    }
}
