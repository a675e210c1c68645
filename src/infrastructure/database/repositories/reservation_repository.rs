//! SeaORM implementation of ReservationRepository

use std::str::FromStr;

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};
use tracing::debug;

use crate::domain::{
    DomainError, DomainResult, InfraError, NewReservation, Reservation, ReservationRepository,
    ReservationType, TimeSlot,
};
use crate::infrastructure::database::entities::reservation;

pub struct SeaOrmReservationRepository {
    db: DatabaseConnection,
}

impl SeaOrmReservationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn corrupt(id: i32, what: impl std::fmt::Display) -> DomainError {
    InfraError::Corrupt(format!("reservation {}: {}", id, what)).into()
}

fn model_to_domain(m: reservation::Model) -> DomainResult<Reservation> {
    let slot = TimeSlot::new(m.start_date, m.end_date).map_err(|e| corrupt(m.id, e))?;
    let reservation_type = ReservationType::parse(&m.reservation_type)
        .ok_or_else(|| corrupt(m.id, format!("unknown type '{}'", m.reservation_type)))?;
    let total_price = Decimal::from_str(&m.total_price)
        .map_err(|e| corrupt(m.id, format!("invalid total_price '{}': {}", m.total_price, e)))?;

    Ok(Reservation {
        id: m.id,
        room_id: m.room_id,
        client_id: m.client_id,
        slot,
        reservation_type,
        total_price,
        created_at: m.created_at,
        updated_at: m.updated_at,
    })
}

fn models_to_domain(models: Vec<reservation::Model>) -> DomainResult<Vec<Reservation>> {
    models.into_iter().map(model_to_domain).collect()
}

/// Copy the caller-owned fields of `r` into `model`.
fn apply_fields(model: &mut reservation::ActiveModel, r: NewReservation) {
    model.room_id = Set(r.room_id);
    model.client_id = Set(r.client_id);
    model.start_date = Set(r.slot.start());
    model.end_date = Set(r.slot.end());
    model.reservation_type = Set(r.reservation_type.as_str().to_string());
    model.total_price = Set(r.total_price.to_string());
}

// ── ReservationRepository impl ──────────────────────────────────

#[async_trait]
impl ReservationRepository for SeaOrmReservationRepository {
    async fn create(&self, r: NewReservation) -> DomainResult<Reservation> {
        debug!(room_id = r.room_id, client_id = r.client_id, "Inserting reservation");

        let now = Utc::now();
        let mut model = reservation::ActiveModel {
            id: NotSet,
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        apply_fields(&mut model, r);

        let inserted = model.insert(&self.db).await?;
        model_to_domain(inserted)
    }

    async fn find_all(&self) -> DomainResult<Vec<Reservation>> {
        let models = reservation::Entity::find()
            .order_by_asc(reservation::Column::Id)
            .all(&self.db)
            .await?;
        models_to_domain(models)
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Reservation>> {
        let model = reservation::Entity::find_by_id(id).one(&self.db).await?;
        model.map(model_to_domain).transpose()
    }

    async fn find_conflicts(
        &self,
        room_id: i32,
        slot: &TimeSlot,
    ) -> DomainResult<Vec<Reservation>> {
        let models = reservation::Entity::find()
            .filter(reservation::Column::RoomId.eq(room_id))
            .filter(reservation::Column::StartDate.lt(slot.end()))
            .filter(reservation::Column::EndDate.gt(slot.start()))
            .order_by_asc(reservation::Column::Id)
            .all(&self.db)
            .await?;
        debug!(room_id, found = models.len(), "Overlap query");
        models_to_domain(models)
    }

    async fn update(&self, id: i32, r: NewReservation) -> DomainResult<Reservation> {
        debug!(id, room_id = r.room_id, "Updating reservation");

        let existing = reservation::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DomainError::reservation_not_found(id))?;

        let mut model: reservation::ActiveModel = existing.into();
        apply_fields(&mut model, r);
        model.updated_at = Set(Utc::now());

        let updated = model.update(&self.db).await?;
        model_to_domain(updated)
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        debug!(id, "Deleting reservation");

        let result = reservation::Entity::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(DomainError::reservation_not_found(id));
        }
        Ok(())
    }
}

// ── Tests ──────────────────────────────────────────────────────
