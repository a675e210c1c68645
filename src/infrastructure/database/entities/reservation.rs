//! Reservation entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "reservations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub room_id: i32,
    pub client_id: i32,

    /// Inclusive start of the booked slot
    pub start_date: DateTimeUtc,
    /// Exclusive end of the booked slot
    pub end_date: DateTimeUtc,

    /// Billing type: HOURLY, DAILY
    pub reservation_type: String,

    /// Exact decimal text, e.g. "150.50"
    pub total_price: String,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
