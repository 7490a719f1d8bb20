use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{BookingStatus, PaymentMethod, PaymentStatus};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "booking")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub destination_id: i32,
    #[sea_orm(unique)]
    pub booking_code: String,
    pub start_date: DateTimeUtc,
    pub end_date: DateTimeUtc,
    pub guests_adults: i32,
    pub guests_children: i32,
    pub contact_email: String,
    pub contact_phone: Option<String>,
    pub total_price: f64,
    pub status: BookingStatus,
    pub payment_method: PaymentMethod,
    pub payment_status: PaymentStatus,
    pub transaction_id: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
