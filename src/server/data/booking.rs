//! Booking data repository.
//!
//! Bookings are never deleted. Status and payment columns are overwritten directly with
//! no transition checks.

use std::collections::HashMap;

use chrono::Utc;
use entity::sea_orm_active_enums::{BookingStatus, PaymentStatus};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, ExprTrait, FromQueryResult, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::{
    admin::StatusTotals,
    booking::{Booking, BookingWithRelations, CreateBookingParams, UpdateBookingStatusParams},
    destination::Destination,
    user::User,
};

#[derive(Debug, FromQueryResult)]
struct StatusTotalsRow {
    status: BookingStatus,
    count: i64,
    revenue: Option<f64>,
}

pub struct BookingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a pending, unpaid booking under the given code.
    ///
    /// # Returns
    /// - `Ok(Booking)` - The created booking
    /// - `Err(DbErr)` - Database error, including a unique violation on the code
    pub async fn create(
        &self,
        params: CreateBookingParams,
        booking_code: String,
    ) -> Result<Booking, DbErr> {
        let now = Utc::now();
        let entity = entity::booking::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            destination_id: ActiveValue::Set(params.destination_id),
            booking_code: ActiveValue::Set(booking_code),
            start_date: ActiveValue::Set(params.start_date),
            end_date: ActiveValue::Set(params.end_date),
            guests_adults: ActiveValue::Set(params.guests_adults),
            guests_children: ActiveValue::Set(params.guests_children),
            contact_email: ActiveValue::Set(params.contact_email),
            contact_phone: ActiveValue::Set(params.contact_phone),
            total_price: ActiveValue::Set(params.total_price),
            status: ActiveValue::Set(BookingStatus::Pending),
            payment_method: ActiveValue::Set(params.payment_method),
            payment_status: ActiveValue::Set(PaymentStatus::Pending),
            transaction_id: ActiveValue::Set(None),
            notes: ActiveValue::Set(params.notes),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Booking::from_entity(entity))
    }

    pub async fn code_exists(&self, booking_code: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Booking::find()
            .filter(entity::booking::Column::BookingCode.eq(booking_code))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Booking>, DbErr> {
        let entity = entity::prelude::Booking::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Booking::from_entity))
    }

    /// Gets a user's bookings, newest first.
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Booking>, DbErr> {
        let entities = entity::prelude::Booking::find()
            .filter(entity::booking::Column::UserId.eq(user_id))
            .order_by_desc(entity::booking::Column::CreatedAt)
            .order_by_desc(entity::booking::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Booking::from_entity).collect())
    }

    /// Gets all bookings, newest first, optionally restricted to one status.
    pub async fn get_all(&self, status: Option<BookingStatus>) -> Result<Vec<Booking>, DbErr> {
        let mut query = entity::prelude::Booking::find();

        if let Some(status) = status {
            query = query.filter(entity::booking::Column::Status.eq(status));
        }

        let entities = query
            .order_by_desc(entity::booking::Column::CreatedAt)
            .order_by_desc(entity::booking::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Booking::from_entity).collect())
    }

    /// Gets the most recently created bookings.
    pub async fn get_recent(&self, limit: u64) -> Result<Vec<Booking>, DbErr> {
        let entities = entity::prelude::Booking::find()
            .order_by_desc(entity::booking::Column::CreatedAt)
            .order_by_desc(entity::booking::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Booking::from_entity).collect())
    }

    /// Loads the owner and destination of each booking.
    ///
    /// Users and destinations are fetched with one query each. A booking whose user or
    /// destination was deleted gets `None` for that side.
    ///
    /// # Arguments
    /// - `bookings` - Bookings to enrich, order is preserved
    /// - `with_user` - Whether to load owners; user listings skip it
    pub async fn with_relations(
        &self,
        bookings: Vec<Booking>,
        with_user: bool,
    ) -> Result<Vec<BookingWithRelations>, DbErr> {
        let destination_ids: Vec<i32> = bookings.iter().map(|b| b.destination_id).collect();
        let destinations: HashMap<i32, Destination> = entity::prelude::Destination::find()
            .filter(entity::destination::Column::Id.is_in(destination_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|d| (d.id, Destination::from_entity(d)))
            .collect();

        let users: HashMap<i32, User> = if with_user {
            let user_ids: Vec<i32> = bookings.iter().map(|b| b.user_id).collect();
            entity::prelude::User::find()
                .filter(entity::user::Column::Id.is_in(user_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|u| (u.id, User::from_entity(u)))
                .collect()
        } else {
            HashMap::new()
        };

        Ok(bookings
            .into_iter()
            .map(|booking| BookingWithRelations {
                user: users.get(&booking.user_id).cloned(),
                destination: destinations.get(&booking.destination_id).cloned(),
                booking,
            })
            .collect())
    }

    /// Overwrites whichever status fields are provided.
    ///
    /// # Returns
    /// - `Ok(Some(Booking))` - The updated booking
    /// - `Ok(None)` - No booking with that ID
    pub async fn update_status(
        &self,
        params: UpdateBookingStatusParams,
    ) -> Result<Option<Booking>, DbErr> {
        let Some(booking) = entity::prelude::Booking::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::booking::ActiveModel = booking.into();
        if let Some(status) = params.status {
            active_model.status = ActiveValue::Set(status);
        }
        if let Some(payment_status) = params.payment_status {
            active_model.payment_status = ActiveValue::Set(payment_status);
        }
        if let Some(transaction_id) = params.transaction_id {
            active_model.transaction_id = ActiveValue::Set(Some(transaction_id));
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Some(Booking::from_entity(entity)))
    }

    /// Counts bookings and sums `total_price` per status.
    ///
    /// Statuses without bookings are absent from the result.
    pub async fn status_totals(&self) -> Result<Vec<StatusTotals>, DbErr> {
        let rows = entity::prelude::Booking::find()
            .select_only()
            .column(entity::booking::Column::Status)
            .column_as(Expr::col(entity::booking::Column::Id).count(), "count")
            .column_as(Expr::col(entity::booking::Column::TotalPrice).sum(), "revenue")
            .group_by(entity::booking::Column::Status)
            .into_model::<StatusTotalsRow>()
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| StatusTotals {
                status: row.status,
                count: Ord::max(row.count, 0) as u64,
                revenue: row.revenue.unwrap_or(0.0),
            })
            .collect())
    }
}
