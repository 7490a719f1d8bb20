use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::{BookingStatus, PaymentMethod, PaymentStatus};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, booking::BookingFactory, helpers::create_user_and_destination},
};

use crate::server::{
    data::booking::BookingRepository,
    model::booking::{CreateBookingParams, UpdateBookingStatusParams},
};

mod create;
mod get_all;
mod get_by_user;
mod status_totals;
mod update_status;
mod with_relations;
