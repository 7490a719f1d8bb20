use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::DestinationCategory;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::destination::DestinationFactory};

use crate::server::{
    data::destination::DestinationRepository,
    model::{
        destination::{DestinationFilter, DestinationSort, UpdateDestinationParams},
        review::RatingSummary,
    },
};

mod get_featured;
mod get_filtered;
mod set_rating;
mod slug_taken;
mod toggle_active;
mod update;
