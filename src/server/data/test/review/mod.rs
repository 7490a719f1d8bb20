use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, helpers::create_user_and_destination, review::ReviewFactory},
};

use crate::server::{
    data::review::ReviewRepository,
    model::review::{CreateReviewParams, RatingSummary, UpdateReviewParams},
};

mod create;
mod get_published_by_destination;
mod rating_summary;
mod update;
