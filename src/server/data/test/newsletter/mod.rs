use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::NotificationStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory::subscriber::create_subscriber};

use crate::server::{
    data::{notification::NotificationRepository, subscriber::SubscriberRepository},
    model::newsletter::CreateNotificationParams,
};

mod notification;
mod subscriber;
