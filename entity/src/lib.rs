//! SeaORM entities for the TripNest database schema.

pub mod prelude;

pub mod booking;
pub mod destination;
pub mod newsletter_notification;
pub mod review;
pub mod sea_orm_active_enums;
pub mod subscriber;
pub mod user;
