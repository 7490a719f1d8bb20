//! Domain models and operation parameters.
//!
//! Repositories convert SeaORM entities into these types at the data boundary, services
//! operate on them, and controllers convert them into DTOs for responses.

pub mod admin;
pub mod booking;
pub mod destination;
pub mod newsletter;
pub mod review;
pub mod user;
