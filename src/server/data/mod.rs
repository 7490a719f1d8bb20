//! Database repository layer for all domain entities.
//!
//! Each repository borrows the database connection and performs the CRUD operations for
//! one domain. Repositories use SeaORM entity models internally and return domain models
//! from `server::model`, so services never see entity types. Related rows are loaded with
//! separate batched queries rather than joins.

pub mod booking;
pub mod destination;
pub mod notification;
pub mod review;
pub mod subscriber;
pub mod user;

#[cfg(test)]
mod test;
