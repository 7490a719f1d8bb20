//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They enforce the business
//! rules (uniqueness checks, ownership, booking codes, rating recomputation), coordinate
//! several repository calls where an operation spans tables, and work with domain models
//! rather than DTOs or entity models.

pub mod admin;
pub mod auth;
pub mod booking;
pub mod destination;
pub mod newsletter;
pub mod password;
pub mod review;
pub mod token;

#[cfg(test)]
mod test;
