//! HTTP request handlers.
//!
//! Controllers authenticate the caller through `AuthGuard`, validate request DTOs,
//! convert them into service parameters and map the returned domain models back into
//! response DTOs. They hold no business rules of their own.

pub mod admin;
pub mod auth;
pub mod booking;
pub mod destination;
pub mod health;
pub mod newsletter;
pub mod review;

#[cfg(test)]
mod test;
