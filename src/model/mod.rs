//! Request and response DTOs shared by the HTTP layer.
//!
//! Every type here is serialized with camelCase field names and carries a utoipa schema
//! so it appears in the generated OpenAPI document.

pub mod admin;
pub mod api;
pub mod booking;
pub mod destination;
pub mod newsletter;
pub mod review;
pub mod user;
