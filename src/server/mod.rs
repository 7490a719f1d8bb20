//! TripNest Studio API server.
//!
//! Layers, outermost first:
//!
//! - `router` maps paths to handlers and serves the OpenAPI document
//! - `controller/` authenticates through `middleware::auth`, validates DTOs and shapes responses
//! - `service/` holds the business rules: slugs, booking codes, rating recompute, role checks
//! - `data/` owns every query and converts entities into `model/` domain types
//!
//! `error/` maps failures of any layer onto `{message}` responses. `config`, `state` and
//! `startup` wire the process together: environment, shared handles, database
//! migrations and HTTP layers.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
