//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let user = factory::user::create_user(&db).await?;
//!     let destination = factory::destination::create_destination(&db).await?;
//!
//!     let review = factory::review::ReviewFactory::new(&db, user.id, destination.id)
//!         .rating(4)
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `destination` - Create destination entities
//! - `booking` - Create booking entities
//! - `review` - Create review entities
//! - `subscriber` - Create newsletter subscriber entities
//! - `helpers` - Unique id generation and multi-entity helpers

pub mod booking;
pub mod destination;
pub mod helpers;
pub mod review;
pub mod subscriber;
pub mod user;

pub use booking::create_booking;
pub use destination::create_destination;
pub use review::create_review;
pub use user::{create_admin, create_user};
