//! Test support for the TripNest workspace.
//!
//! `builder::TestBuilder` creates an in-memory SQLite database holding only the tables a
//! test asks for, and `factory` inserts rows with unique defaults so tests state only the
//! fields they assert on.
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn books_a_trip() {
//!     let test = TestBuilder::new().with_travel_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (user, destination) = factory::helpers::create_user_and_destination(db).await.unwrap();
//!     let booking = factory::booking::create_booking(db, user.id, destination.id).await.unwrap();
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
