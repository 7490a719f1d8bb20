//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Provides monotonically increasing values for generating unique emails, slugs and
/// booking codes across all factories.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user and a destination, the two rows every booking and review needs.
///
/// # Returns
/// - `Ok((user, destination))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_user_and_destination(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::destination::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let destination = crate::factory::destination::create_destination(db).await?;

    Ok((user, destination))
}
