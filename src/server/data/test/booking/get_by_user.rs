use super::*;

/// Tests that a user's bookings come back newest first and exclude other users.
///
/// Expected: Ok with the caller's two bookings, newest first
#[tokio::test]
async fn returns_own_bookings_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_travel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, destination) = create_user_and_destination(db).await?;
    let other = factory::create_user(db).await?;

    let now = Utc::now();
    let older = BookingFactory::new(db, user.id, destination.id)
        .created_at(now - Duration::hours(3))
        .build()
        .await?;
    let newer = BookingFactory::new(db, user.id, destination.id)
        .created_at(now)
        .build()
        .await?;
    factory::create_booking(db, other.id, destination.id).await?;

    let repo = BookingRepository::new(db);
    let bookings = repo.get_by_user(user.id).await?;

    let ids: Vec<i32> = bookings.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);

    Ok(())
}
