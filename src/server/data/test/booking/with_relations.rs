use super::*;

/// Tests loading owners and destinations for a list of bookings.
///
/// Expected: Ok with both sides populated and input order kept
#[tokio::test]
async fn loads_user_and_destination() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_travel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, destination) = create_user_and_destination(db).await?;
    factory::create_booking(db, user.id, destination.id).await?;

    let repo = BookingRepository::new(db);
    let bookings = repo.get_all(None).await?;
    let enriched = repo.with_relations(bookings, true).await?;

    assert_eq!(enriched.len(), 1);
    assert_eq!(enriched[0].user.as_ref().unwrap().id, user.id);
    assert_eq!(enriched[0].destination.as_ref().unwrap().id, destination.id);

    Ok(())
}

/// Tests a booking whose destination has been deleted.
///
/// Expected: Ok with `destination` None and the booking still present
#[tokio::test]
async fn tolerates_deleted_destination() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_travel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, destination) = create_user_and_destination(db).await?;
    factory::create_booking(db, user.id, destination.id).await?;

    crate::server::data::destination::DestinationRepository::new(db)
        .delete(destination.id)
        .await?;

    let repo = BookingRepository::new(db);
    let bookings = repo.get_by_user(user.id).await?;
    let enriched = repo.with_relations(bookings, false).await?;

    assert_eq!(enriched.len(), 1);
    assert!(enriched[0].destination.is_none());
    assert!(enriched[0].user.is_none());

    Ok(())
}
