use super::*;

/// Tests listing all bookings with and without a status filter.
///
/// Expected: Ok with three bookings unfiltered and one when filtering by confirmed
#[tokio::test]
async fn filters_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_travel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, destination) = create_user_and_destination(db).await?;
    factory::create_booking(db, user.id, destination.id).await?;
    factory::create_booking(db, user.id, destination.id).await?;
    let confirmed = BookingFactory::new(db, user.id, destination.id)
        .status(BookingStatus::Confirmed)
        .build()
        .await?;

    let repo = BookingRepository::new(db);

    assert_eq!(repo.get_all(None).await?.len(), 3);

    let filtered = repo.get_all(Some(BookingStatus::Confirmed)).await?;
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, confirmed.id);

    Ok(())
}

/// Tests that the recent list is capped and newest first.
///
/// Expected: Ok with the two newest of three bookings
#[tokio::test]
async fn recent_is_capped() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_travel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, destination) = create_user_and_destination(db).await?;
    let now = Utc::now();
    let mut ids = Vec::new();
    for hours in [3, 2, 1] {
        let booking = BookingFactory::new(db, user.id, destination.id)
            .created_at(now - Duration::hours(hours))
            .build()
            .await?;
        ids.push(booking.id);
    }

    let repo = BookingRepository::new(db);
    let recent = repo.get_recent(2).await?;

    let recent_ids: Vec<i32> = recent.iter().map(|b| b.id).collect();
    assert_eq!(recent_ids, vec![ids[2], ids[1]]);

    Ok(())
}
