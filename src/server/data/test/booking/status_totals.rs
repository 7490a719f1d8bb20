use super::*;

/// Tests per-status counts and revenue.
///
/// Revenue sums every booking in the status, paid or not.
///
/// Expected: Ok with pending 2 / 800.0 and confirmed 1 / 1000.0
#[tokio::test]
async fn groups_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_travel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, destination) = create_user_and_destination(db).await?;
    BookingFactory::new(db, user.id, destination.id)
        .total_price(300.0)
        .build()
        .await?;
    BookingFactory::new(db, user.id, destination.id)
        .total_price(500.0)
        .build()
        .await?;
    BookingFactory::new(db, user.id, destination.id)
        .total_price(1000.0)
        .status(BookingStatus::Confirmed)
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let totals = repo.status_totals().await?;

    assert_eq!(totals.len(), 2);
    let pending = totals
        .iter()
        .find(|t| t.status == BookingStatus::Pending)
        .unwrap();
    assert_eq!(pending.count, 2);
    assert_eq!(pending.revenue, 800.0);
    let confirmed = totals
        .iter()
        .find(|t| t.status == BookingStatus::Confirmed)
        .unwrap();
    assert_eq!(confirmed.count, 1);
    assert_eq!(confirmed.revenue, 1000.0);

    Ok(())
}

/// Tests totals over an empty table.
///
/// Expected: Ok with no rows
#[tokio::test]
async fn empty_without_bookings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_travel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BookingRepository::new(db);

    assert!(repo.status_totals().await?.is_empty());

    Ok(())
}
