use super::*;

/// Tests overwriting status fields.
///
/// Moves a booking straight from pending to completed, which is allowed.
///
/// Expected: Ok with the given status, payment status and transaction ID
#[tokio::test]
async fn overwrites_given_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_travel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, destination) = create_user_and_destination(db).await?;
    let booking = factory::create_booking(db, user.id, destination.id).await?;

    let repo = BookingRepository::new(db);
    let updated = repo
        .update_status(UpdateBookingStatusParams {
            id: booking.id,
            status: Some(BookingStatus::Completed),
            payment_status: Some(PaymentStatus::Paid),
            transaction_id: Some("TXN-1".to_string()),
        })
        .await?
        .unwrap();

    assert_eq!(updated.status, BookingStatus::Completed);
    assert_eq!(updated.payment_status, PaymentStatus::Paid);
    assert_eq!(updated.transaction_id.as_deref(), Some("TXN-1"));

    Ok(())
}

/// Tests that omitted fields are left as they were.
///
/// Expected: Ok with only the status changed
#[tokio::test]
async fn leaves_omitted_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_travel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, destination) = create_user_and_destination(db).await?;
    let booking = BookingFactory::new(db, user.id, destination.id)
        .payment_status(PaymentStatus::Failed)
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let updated = repo
        .update_status(UpdateBookingStatusParams {
            id: booking.id,
            status: Some(BookingStatus::Cancelled),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(updated.status, BookingStatus::Cancelled);
    assert_eq!(updated.payment_status, PaymentStatus::Failed);

    Ok(())
}

/// Tests updating a booking that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_travel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BookingRepository::new(db);
    let result = repo
        .update_status(UpdateBookingStatusParams {
            id: 404,
            ..Default::default()
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
