use super::*;

fn params(user_id: i32, destination_id: i32) -> CreateBookingParams {
    let start = Utc::now() + Duration::days(30);
    CreateBookingParams {
        user_id,
        destination_id,
        start_date: start,
        end_date: start + Duration::days(5),
        guests_adults: 2,
        guests_children: 1,
        contact_email: "ana@example.com".to_string(),
        contact_phone: None,
        total_price: 2400.0,
        payment_method: PaymentMethod::Upi,
        notes: Some("Window seat".to_string()),
    }
}

/// Tests that a new booking starts pending and unpaid.
///
/// Expected: Ok with pending status, pending payment and no transaction
#[tokio::test]
async fn creates_pending_unpaid_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_travel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, destination) = create_user_and_destination(db).await?;

    let repo = BookingRepository::new(db);
    let booking = repo
        .create(params(user.id, destination.id), "TN-ABCD1234".to_string())
        .await?;

    assert_eq!(booking.booking_code, "TN-ABCD1234");
    assert_eq!(booking.status, BookingStatus::Pending);
    assert_eq!(booking.payment_status, PaymentStatus::Pending);
    assert_eq!(booking.payment_method, PaymentMethod::Upi);
    assert!(booking.transaction_id.is_none());
    assert_eq!(booking.guests_adults, 2);
    assert_eq!(booking.guests_children, 1);

    assert!(repo.code_exists("TN-ABCD1234").await?);
    assert!(!repo.code_exists("TN-ZZZZ0000").await?);

    Ok(())
}

/// Tests that booking codes are unique.
///
/// Expected: Err on the second insert with the same code
#[tokio::test]
async fn rejects_duplicate_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_travel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, destination) = create_user_and_destination(db).await?;

    let repo = BookingRepository::new(db);
    repo.create(params(user.id, destination.id), "TN-ABCD1234".to_string())
        .await?;
    let result = repo
        .create(params(user.id, destination.id), "TN-ABCD1234".to_string())
        .await;

    assert!(result.is_err());

    Ok(())
}
