use super::*;

fn params(user_id: i32, destination_id: i32) -> CreateReviewParams {
    CreateReviewParams {
        user_id,
        destination_id,
        rating: 4,
        title: Some("Lovely".to_string()),
        comment: "Great food and friendly people.".to_string(),
        images: Vec::new(),
    }
}

/// Tests that new reviews are published immediately.
///
/// Expected: Ok with `is_published` true and lookup by author and destination working
#[tokio::test]
async fn creates_published_review() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_travel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, destination) = create_user_and_destination(db).await?;

    let repo = ReviewRepository::new(db);
    let review = repo.create(params(user.id, destination.id)).await?;

    assert!(review.is_published);
    assert_eq!(review.rating, 4);

    let found = repo
        .find_by_user_and_destination(user.id, destination.id)
        .await?
        .unwrap();
    assert_eq!(found.id, review.id);

    Ok(())
}

/// Tests the one-review-per-user-per-destination constraint.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_second_review_for_same_destination() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_travel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, destination) = create_user_and_destination(db).await?;

    let repo = ReviewRepository::new(db);
    repo.create(params(user.id, destination.id)).await?;
    let result = repo.create(params(user.id, destination.id)).await;

    assert!(result.is_err());

    Ok(())
}
