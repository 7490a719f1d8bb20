use super::*;

/// Tests a partial review update.
///
/// Expected: Ok with rating changed and comment untouched
#[tokio::test]
async fn updates_rating_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_travel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, destination) = create_user_and_destination(db).await?;
    let review = factory::create_review(db, user.id, destination.id, 5).await?;

    let repo = ReviewRepository::new(db);
    let updated = repo
        .update(
            review.id,
            UpdateReviewParams {
                rating: Some(2),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.rating, 2);
    assert_eq!(updated.comment, review.comment);
    assert!(updated.is_published);

    Ok(())
}

/// Tests unpublishing and deleting.
///
/// Expected: Ok with the review hidden, then removed
#[tokio::test]
async fn unpublishes_and_deletes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_travel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, destination) = create_user_and_destination(db).await?;
    let review = factory::create_review(db, user.id, destination.id, 5).await?;

    let repo = ReviewRepository::new(db);
    let hidden = repo
        .update(review.id, UpdateReviewParams::publish(false))
        .await?
        .unwrap();
    assert!(!hidden.is_published);

    assert!(repo.delete(review.id).await?);
    assert!(!repo.delete(review.id).await?);
    assert!(repo.find_by_id(review.id).await?.is_none());

    Ok(())
}
