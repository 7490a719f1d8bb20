use super::*;

/// Tests the aggregate over published reviews.
///
/// Ratings 5, 4 and 4 average 4.333..., stored as 4.3. The unpublished 1 is ignored.
///
/// Expected: Ok with average 4.3 and count 3
#[tokio::test]
async fn averages_published_ratings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_travel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let destination = factory::create_destination(db).await?;
    for rating in [5, 4, 4] {
        let user = factory::create_user(db).await?;
        factory::create_review(db, user.id, destination.id, rating).await?;
    }
    let hidden = factory::create_user(db).await?;
    ReviewFactory::new(db, hidden.id, destination.id)
        .rating(1)
        .published(false)
        .build()
        .await?;

    let repo = ReviewRepository::new(db);
    let summary = repo.rating_summary(destination.id).await?;

    assert_eq!(
        summary,
        RatingSummary {
            average: 4.3,
            count: 3
        }
    );

    Ok(())
}

/// Tests the aggregate with no published reviews.
///
/// Expected: Ok with zero average and zero count
#[tokio::test]
async fn zero_without_reviews() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_travel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let destination = factory::create_destination(db).await?;

    let repo = ReviewRepository::new(db);
    let summary = repo.rating_summary(destination.id).await?;

    assert_eq!(
        summary,
        RatingSummary {
            average: 0.0,
            count: 0
        }
    );

    Ok(())
}
