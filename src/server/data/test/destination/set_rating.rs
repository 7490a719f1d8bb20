use super::*;

/// Tests writing the rating aggregate.
///
/// Expected: Ok with both rating columns replaced
#[tokio::test]
async fn writes_rating_columns() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Destination)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let destination = factory::create_destination(db).await?;

    let repo = DestinationRepository::new(db);
    repo.set_rating(
        destination.id,
        RatingSummary {
            average: 4.3,
            count: 3,
        },
    )
    .await?;

    let stored = repo.find_by_id(destination.id).await?.unwrap();
    assert_eq!(stored.rating_average, 4.3);
    assert_eq!(stored.rating_count, 3);

    Ok(())
}

/// Tests writing the aggregate for a destination that no longer exists.
///
/// Expected: Ok(()) with nothing written
#[tokio::test]
async fn skips_missing_destination() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Destination)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DestinationRepository::new(db);
    let result = repo
        .set_rating(
            77,
            RatingSummary {
                average: 5.0,
                count: 1,
            },
        )
        .await;

    assert!(result.is_ok());

    Ok(())
}
