use super::*;

/// Tests that featured listing returns active featured destinations by rating.
///
/// Expected: Ok with the higher rated destination first and the inactive one absent
#[tokio::test]
async fn returns_active_featured_by_rating() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Destination)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let good = DestinationFactory::new(db)
        .featured(true)
        .rating(4.1, 3)
        .build()
        .await?;
    let best = DestinationFactory::new(db)
        .featured(true)
        .rating(4.9, 8)
        .build()
        .await?;
    DestinationFactory::new(db)
        .featured(true)
        .rating(5.0, 1)
        .active(false)
        .build()
        .await?;
    factory::create_destination(db).await?;

    let repo = DestinationRepository::new(db);
    let featured = repo.get_featured(6).await?;

    let ids: Vec<i32> = featured.iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![best.id, good.id]);

    Ok(())
}

/// Tests that the limit caps the result.
///
/// Expected: Ok with exactly `limit` destinations
#[tokio::test]
async fn respects_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Destination)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..4 {
        DestinationFactory::new(db).featured(true).build().await?;
    }

    let repo = DestinationRepository::new(db);

    assert_eq!(repo.get_featured(3).await?.len(), 3);

    Ok(())
}
