use super::*;

/// Tests slug collision detection with and without an excluded ID.
///
/// Expected: Ok(true) for another row's slug, Ok(false) when that row is excluded
#[tokio::test]
async fn detects_taken_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Destination)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let destination = DestinationFactory::new(db).slug("bali-escape").build().await?;

    let repo = DestinationRepository::new(db);

    assert!(repo.slug_taken("bali-escape", None).await?);
    assert!(!repo.slug_taken("bali-escape", Some(destination.id)).await?);
    assert!(!repo.slug_taken("alpine-trek", None).await?);

    Ok(())
}
