use super::*;

/// Tests flipping the active flag twice.
///
/// Expected: Ok with inactive after the first toggle and active after the second
#[tokio::test]
async fn flips_active_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Destination)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let destination = factory::create_destination(db).await?;

    let repo = DestinationRepository::new(db);

    let first = repo.toggle_active(destination.id).await?.unwrap();
    assert!(!first.is_active);

    let second = repo.toggle_active(destination.id).await?.unwrap();
    assert!(second.is_active);

    Ok(())
}

/// Tests toggling a missing destination.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_destination() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Destination)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DestinationRepository::new(db);

    assert!(repo.toggle_active(5).await?.is_none());

    Ok(())
}
