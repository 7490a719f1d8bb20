use super::*;

/// Tests a partial update with a new slug.
///
/// Expected: Ok with changed fields written and others untouched
#[tokio::test]
async fn applies_partial_update() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Destination)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let destination = factory::create_destination(db).await?;

    let repo = DestinationRepository::new(db);
    let updated = repo
        .update(
            UpdateDestinationParams {
                id: destination.id,
                name: Some("Lisbon Lights".to_string()),
                price: Some(1250.0),
                tags: Some(vec!["city".to_string()]),
                ..Default::default()
            },
            Some("lisbon-lights".to_string()),
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Lisbon Lights");
    assert_eq!(updated.slug, "lisbon-lights");
    assert_eq!(updated.price, 1250.0);
    assert_eq!(updated.tags, vec!["city".to_string()]);
    assert_eq!(updated.duration_days, destination.duration_days);
    assert_eq!(updated.city, destination.city);

    Ok(())
}
