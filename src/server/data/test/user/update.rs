use super::*;

/// Tests that only the provided profile fields change.
///
/// Expected: Ok with name and phone updated, email untouched
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update(
            existing.id,
            UserChanges {
                name: Some("Renamed".to_string()),
                phone: Some("+351 900 000 000".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.phone.as_deref(), Some("+351 900 000 000"));
    assert_eq!(updated.email, existing.email);
    assert_eq!(updated.password_hash, existing.password);

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo.update(999, UserChanges::default()).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
