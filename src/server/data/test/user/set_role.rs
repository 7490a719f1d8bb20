use super::*;

/// Tests promoting a user to admin.
///
/// Expected: Ok(Some) with admin role
#[tokio::test]
async fn promotes_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo.set_role(user.id, UserRole::Admin).await?.unwrap();

    assert!(updated.is_admin());

    Ok(())
}

/// Tests setting the role of a missing user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(repo.set_role(42, UserRole::Admin).await?.is_none());

    Ok(())
}
