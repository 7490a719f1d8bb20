use super::*;

/// Tests creating a user and finding it again by email.
///
/// Verifies that the stored row carries the given fields and that lookup by the
/// normalized email returns the same user.
///
/// Expected: Ok with user found by email
#[tokio::test]
async fn creates_user_and_finds_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParam {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            password_hash: "hash".to_string(),
            role: UserRole::User,
        })
        .await?;

    assert_eq!(user.name, "Ana");
    assert_eq!(user.role, UserRole::User);
    assert!(user.avatar_url.is_none());

    let found = repo.find_by_email("ana@example.com").await?.unwrap();
    assert_eq!(found.id, user.id);

    Ok(())
}

/// Tests that a second account with the same email is rejected.
///
/// Expected: Err from unique constraint
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let param = CreateUserParam {
        name: "Ana".to_string(),
        email: "ana@example.com".to_string(),
        password_hash: "hash".to_string(),
        role: UserRole::User,
    };
    repo.create(param.clone()).await?;

    let result = repo.create(param).await;

    assert!(result.is_err());

    Ok(())
}
