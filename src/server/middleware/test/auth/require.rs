use super::*;

/// Tests admin user successfully passes admin permission check.
///
/// Expected: Ok(User) with admin role
#[tokio::test]
async fn grants_access_to_admin_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new("secret");

    let admin = factory::user::UserFactory::new(db)
        .name("AdminUser")
        .role(UserRole::Admin)
        .build()
        .await?;

    let headers = bearer(&tokens.issue(admin.id, admin.role)?);
    let user = AuthGuard::new(db, &tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    assert_eq!(user.id, admin.id);
    assert_eq!(user.name, "AdminUser");
    assert!(user.is_admin());

    Ok(())
}

/// Tests non-admin user is denied admin permission.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_to_non_admin_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new("secret");

    let user = factory::user::create_user(db).await?;

    let headers = bearer(&tokens.issue(user.id, user.role)?);
    let result = AuthGuard::new(db, &tokens, &headers)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(id))) if id == user.id
    ));

    Ok(())
}

/// Tests any signed-in user passes when no permissions are required.
///
/// Expected: Ok(User)
#[tokio::test]
async fn grants_access_without_permissions() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new("secret");

    let user = factory::user::create_user(db).await?;

    let headers = bearer(&tokens.issue(user.id, user.role)?);
    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests the token cookie is accepted when no bearer header is sent.
///
/// Expected: Ok(User)
#[tokio::test]
async fn accepts_token_cookie() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new("secret");

    let user = factory::user::create_user(db).await?;
    let token = tokens.issue(user.id, user.role)?;

    let mut headers = HeaderMap::new();
    headers.insert(
        header::COOKIE,
        HeaderValue::from_str(&format!("token={}", token)).unwrap(),
    );

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await?;

    assert_eq!(result.id, user.id);

    Ok(())
}

/// Tests requests without any token are rejected.
///
/// Expected: Err(AuthError::TokenMissing)
#[tokio::test]
async fn rejects_missing_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new("secret");

    let headers = HeaderMap::new();
    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::TokenMissing))
    ));

    Ok(())
}

/// Tests a valid token whose user was deleted is rejected.
///
/// Expected: Err(AuthError::TokenInvalid)
#[tokio::test]
async fn rejects_token_for_deleted_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new("secret");

    let headers = bearer(&tokens.issue(9999, UserRole::User)?);
    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::TokenInvalid))
    ));

    Ok(())
}
