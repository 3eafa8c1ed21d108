use super::*;

mod require_active_user;
mod require_superuser;

/// Tests a request without an Authorization header.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn rejects_missing_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let config = Config::test();
    let headers = HeaderMap::new();

    let result = AuthGuard::new(db, &config, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests an Authorization header using another scheme.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn rejects_non_bearer_scheme() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let config = Config::test();
    let mut headers = HeaderMap::new();
    headers.insert(
        header::AUTHORIZATION,
        HeaderValue::from_static("Basic dXNlcjpwYXNz"),
    );

    let result = AuthGuard::new(db, &config, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests a token signed with another secret.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_foreign_signature() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let mut other = Config::test();
    other.secret_key = "another-secret".to_string();
    let token = AuthService::new(db, &other).issue_token(user.id)?;

    let config = Config::test();
    let headers = bearer(&token);
    let result = AuthGuard::new(db, &config, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests a valid token whose user was deleted.
///
/// Expected: Err(AuthError::UserNotFound)
#[tokio::test]
async fn rejects_token_for_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let config = Config::test();

    let token = AuthService::new(db, &config).issue_token(4242)?;
    let headers = bearer(&token);
    let result = AuthGuard::new(db, &config, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotFound(4242)))
    ));

    Ok(())
}

/// Tests an empty permission list.
///
/// Verifies that any user with a valid token passes, even a deactivated one.
///
/// Expected: Ok(User)
#[tokio::test]
async fn empty_permission_list_grants_access() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let config = Config::test();
    let user = factory::user::UserFactory::new(db)
        .active(false)
        .build()
        .await?;

    let token = AuthService::new(db, &config).issue_token(user.id)?;
    let headers = bearer(&token);
    let result = AuthGuard::new(db, &config, &headers).require(&[]).await?;

    assert_eq!(result.id, user.id);

    Ok(())
}
