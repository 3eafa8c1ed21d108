use super::*;

/// Tests an active user against the ActiveUser permission.
///
/// Expected: Ok(User)
#[tokio::test]
async fn grants_access_to_active_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let config = Config::test();
    let user = factory::create_user(db).await?;

    let token = AuthService::new(db, &config).issue_token(user.id)?;
    let headers = bearer(&token);
    let result = AuthGuard::new(db, &config, &headers)
        .require(&[Permission::ActiveUser])
        .await?;

    assert_eq!(result.id, user.id);
    assert!(result.is_active);

    Ok(())
}

/// Tests a deactivated user against the ActiveUser permission.
///
/// Expected: Err(AuthError::InactiveUser)
#[tokio::test]
async fn denies_inactive_user() -> Result<(), AppError> {
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
    let result = AuthGuard::new(db, &config, &headers)
        .require(&[Permission::ActiveUser])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::InactiveUser(id))) => assert_eq!(id, user.id),
        other => panic!("Expected InactiveUser error, got: {:?}", other.map(|u| u.id)),
    }

    Ok(())
}
