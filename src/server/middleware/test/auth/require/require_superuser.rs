use super::*;

/// Tests a superuser against the Superuser permission.
///
/// Expected: Ok(User) with the superuser flag
#[tokio::test]
async fn grants_access_to_superuser() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let config = Config::test();
    let user = factory::user::UserFactory::new(db)
        .superuser(true)
        .build()
        .await?;

    let token = AuthService::new(db, &config).issue_token(user.id)?;
    let headers = bearer(&token);
    let result = AuthGuard::new(db, &config, &headers)
        .require(&[Permission::Superuser])
        .await?;

    assert!(result.is_superuser);

    Ok(())
}

/// Tests a regular user against the Superuser permission.
///
/// Expected: Err(AuthError::NotSuperuser)
#[tokio::test]
async fn denies_regular_user() -> Result<(), AppError> {
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
        .require(&[Permission::ActiveUser, Permission::Superuser])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::NotSuperuser(_)))
    ));

    Ok(())
}

/// Tests a deactivated superuser.
///
/// Verifies that every listed permission is checked, not just the first
/// one that matches.
///
/// Expected: Err(AuthError::InactiveUser)
#[tokio::test]
async fn inactive_superuser_fails_active_check() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let config = Config::test();
    let user = factory::user::UserFactory::new(db)
        .superuser(true)
        .active(false)
        .build()
        .await?;

    let token = AuthService::new(db, &config).issue_token(user.id)?;
    let headers = bearer(&token);
    let result = AuthGuard::new(db, &config, &headers)
        .require(&[Permission::Superuser, Permission::ActiveUser])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InactiveUser(_)))
    ));

    Ok(())
}
