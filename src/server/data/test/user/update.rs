use super::*;

/// Tests a partial update.
///
/// Verifies that only the fields present in the params change.
///
/// Expected: Ok(Some) with the new name and the old email and hash
#[tokio::test]
async fn updates_only_given_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = UserFactory::new(db)
        .email("moseley@example.com")
        .hashed_password("old-hash")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let params = UpdateUserParams {
        full_name: Some("Henry Moseley".to_string()),
        ..Default::default()
    };
    let user = repo.update(created.id, params, None).await?.unwrap();

    assert_eq!(user.full_name.as_deref(), Some("Henry Moseley"));
    assert_eq!(user.email, "moseley@example.com");
    assert_eq!(user.hashed_password, "old-hash");

    Ok(())
}

/// Tests replacing the password hash and flags.
///
/// Expected: Ok(Some) with the new hash and flags
#[tokio::test]
async fn replaces_hash_and_flags() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let params = UpdateUserParams {
        is_active: Some(false),
        is_superuser: Some(true),
        ..Default::default()
    };
    let user = repo
        .update(created.id, params, Some("new-hash".to_string()))
        .await?
        .unwrap();

    assert_eq!(user.hashed_password, "new-hash");
    assert!(!user.is_active);
    assert!(user.is_superuser);

    Ok(())
}

/// Tests an update that changes nothing.
///
/// Expected: Ok(Some) with the stored user unchanged
#[tokio::test]
async fn empty_update_returns_stored_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let user = repo
        .update(created.id, UpdateUserParams::default(), None)
        .await?
        .unwrap();

    assert_eq!(user.id, created.id);
    assert_eq!(user.email, created.email);

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo.update(404, UpdateUserParams::default(), None).await?;

    assert!(result.is_none());

    Ok(())
}
