use super::*;

/// Tests creating a user.
///
/// Verifies that the given hash is stored and the plain text password is
/// never written.
///
/// Expected: Ok with an assigned id and the given hash
#[tokio::test]
async fn stores_hashed_password() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(create_params("diver@example.com"), "$argon2id$hash".to_string())
        .await?;

    assert!(user.id > 0);
    assert_eq!(user.email, "diver@example.com");
    assert_eq!(user.hashed_password, "$argon2id$hash");
    assert!(user.is_active);
    assert!(!user.is_superuser);

    Ok(())
}

/// Tests creating two users with the same email.
///
/// Expected: Err from the unique constraint
#[tokio::test]
async fn fails_for_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db).email("diver@example.com").build().await?;

    let repo = UserRepository::new(db);
    let result = repo
        .create(create_params("diver@example.com"), "hash".to_string())
        .await;

    assert!(result.is_err());

    Ok(())
}
