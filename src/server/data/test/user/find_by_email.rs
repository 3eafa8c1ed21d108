use super::*;

/// Tests looking a user up by email.
///
/// Expected: Ok(Some) for the registered address, Ok(None) otherwise
#[tokio::test]
async fn finds_exact_address() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = UserFactory::new(db).email("murray@example.com").build().await?;

    let repo = UserRepository::new(db);

    let found = repo.find_by_email("murray@example.com").await?;
    assert_eq!(found.map(|u| u.id), Some(created.id));
    assert!(repo.find_by_email("thomson@example.com").await?.is_none());

    Ok(())
}
