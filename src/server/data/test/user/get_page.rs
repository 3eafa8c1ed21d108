use super::*;

/// Tests paging through users.
///
/// Verifies that users come back ordered by id and that the count covers
/// every user, not just the page.
///
/// Expected: Ok with the second and third users and a count of 4
#[tokio::test]
async fn pages_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut ids = Vec::new();
    for _ in 0..4 {
        ids.push(factory::create_user(db).await?.id);
    }

    let repo = UserRepository::new(db);
    let page = repo.get_page(1, 2).await?;

    assert_eq!(page.count, 4);
    assert_eq!(page.skip, 1);
    assert_eq!(page.limit, 2);
    let page_ids: Vec<_> = page.results.iter().map(|u| u.id).collect();
    assert_eq!(page_ids, ids[1..3].to_vec());

    Ok(())
}
