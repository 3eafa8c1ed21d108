use super::*;

/// Tests removing an existing record.
///
/// Verifies that the removed record is returned and no longer stored.
///
/// Expected: Ok(Some(station)) and the station is gone
#[tokio::test]
async fn returns_removed_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Station)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let station = StationFactory::new(db).name("gone").build().await?;

    let repo = CrudRepository::<entity::prelude::Station>::new(db);
    let removed = repo.remove("gone".to_string()).await?;

    assert_eq!(removed, Some(station));
    assert!(repo.get("gone".to_string()).await?.is_none());

    Ok(())
}

/// Tests removing a record that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_key() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Station)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CrudRepository::<entity::prelude::Station>::new(db);
    let removed = repo.remove("nowhere".to_string()).await?;

    assert!(removed.is_none());

    Ok(())
}
