use super::*;

/// Tests retrieving a record by primary key.
///
/// Verifies that the generic repository returns the stored station when
/// looked up by its name.
///
/// Expected: Ok(Some(station))
#[tokio::test]
async fn returns_record_by_primary_key() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Station)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let station = StationFactory::new(db).name("1").build().await?;

    let repo = CrudRepository::<entity::prelude::Station>::new(db);
    let result = repo.get("1".to_string()).await?;

    assert_eq!(result, Some(station));

    Ok(())
}

/// Tests retrieving a missing record.
///
/// Verifies that looking up an unknown primary key returns None instead of
/// an error.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_key() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DataSource)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CrudRepository::<entity::prelude::DataSource>::new(db);
    let result = repo.get(999).await?;

    assert!(result.is_none());

    Ok(())
}
