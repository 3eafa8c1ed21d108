use super::*;

/// Tests a partial update.
///
/// Verifies that only the fields set on the active model are written and
/// every other column keeps its stored value.
///
/// Expected: Ok with record_count changed and title unchanged
#[tokio::test]
async fn writes_only_set_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DataSource)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let data_source = DataSourceFactory::new(db)
        .title("Catalogue of Life")
        .record_count(10)
        .build()
        .await?;

    let repo = CrudRepository::<entity::prelude::DataSource>::new(db);
    let updated = repo
        .update(entity::data_source::ActiveModel {
            id: ActiveValue::Unchanged(data_source.id),
            record_count: ActiveValue::Set(Some(42)),
            ..Default::default()
        })
        .await?;

    assert_eq!(updated.record_count, Some(42));
    assert_eq!(updated.title, "Catalogue of Life");

    let stored = repo.get(data_source.id).await?.unwrap();
    assert_eq!(stored.record_count, Some(42));
    assert_eq!(stored.title, "Catalogue of Life");

    Ok(())
}

/// Tests updating a record that does not exist.
///
/// Expected: Err(DbErr::RecordNotUpdated)
#[tokio::test]
async fn fails_for_missing_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DataSource)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CrudRepository::<entity::prelude::DataSource>::new(db);
    let result = repo
        .update(entity::data_source::ActiveModel {
            id: ActiveValue::Unchanged(404),
            title: ActiveValue::Set("Missing".to_string()),
            ..Default::default()
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotUpdated)));

    Ok(())
}
