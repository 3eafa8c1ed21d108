use super::*;

/// Tests inserting a data source with an explicit id.
///
/// Expected: Ok with the id taken from the params
#[tokio::test]
async fn inserts_with_given_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DataSource)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DataSourceRepository::new(db);
    let data_source = repo.upsert(upsert_params(9, "World Register of Marine Species")).await?;

    assert_eq!(data_source.id, 9);
    assert_eq!(data_source.title, "World Register of Marine Species");
    assert_eq!(data_source.record_count, Some(100));

    Ok(())
}

/// Tests importing the same data source twice.
///
/// Verifies that the second upsert overwrites the stored columns instead of
/// failing on the primary key.
///
/// Expected: Ok with the new title and a single row
#[tokio::test]
async fn overwrites_existing_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DataSource)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DataSourceRepository::new(db);
    repo.upsert(upsert_params(1, "Catalogue of Life")).await?;

    let mut params = upsert_params(1, "Catalogue of Life 2020");
    params.is_out_link_ready = true;
    params.record_count = None;
    let data_source = repo.upsert(params).await?;

    assert_eq!(data_source.title, "Catalogue of Life 2020");
    assert!(data_source.is_out_link_ready);
    assert_eq!(data_source.record_count, None);
    assert_eq!(entity::prelude::DataSource::find().count(db).await?, 1);

    Ok(())
}
