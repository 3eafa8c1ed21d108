use super::*;

/// Tests inserting a station.
///
/// Verifies that the JSON columns round trip through the database in their
/// structured form.
///
/// Expected: Ok with readings and page URLs as written
#[tokio::test]
async fn inserts_station_with_json_columns() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Station)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StationRepository::new(db);
    let station = repo.upsert(upsert_params("1", 1)).await?;

    assert_eq!(station.name, "1");
    assert_eq!(station.coordinates(), vec![-20.5, 25.75]);
    assert_eq!(
        station.water_temp_c_at_depth_fathoms.get("0"),
        Some(&Some(18.9))
    );
    assert_eq!(station.water_temp_c_at_depth_fathoms.get("100"), Some(&None));
    assert_eq!(station.hathitrust_urls.len(), 1);

    Ok(())
}

/// Tests re-importing a station.
///
/// Verifies that an upsert with an existing name replaces the stored values
/// instead of adding a row.
///
/// Expected: Ok with the new order and one stored station
#[tokio::test]
async fn replaces_existing_station() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Station)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StationRepository::new(db);
    repo.upsert(upsert_params("1", 1)).await?;

    let mut params = upsert_params("1", 7);
    params.gear = None;
    let station = repo.upsert(params).await?;

    assert_eq!(station.order, 7);
    assert!(station.gear.is_none());
    assert_eq!(entity::prelude::Station::find().count(db).await?, 1);

    Ok(())
}
