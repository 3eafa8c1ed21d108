use super::*;

/// Tests linking species to a station twice.
///
/// Verifies that existing links are left alone instead of failing the
/// insert.
///
/// Expected: Ok with two links stored
#[tokio::test]
async fn ignores_existing_links() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_expedition_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let data_source = factory::create_data_source(db).await?;
    let first = factory::create_species(db, data_source.id).await?;
    let second = factory::create_species(db, data_source.id).await?;
    let station = factory::create_station(db).await?;

    let repo = StationRepository::new(db);
    repo.link_species(&station.name, &[first.id.clone()]).await?;
    repo.link_species(&station.name, &[first.id.clone(), second.id.clone()])
        .await?;

    assert_eq!(entity::prelude::StationSpecies::find().count(db).await?, 2);

    Ok(())
}

/// Tests linking an empty species list.
///
/// Expected: Ok with no links stored
#[tokio::test]
async fn accepts_empty_species_list() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_expedition_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let station = factory::create_station(db).await?;

    let repo = StationRepository::new(db);
    repo.link_species(&station.name, &[]).await?;

    assert_eq!(entity::prelude::StationSpecies::find().count(db).await?, 0);

    Ok(())
}

/// Tests removing every link.
///
/// Expected: Ok(2) and no links left, stations and species untouched
#[tokio::test]
async fn clears_all_links() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_expedition_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let data_source = factory::create_data_source(db).await?;
    let species = factory::create_species(db, data_source.id).await?;
    let first = factory::create_station(db).await?;
    let second = factory::create_station(db).await?;
    factory::link_station_species(db, &first.name, &species.id).await?;
    factory::link_station_species(db, &second.name, &species.id).await?;

    let repo = StationRepository::new(db);
    let removed = repo.clear_species_links().await?;

    assert_eq!(removed, 2);
    assert_eq!(entity::prelude::StationSpecies::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Station::find().count(db).await?, 2);
    assert_eq!(entity::prelude::Species::find().count(db).await?, 1);

    Ok(())
}
