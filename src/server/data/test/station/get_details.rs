use super::*;

/// Tests loading a station with its species.
///
/// Verifies that only species linked to the station are loaded, ordered by
/// species id.
///
/// Expected: Ok(Some(details)) with the two linked species
#[tokio::test]
async fn loads_linked_species() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_expedition_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let data_source = factory::create_data_source(db).await?;
    let b = SpeciesFactory::new(db, data_source.id).id("b").build().await?;
    let a = SpeciesFactory::new(db, data_source.id).id("a").build().await?;
    let unlinked = factory::create_species(db, data_source.id).await?;
    let station = StationFactory::new(db).name("5").build().await?;
    factory::link_station_species(db, &station.name, &b.id).await?;
    factory::link_station_species(db, &station.name, &a.id).await?;

    let repo = StationRepository::new(db);
    let details = repo.get_details("5").await?.unwrap();

    assert_eq!(details.station.name, "5");
    let ids: Vec<_> = details.species.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);
    assert!(!ids.contains(&unlinked.id.as_str()));

    Ok(())
}

/// Tests dropping genus-only species from the details.
///
/// Expected: only the species with a two-word canonical name remains
#[tokio::test]
async fn binomial_only_drops_genera() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_expedition_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let data_source = factory::create_data_source(db).await?;
    let genus = SpeciesFactory::new(db, data_source.id)
        .current_canonical_simple_name(Some("Aega"))
        .build()
        .await?;
    let species = SpeciesFactory::new(db, data_source.id)
        .current_canonical_simple_name(Some("Aega psora"))
        .build()
        .await?;
    let station = factory::create_station(db).await?;
    factory::link_station_species(db, &station.name, &genus.id).await?;
    factory::link_station_species(db, &station.name, &species.id).await?;

    let repo = StationRepository::new(db);
    let details = repo.get_details(&station.name).await?.unwrap().binomial_only();

    assert_eq!(details.species.len(), 1);
    assert_eq!(details.species[0].id, species.id);

    Ok(())
}

/// Tests loading a station that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_station() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_expedition_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StationRepository::new(db);

    assert!(repo.get_details("nowhere").await?.is_none());

    Ok(())
}
