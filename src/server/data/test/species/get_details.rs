use super::*;

/// Tests loading a species with its satellite tables.
///
/// Verifies that extra status rows, synonyms and common names belonging to
/// the species are loaded, ordered by id, and rows of other species are not.
///
/// Expected: Ok(Some(details)) with one extra row, two synonyms and one common name
#[tokio::test]
async fn loads_satellite_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_species_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let data_source = factory::create_data_source(db).await?;
    let species = SpeciesFactory::new(db, data_source.id)
        .current_name("Aega psora")
        .build()
        .await?;
    let other = factory::create_species(db, data_source.id).await?;

    let second = factory::create_synonym(db, &species.id, "Oniscus psora").await?;
    let first = factory::create_synonym(db, &species.id, "Aega emarginata").await?;
    factory::create_synonym(db, &other.id, "Unrelated name").await?;
    factory::create_common_name(db, &species.id, "English", "Sea louse").await?;
    entity::species_extra::ActiveModel {
        id: ActiveValue::Set("extra-1".to_string()),
        scientific_name: ActiveValue::Set(Some("Aega psora".to_string())),
        status: ActiveValue::Set(true),
        unaccepted_reason: ActiveValue::Set(None),
        valid_name: ActiveValue::Set("Aega psora".to_string()),
        lsid: ActiveValue::Set(None),
        is_brackish: ActiveValue::Set(false),
        is_extinct: ActiveValue::Set(false),
        is_freshwater: ActiveValue::Set(false),
        is_marine: ActiveValue::Set(true),
        is_terrestrial: ActiveValue::Set(false),
        species_id: ActiveValue::Set(species.id.clone()),
    }
    .insert(db)
    .await?;

    let repo = SpeciesRepository::new(db);
    let details = repo.get_details(&species.id).await?.unwrap();

    assert_eq!(details.species.id, species.id);
    assert_eq!(details.species.current_name.as_deref(), Some("Aega psora"));
    assert_eq!(details.extra.len(), 1);
    assert!(details.extra[0].is_marine);

    let mut expected = vec![first.id, second.id];
    expected.sort();
    let synonym_ids: Vec<_> = details.synonyms.into_iter().map(|s| s.id).collect();
    assert_eq!(synonym_ids, expected);

    assert_eq!(details.common_names.len(), 1);
    assert_eq!(details.common_names[0].name, "Sea louse");

    Ok(())
}

/// Tests loading a species that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_species() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_species_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SpeciesRepository::new(db);
    let details = repo.get_details("missing").await?;

    assert!(details.is_none());

    Ok(())
}
