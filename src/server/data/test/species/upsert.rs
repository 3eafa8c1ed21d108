use super::*;

/// Tests inserting a new species.
///
/// Expected: Ok with the species stored and no common name
#[tokio::test]
async fn inserts_new_species() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_species_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let data_source = factory::create_data_source(db).await?;

    let repo = SpeciesRepository::new(db);
    let species = repo
        .upsert(upsert_params("sp-1", data_source.id, "Aega psora"))
        .await?;

    assert_eq!(species.id, "sp-1");
    assert_eq!(species.current_name.as_deref(), Some("Aega psora"));
    assert!(species.common_name.is_none());
    assert!(repo.get_details("sp-1").await?.is_some());

    Ok(())
}

/// Tests re-importing an existing species.
///
/// Verifies that resolver columns are refreshed while the common name, which
/// the resolver does not provide, keeps its stored value.
///
/// Expected: Ok with the new current name and the stored common name
#[tokio::test]
async fn refreshes_existing_species_and_keeps_common_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_species_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let data_source = factory::create_data_source(db).await?;
    SpeciesFactory::new(db, data_source.id)
        .id("sp-1")
        .record_id("record-sp-1")
        .current_name("Aega psora")
        .common_name("Sea louse")
        .build()
        .await?;

    let repo = SpeciesRepository::new(db);
    let species = repo
        .upsert(upsert_params("sp-1", data_source.id, "Aega psora Linnaeus"))
        .await?;

    assert_eq!(species.current_name.as_deref(), Some("Aega psora Linnaeus"));
    assert_eq!(species.common_name.as_deref(), Some("Sea louse"));
    assert_eq!(
        species.classification_ranks.as_deref(),
        Some("kingdom|phylum|order")
    );

    Ok(())
}
