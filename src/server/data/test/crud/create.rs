use super::*;

/// Tests inserting a record from an active model.
///
/// Verifies that the generic create stores every set field and returns the
/// stored model.
///
/// Expected: Ok with the species as stored
#[tokio::test]
async fn inserts_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DataSource)
        .with_table(entity::prelude::Species)
        .with_table(entity::prelude::SpeciesCommonName)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let species = factory::create_species(db, factory::create_data_source(db).await?.id).await?;

    let repo = CrudRepository::<entity::prelude::SpeciesCommonName>::new(db);
    let created = repo
        .create(entity::species_common_name::ActiveModel {
            id: ActiveValue::Set("cn-1".to_string()),
            language: ActiveValue::Set("English".to_string()),
            name: ActiveValue::Set("Sea slater".to_string()),
            species_id: ActiveValue::Set(species.id.clone()),
        })
        .await?;

    assert_eq!(created.id, "cn-1");
    assert_eq!(created.name, "Sea slater");
    assert_eq!(repo.get("cn-1".to_string()).await?, Some(created));

    Ok(())
}

/// Tests inserting a record with a duplicate primary key.
///
/// Expected: Err
#[tokio::test]
async fn fails_on_duplicate_primary_key() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Station)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let station = StationFactory::new(db).name("dup").build().await?;

    let repo = CrudRepository::<entity::prelude::Station>::new(db);
    let result = repo.create(station.into_active_model()).await;

    assert!(result.is_err());

    Ok(())
}
