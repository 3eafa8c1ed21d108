use super::*;

/// Tests searching with a typed comparison.
///
/// Verifies that the search term is converted to the integer type of the
/// column before comparing.
///
/// Expected: Ok with only the stations in FAO area 34
#[tokio::test]
async fn compares_integer_column() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Station)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    StationFactory::new(db).name("a").fao_area(34).build().await?;
    StationFactory::new(db).name("b").fao_area(81).build().await?;
    StationFactory::new(db).name("c").fao_area(34).build().await?;

    let repo = CrudRepository::<entity::prelude::Station>::new(db);
    let stations = repo
        .search(
            &SearchExpression::compare("fao_area", Operator::Eq, "34"),
            &[],
            &["name".to_string()],
            0,
        )
        .await
        .unwrap();

    let names: Vec<_> = stations.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["a", "c"]);

    Ok(())
}

/// Tests an OR group of range comparisons with a limit.
///
/// Verifies that group joins map onto the condition tree and that a positive
/// limit caps the result.
///
/// Expected: Ok with the first two matching stations by order
#[tokio::test]
async fn applies_group_and_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Station)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for (name, depth) in [("a", 10), ("b", 500), ("c", 2000), ("d", 3000)] {
        StationFactory::new(db).name(name).depth_fathoms(depth).build().await?;
    }

    let expression = SearchExpression::any(vec![
        SearchExpression::compare("depth_fathoms", Operator::Lt, "100"),
        SearchExpression::compare("depth_fathoms", Operator::Ge, "2000"),
    ]);

    let repo = CrudRepository::<entity::prelude::Station>::new(db);
    let stations = repo
        .search(&expression, &[], &["-depth_fathoms".to_string()], 2)
        .await
        .unwrap();

    let names: Vec<_> = stations.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["d", "c"]);

    Ok(())
}

/// Tests substring search on a text column.
///
/// Verifies that `contains` matches anywhere in the value and treats LIKE
/// wildcards in the term literally.
///
/// Expected: Ok with only the station whose water body contains the term
#[tokio::test]
async fn matches_substring_literally() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Station)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    StationFactory::new(db)
        .name("a")
        .water_body("North Atlantic Ocean")
        .build()
        .await?;
    StationFactory::new(db)
        .name("b")
        .water_body("South Pacific Ocean")
        .build()
        .await?;

    let repo = CrudRepository::<entity::prelude::Station>::new(db);
    let stations = repo
        .search(
            &SearchExpression::compare("water_body", Operator::Contains, "Atlantic"),
            &[],
            &[],
            0,
        )
        .await
        .unwrap();
    assert_eq!(stations.len(), 1);
    assert_eq!(stations[0].name, "a");

    let stations = repo
        .search(
            &SearchExpression::compare("water_body", Operator::Contains, "%"),
            &[],
            &[],
            0,
        )
        .await
        .unwrap();
    assert!(stations.is_empty());

    Ok(())
}

/// Tests searching through a joined relation.
///
/// Verifies that a column of a relation resolves when the searched entity
/// lacks it, and that a station linked through several matching rows is
/// returned once.
///
/// Expected: Ok with each matching station exactly once
#[tokio::test]
async fn searches_relation_columns_without_duplicates() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_expedition_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let data_source = factory::create_data_source(db).await?;
    let first = factory::create_species(db, data_source.id).await?;
    let second = factory::create_species(db, data_source.id).await?;
    let station = StationFactory::new(db).name("1").build().await?;
    let other = StationFactory::new(db).name("2").build().await?;
    factory::link_station_species(db, &station.name, &first.id).await?;
    factory::link_station_species(db, &station.name, &second.id).await?;
    factory::link_station_species(db, &other.name, &second.id).await?;

    let expression = SearchExpression::any(vec![
        SearchExpression::compare("species_id", Operator::Eq, &first.id),
        SearchExpression::compare("species_id", Operator::Eq, &second.id),
    ]);
    let relations = vec![SearchRelation::to::<entity::prelude::StationSpecies>(
        entity::station::Relation::StationSpecies.def(),
    )];

    let repo = CrudRepository::<entity::prelude::Station>::new(db);
    let stations = repo
        .search(&expression, &relations, &["name".to_string()], 0)
        .await
        .unwrap();

    let names: Vec<_> = stations.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["1", "2"]);

    Ok(())
}

/// Tests searching a column that exists nowhere.
///
/// Expected: Err(SearchError::InvalidColumn)
#[tokio::test]
async fn fails_for_unknown_column() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Station)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CrudRepository::<entity::prelude::Station>::new(db);
    let result = repo
        .search(
            &SearchExpression::compare("species_id", Operator::Eq, "x"),
            &[],
            &[],
            0,
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::SearchErr(SearchError::InvalidColumn(column))) if column == "species_id"
    ));

    Ok(())
}

/// Tests a search term that does not fit the column type.
///
/// Expected: Err(SearchError::InvalidTerm)
#[tokio::test]
async fn fails_for_unconvertible_term() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Station)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CrudRepository::<entity::prelude::Station>::new(db);
    let result = repo
        .search(
            &SearchExpression::compare("date", Operator::Gt, "15/02/1873"),
            &[],
            &[],
            0,
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::SearchErr(SearchError::InvalidTerm { .. }))
    ));

    Ok(())
}
