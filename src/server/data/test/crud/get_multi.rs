use super::*;

/// Tests paging through records in the requested order.
///
/// Verifies that skip and limit select the expected slice of the ordered
/// table while the count covers every record.
///
/// Expected: Ok with the second and third stations by order and a count of 5
#[tokio::test]
async fn returns_ordered_page_with_total_count() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Station)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for order in [5, 3, 1, 4, 2] {
        StationFactory::new(db)
            .name(format!("station-{}", order))
            .order(order)
            .build()
            .await?;
    }

    let repo = CrudRepository::<entity::prelude::Station>::new(db);
    let page = repo.get_multi(1, 2, &["order".to_string()]).await?;

    assert_eq!(page.count, 5);
    assert_eq!(page.skip, 1);
    assert_eq!(page.limit, 2);
    let names: Vec<_> = page.results.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["station-2", "station-3"]);

    Ok(())
}

/// Tests descending order with a `-` prefix.
///
/// Verifies that a column name prefixed with `-` sorts descending and that
/// later columns break ties.
///
/// Expected: Ok with stations ordered by fao_area descending, then by name
#[tokio::test]
async fn orders_descending_with_minus_prefix() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Station)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    StationFactory::new(db).name("b").fao_area(34).build().await?;
    StationFactory::new(db).name("a").fao_area(34).build().await?;
    StationFactory::new(db).name("c").fao_area(81).build().await?;

    let repo = CrudRepository::<entity::prelude::Station>::new(db);
    let page = repo
        .get_multi(0, 10, &["-fao_area".to_string(), "name".to_string()])
        .await?;

    let names: Vec<_> = page.results.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["c", "a", "b"]);

    Ok(())
}

/// Tests ordering by a column the table does not have.
///
/// Verifies that unknown order_by names are ignored instead of failing the
/// query.
///
/// Expected: Ok with every record returned
#[tokio::test]
async fn ignores_unknown_order_by_column() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DataSource)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_data_source(db).await?;
    factory::create_data_source(db).await?;

    let repo = CrudRepository::<entity::prelude::DataSource>::new(db);
    let page = repo
        .get_multi(0, 100, &["no_such_column".to_string()])
        .await?;

    assert_eq!(page.count, 2);
    assert_eq!(page.results.len(), 2);

    Ok(())
}

/// Tests a skip beyond the end of the table.
///
/// Expected: Ok with no results and the full count
#[tokio::test]
async fn returns_empty_page_past_the_end() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DataSource)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_data_source(db).await?;

    let repo = CrudRepository::<entity::prelude::DataSource>::new(db);
    let page = repo.get_multi(10, 100, &[]).await?;

    assert!(page.results.is_empty());
    assert_eq!(page.count, 1);

    Ok(())
}
