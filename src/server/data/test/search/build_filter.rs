use super::*;

/// Tests the translation of a fuzzy leaf.
///
/// Verifies that a fuzzy leaf on a text column becomes a `word_similarity`
/// threshold and contributes one ranking expression.
///
/// Expected: word_similarity(term, "species"."current_name") >= 0.3
#[test]
fn fuzzy_leaf_uses_word_similarity() {
    let expression = SearchExpression::fuzzy("current_name", "Aega psora", 0.3);

    let filter = build_filter::<entity::prelude::Species>(&expression, &[]).unwrap();
    assert_eq!(filter.rankings.len(), 1);

    let sql = species_sql(&expression, &[]);
    assert!(
        sql.contains(r#"word_similarity('Aega psora', "species"."current_name") >= 0.3"#),
        "{}",
        sql
    );
}

/// Tests fuzzy leaves resolved through relations.
///
/// Verifies that columns missing on species resolve against the joined
/// common name and synonym tables, in tree order.
///
/// Expected: rankings for all four names, relation columns table-qualified
#[test]
fn fuzzy_leaves_resolve_relation_columns() {
    let relations = vec![
        SearchRelation::to::<entity::prelude::SpeciesCommonName>(
            entity::species::Relation::SpeciesCommonName.def(),
        ),
        SearchRelation::to::<entity::prelude::SpeciesSynonym>(
            entity::species::Relation::SpeciesSynonym.def(),
        ),
    ];
    let expression = SearchExpression::any(
        ["matched_canonical_full_name", "current_name", "name", "scientific_name"]
            .iter()
            .map(|column| SearchExpression::fuzzy(column, "psora", 0.1))
            .collect(),
    );

    let filter = build_filter::<entity::prelude::Species>(&expression, &relations).unwrap();
    assert_eq!(filter.rankings.len(), 4);

    let sql = species_sql(&expression, &relations);
    assert!(sql.contains(r#""species_common_names"."name""#), "{}", sql);
    assert!(sql.contains(r#""species_synonyms"."scientific_name""#), "{}", sql);
    assert!(sql.contains(" OR "), "{}", sql);
}

/// Tests a fuzzy flag on a non-text column.
///
/// Verifies that the flag is ignored and the operator applies instead.
///
/// Expected: plain equality, no ranking
#[test]
fn fuzzy_flag_on_integer_column_falls_back_to_operator() {
    let mut expression = SearchExpression::fuzzy("data_source_id", "12", 0.1);
    if let SearchExpression::Leaf(leaf) = &mut expression {
        leaf.operator = Operator::Eq;
    }

    let filter = build_filter::<entity::prelude::Species>(&expression, &[]).unwrap();
    assert!(filter.rankings.is_empty());

    let sql = species_sql(&expression, &[]);
    assert!(sql.contains(r#""species"."data_source_id" = 12"#), "{}", sql);
}

/// Tests nested AND and OR groups.
///
/// Expected: the OR group nested inside the AND condition
#[test]
fn nests_groups() {
    let expression = SearchExpression::all(vec![
        SearchExpression::compare("data_source_id", Operator::Ne, "1"),
        SearchExpression::any(vec![
            SearchExpression::compare("current_name", Operator::Eq, "a"),
            SearchExpression::compare("current_name", Operator::Eq, "b"),
        ]),
    ]);

    let sql = species_sql(&expression, &[]);

    assert!(
        sql.contains(
            r#""species"."data_source_id" <> 1 AND ("species"."current_name" = 'a' OR "species"."current_name" = 'b')"#
        ),
        "{}",
        sql
    );
}

/// Tests `contains` on a non-text column.
///
/// Expected: Err(SearchError::InvalidOperator)
#[test]
fn rejects_contains_on_integer_column() {
    let expression = SearchExpression::compare("data_source_id", Operator::Contains, "1");

    let result = build_filter::<entity::prelude::Species>(&expression, &[]);

    assert!(matches!(
        result,
        Err(SearchError::InvalidOperator {
            operator: Operator::Contains,
            ..
        })
    ));
}

/// Tests a column unknown to the entity and every relation.
///
/// Expected: Err(SearchError::InvalidColumn)
#[test]
fn rejects_unknown_column() {
    let expression = SearchExpression::compare("station_id", Operator::Eq, "1");

    let result = build_filter::<entity::prelude::Species>(&expression, &[]);

    assert!(matches!(result, Err(SearchError::InvalidColumn(name)) if name == "station_id"));
}

/// Tests comparing a JSON column with a term.
///
/// Verifies that structured columns are rejected before any SQL is sent,
/// for every comparison operator.
///
/// Expected: Err(SearchError::InvalidTerm)
#[test]
fn rejects_term_on_json_column() {
    for operator in [Operator::Eq, Operator::Ne, Operator::Gt] {
        let expression = SearchExpression::compare("hathitrust_urls", operator, "x");

        let result = build_filter::<entity::prelude::Station>(&expression, &[]);

        assert!(
            matches!(
                &result,
                Err(SearchError::InvalidTerm { column, .. }) if column == "hathitrust_urls"
            ),
            "{:?}",
            operator
        );
    }
}
