use sea_orm::{DatabaseConnection, RelationTrait, Select};

use crate::{
    model::search::Operator,
    server::{
        data::{crud::CrudRepository, search::SearchRelation, species::SpeciesRepository},
        error::AppError,
        model::{
            pagination::Page,
            search::SearchExpression,
            species::{FuzzyMatchParams, Species, SpeciesDetails},
        },
    },
};

type SpeciesCrud<'a> = CrudRepository<'a, entity::prelude::Species>;

/// Name columns compared by the fuzzy match. `name` and `scientific_name`
/// come from the joined common name and synonym tables.
const FUZZY_MATCH_COLUMNS: [&str; 4] = [
    "matched_canonical_full_name",
    "current_name",
    "name",
    "scientific_name",
];

pub struct SpeciesService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SpeciesService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_page(
        &self,
        skip: u64,
        limit: u64,
        order_by: &[String],
    ) -> Result<Page<Species>, AppError> {
        let page = SpeciesCrud::new(self.db)
            .get_multi(skip, limit, order_by)
            .await?;

        Ok(page.map(Species::from_entity))
    }

    pub async fn get_all(&self, order_by: &[String]) -> Result<Vec<Species>, AppError> {
        let species = SpeciesCrud::new(self.db).get_all(order_by).await?;

        Ok(species.into_iter().map(Species::from_entity).collect())
    }

    pub async fn search(
        &self,
        expression: &SearchExpression,
        order_by: &[String],
        limit: u64,
    ) -> Result<Vec<Species>, AppError> {
        let species = SpeciesCrud::new(self.db)
            .search(expression, &[], order_by, limit)
            .await?;

        Ok(species.into_iter().map(Species::from_entity).collect())
    }

    /// Finds species whose names resemble a free text query.
    ///
    /// Compares the query against the matched and current scientific names,
    /// the common names and the synonyms. Results are ranked by similarity,
    /// best first. With a station, only species recorded there are returned.
    ///
    /// # Arguments
    /// - `params` - Query, optional station, similarity threshold, limit and ordering
    ///
    /// # Returns
    /// - `Ok(Vec<Species>)` - Matching species without duplicates
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn fuzzy_match(&self, params: FuzzyMatchParams) -> Result<Vec<Species>, AppError> {
        let (expression, relations) = fuzzy_match_search(&params);

        let species = SpeciesCrud::new(self.db)
            .search(&expression, &relations, &params.order_by, params.limit)
            .await?;

        Ok(species.into_iter().map(Species::from_entity).collect())
    }

    /// Select run by [`fuzzy_match`](Self::fuzzy_match), before duplicate rows
    /// from the joined name tables are dropped.
    pub fn fuzzy_match_query(
        params: &FuzzyMatchParams,
    ) -> Result<Select<entity::prelude::Species>, AppError> {
        let (expression, relations) = fuzzy_match_search(params);

        SpeciesCrud::search_query(&expression, &relations, &params.order_by, params.limit)
    }

    pub async fn get_details(&self, id: &str) -> Result<Option<SpeciesDetails>, AppError> {
        Ok(SpeciesRepository::new(self.db).get_details(id).await?)
    }
}

/// ORs a fuzzy leaf per name column, ANDed with the station when one is given.
fn fuzzy_match_search(params: &FuzzyMatchParams) -> (SearchExpression, Vec<SearchRelation>) {
    let names = SearchExpression::any(
        FUZZY_MATCH_COLUMNS
            .iter()
            .map(|column| {
                SearchExpression::fuzzy(column, &params.query, params.min_string_similarity)
            })
            .collect(),
    );

    let mut relations = vec![
        SearchRelation::to::<entity::prelude::SpeciesCommonName>(
            entity::species::Relation::SpeciesCommonName.def(),
        ),
        SearchRelation::to::<entity::prelude::SpeciesSynonym>(
            entity::species::Relation::SpeciesSynonym.def(),
        ),
    ];

    let expression = match &params.station {
        Some(station) => {
            relations.push(SearchRelation::to::<entity::prelude::StationSpecies>(
                entity::species::Relation::StationSpecies.def(),
            ));
            SearchExpression::all(vec![
                names,
                SearchExpression::compare("station_id", Operator::Eq, station),
            ])
        }
        None => names,
    };

    (expression, relations)
}
