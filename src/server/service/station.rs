use sea_orm::{DatabaseConnection, RelationTrait};

use crate::server::{
    data::{crud::CrudRepository, search::SearchRelation, station::StationRepository},
    error::AppError,
    model::{
        pagination::Page,
        search::SearchExpression,
        station::{Station, StationDetails},
    },
};

type StationCrud<'a> = CrudRepository<'a, entity::prelude::Station>;

pub struct StationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_page(
        &self,
        skip: u64,
        limit: u64,
        order_by: &[String],
    ) -> Result<Page<Station>, AppError> {
        let page = StationCrud::new(self.db)
            .get_multi(skip, limit, order_by)
            .await?;

        Ok(page.map(Station::from_entity))
    }

    pub async fn get_all(&self, order_by: &[String]) -> Result<Vec<Station>, AppError> {
        let stations = StationCrud::new(self.db).get_all(order_by).await?;

        Ok(stations.into_iter().map(Station::from_entity).collect())
    }

    /// Searches stations.
    ///
    /// Expressions naming `species_id` are answered through the
    /// station-species association, which is only joined when needed.
    pub async fn search(
        &self,
        expression: &SearchExpression,
        order_by: &[String],
        limit: u64,
    ) -> Result<Vec<Station>, AppError> {
        let relations = if expression.uses_column("species_id") {
            vec![SearchRelation::to::<entity::prelude::StationSpecies>(
                entity::station::Relation::StationSpecies.def(),
            )]
        } else {
            Vec::new()
        };

        let stations = StationCrud::new(self.db)
            .search(expression, &relations, order_by, limit)
            .await?;

        Ok(stations.into_iter().map(Station::from_entity).collect())
    }

    /// Gets a station with its species.
    ///
    /// # Arguments
    /// - `name` - Station name
    /// - `binomial_only` - Drop species only resolved to genus level
    pub async fn get_details(
        &self,
        name: &str,
        binomial_only: bool,
    ) -> Result<Option<StationDetails>, AppError> {
        let details = StationRepository::new(self.db).get_details(name).await?;

        Ok(details.map(|details| {
            if binomial_only {
                details.binomial_only()
            } else {
                details
            }
        }))
    }
}
