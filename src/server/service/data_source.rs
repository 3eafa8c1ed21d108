use sea_orm::DatabaseConnection;

use crate::server::{
    data::crud::CrudRepository,
    error::AppError,
    model::{data_source::DataSource, pagination::Page, search::SearchExpression},
};

type DataSourceCrud<'a> = CrudRepository<'a, entity::prelude::DataSource>;

pub struct DataSourceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DataSourceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_page(
        &self,
        skip: u64,
        limit: u64,
        order_by: &[String],
    ) -> Result<Page<DataSource>, AppError> {
        let page = DataSourceCrud::new(self.db)
            .get_multi(skip, limit, order_by)
            .await?;

        Ok(page.map(DataSource::from_entity))
    }

    pub async fn get_all(&self, order_by: &[String]) -> Result<Vec<DataSource>, AppError> {
        let data_sources = DataSourceCrud::new(self.db).get_all(order_by).await?;

        Ok(data_sources.into_iter().map(DataSource::from_entity).collect())
    }

    pub async fn search(
        &self,
        expression: &SearchExpression,
        order_by: &[String],
        limit: u64,
    ) -> Result<Vec<DataSource>, AppError> {
        let data_sources = DataSourceCrud::new(self.db)
            .search(expression, &[], order_by, limit)
            .await?;

        Ok(data_sources.into_iter().map(DataSource::from_entity).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<DataSource>, AppError> {
        let data_source = DataSourceCrud::new(self.db).get(id).await?;

        Ok(data_source.map(DataSource::from_entity))
    }
}
