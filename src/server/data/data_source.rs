use migration::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::server::model::data_source::{DataSource, UpsertDataSourceParams};

pub struct DataSourceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DataSourceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a data source or overwrites every column of the existing row
    /// with the same id.
    ///
    /// # Arguments
    /// - `params` - Complete data source values, id included
    ///
    /// # Returns
    /// - `Ok(DataSource)` - The stored data source
    /// - `Err(DbErr)` - Database error during insert
    pub async fn upsert(&self, params: UpsertDataSourceParams) -> Result<DataSource, DbErr> {
        use entity::data_source::Column;

        let entity = entity::prelude::DataSource::insert(entity::data_source::ActiveModel {
            id: ActiveValue::Set(params.id),
            title: ActiveValue::Set(params.title),
            title_short: ActiveValue::Set(params.title_short),
            description: ActiveValue::Set(params.description),
            curation: ActiveValue::Set(params.curation),
            record_count: ActiveValue::Set(params.record_count),
            updated_at: ActiveValue::Set(params.updated_at),
            is_out_link_ready: ActiveValue::Set(params.is_out_link_ready),
            home_url: ActiveValue::Set(params.home_url),
            url_template: ActiveValue::Set(params.url_template),
        })
        .on_conflict(
            OnConflict::column(Column::Id)
                .update_columns([
                    Column::Title,
                    Column::TitleShort,
                    Column::Description,
                    Column::Curation,
                    Column::RecordCount,
                    Column::UpdatedAt,
                    Column::IsOutLinkReady,
                    Column::HomeUrl,
                    Column::UrlTemplate,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(DataSource::from_entity(entity))
    }
}
