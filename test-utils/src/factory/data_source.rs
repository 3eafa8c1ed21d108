//! Data source factory for creating test provenance records.

use crate::factory::helpers::next_id;
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test data sources with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let data_source = DataSourceFactory::new(&db)
///     .id(11)
///     .title("GBIF Backbone Taxonomy")
///     .build()
///     .await?;
/// ```
pub struct DataSourceFactory<'a> {
    db: &'a DatabaseConnection,
    id: i32,
    title: String,
    title_short: String,
    curation: String,
    record_count: Option<i32>,
    is_out_link_ready: bool,
}

impl<'a> DataSourceFactory<'a> {
    /// Creates a new DataSourceFactory with default values.
    ///
    /// Defaults:
    /// - id: auto-incremented
    /// - title: `"Data Source {id}"`
    /// - title_short: `"DS{id}"`
    /// - curation: `"Curated"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            id: id as i32,
            title: format!("Data Source {}", id),
            title_short: format!("DS{}", id),
            curation: "Curated".to_string(),
            record_count: None,
            is_out_link_ready: false,
        }
    }

    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn title_short(mut self, title_short: impl Into<String>) -> Self {
        self.title_short = title_short.into();
        self
    }

    pub fn record_count(mut self, record_count: i32) -> Self {
        self.record_count = Some(record_count);
        self
    }

    pub fn is_out_link_ready(mut self, ready: bool) -> Self {
        self.is_out_link_ready = ready;
        self
    }

    /// Builds and inserts the data source entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::data_source::Model)` - Created data source entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::data_source::Model, DbErr> {
        entity::data_source::ActiveModel {
            id: ActiveValue::Set(self.id),
            title: ActiveValue::Set(self.title),
            title_short: ActiveValue::Set(self.title_short),
            description: ActiveValue::Set(None),
            curation: ActiveValue::Set(self.curation),
            record_count: ActiveValue::Set(self.record_count),
            updated_at: ActiveValue::Set(
                NaiveDate::from_ymd_opt(2021, 10, 1).unwrap_or_default(),
            ),
            is_out_link_ready: ActiveValue::Set(self.is_out_link_ready),
            home_url: ActiveValue::Set(None),
            url_template: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a data source with default values.
///
/// Shorthand for `DataSourceFactory::new(db).build().await`.
pub async fn create_data_source(
    db: &DatabaseConnection,
) -> Result<entity::data_source::Model, DbErr> {
    DataSourceFactory::new(db).build().await
}
