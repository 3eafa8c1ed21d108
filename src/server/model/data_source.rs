//! Data source domain models and parameters.
//!
//! A data source is the taxonomic database a species name was resolved against
//! (Catalogue of Life, WoRMS, GBIF, ...). Ids are assigned by the resolver, not
//! by this service.

use chrono::NaiveDate;

use crate::model::data_source::{DataSourceDto, DataSourceSummaryDto};

/// Date stored when the resolver does not report when a source was updated.
pub fn default_updated_at() -> NaiveDate {
    NaiveDate::from_ymd_opt(1876, 8, 1).unwrap_or_default()
}

#[derive(Debug, Clone, PartialEq)]
pub struct DataSource {
    pub id: i32,
    pub title: String,
    pub title_short: String,
    pub description: Option<String>,
    pub curation: String,
    pub record_count: Option<i32>,
    pub updated_at: NaiveDate,
    pub is_out_link_ready: bool,
    pub home_url: Option<String>,
    pub url_template: Option<String>,
}

impl DataSource {
    pub fn from_entity(entity: entity::data_source::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            title_short: entity.title_short,
            description: entity.description,
            curation: entity.curation,
            record_count: entity.record_count,
            updated_at: entity.updated_at,
            is_out_link_ready: entity.is_out_link_ready,
            home_url: entity.home_url,
            url_template: entity.url_template,
        }
    }

    pub fn into_summary_dto(self) -> DataSourceSummaryDto {
        DataSourceSummaryDto {
            id: self.id,
            title: self.title,
        }
    }

    pub fn into_dto(self) -> DataSourceDto {
        DataSourceDto {
            id: self.id,
            title: self.title,
            title_short: self.title_short,
            description: self.description,
            curation: self.curation,
            record_count: self.record_count,
            updated_at: self.updated_at,
            is_out_link_ready: self.is_out_link_ready,
            home_url: self.home_url,
            url_template: self.url_template,
        }
    }
}

/// Full set of values written when importing a data source.
#[derive(Debug, Clone)]
pub struct UpsertDataSourceParams {
    pub id: i32,
    pub title: String,
    pub title_short: String,
    pub description: Option<String>,
    pub curation: String,
    pub record_count: Option<i32>,
    pub updated_at: NaiveDate,
    pub is_out_link_ready: bool,
    pub home_url: Option<String>,
    pub url_template: Option<String>,
}
