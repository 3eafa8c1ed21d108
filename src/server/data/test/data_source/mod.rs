use crate::server::{
    data::data_source::DataSourceRepository, model::data_source::UpsertDataSourceParams,
};
use chrono::NaiveDate;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::builder::TestBuilder;

mod upsert;

fn upsert_params(id: i32, title: &str) -> UpsertDataSourceParams {
    UpsertDataSourceParams {
        id,
        title: title.to_string(),
        title_short: title.to_string(),
        description: None,
        curation: "Curated".to_string(),
        record_count: Some(100),
        updated_at: NaiveDate::from_ymd_opt(2020, 6, 1).unwrap(),
        is_out_link_ready: false,
        home_url: None,
        url_template: None,
    }
}
