use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct DataSourceSummaryDto {
    pub id: i32,
    pub title: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct DataSourceDto {
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
