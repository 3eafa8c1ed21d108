use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::species::SpeciesSummaryDto;

/// Station list item. `coordinates` is `[longitude, latitude]`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct StationSummaryDto {
    pub name: String,
    pub date: NaiveDate,
    pub coordinates: Vec<f64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct StationDto {
    pub name: String,
    pub order: i32,
    pub sediment_sample: Option<String>,
    pub coordinates: Vec<f64>,
    pub location: String,
    pub water_body: String,
    pub sea_area: Option<String>,
    pub place: Option<String>,
    pub date: NaiveDate,
    pub fao_area: i32,
    pub gear: Option<String>,
    pub depth_fathoms: Option<i32>,
    pub bottom_water_temp_c: Option<f64>,
    pub bottom_water_depth_fathoms: Option<i32>,
    pub specific_gravity_at_bottom: Option<f64>,
    pub surface_temp_c: Option<f64>,
    pub specific_gravity_at_surface: Option<f64>,
    /// Water temperature (°C) keyed by depth in fathoms.
    pub water_temp_c_at_depth_fathoms: BTreeMap<String, Option<f64>>,
    pub text: String,
    pub hathitrust_urls: Vec<String>,
    pub species: Vec<SpeciesSummaryDto>,
}
