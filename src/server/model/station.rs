//! Station domain models and parameters.
//!
//! Stations are the numbered sampling locations of the voyage. The `order`
//! field is the position of the station in the voyage narrative and is the
//! natural sort key for maps and timelines.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::{
    model::station::{StationDto, StationSummaryDto},
    server::model::species::Species,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    pub name: String,
    pub order: i32,
    pub sediment_sample: Option<String>,
    pub longitude: f64,
    pub latitude: f64,
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
    pub water_temp_c_at_depth_fathoms: BTreeMap<String, Option<f64>>,
    pub text: String,
    pub hathitrust_urls: Vec<String>,
}

impl Station {
    /// Converts an entity model to a station domain model at the repository boundary.
    ///
    /// The JSON columns are only ever written by this service. A value that
    /// does not have the expected shape is logged and read as empty.
    pub fn from_entity(entity: entity::station::Model) -> Self {
        let water_temp_c_at_depth_fathoms =
            serde_json::from_value(entity.water_temp_c_at_depth_fathoms).unwrap_or_else(|e| {
                tracing::warn!(
                    station = %entity.name,
                    "Malformed water temperature readings: {}",
                    e
                );
                BTreeMap::new()
            });
        let hathitrust_urls = serde_json::from_value(entity.hathitrust_urls).unwrap_or_else(|e| {
            tracing::warn!(station = %entity.name, "Malformed HathiTrust URLs: {}", e);
            Vec::new()
        });

        Self {
            name: entity.name,
            order: entity.station_order,
            sediment_sample: entity.sediment_sample,
            longitude: entity.longitude,
            latitude: entity.latitude,
            location: entity.location,
            water_body: entity.water_body,
            sea_area: entity.sea_area,
            place: entity.place,
            date: entity.date,
            fao_area: entity.fao_area,
            gear: entity.gear,
            depth_fathoms: entity.depth_fathoms,
            bottom_water_temp_c: entity.bottom_water_temp_c,
            bottom_water_depth_fathoms: entity.bottom_water_depth_fathoms,
            specific_gravity_at_bottom: entity.specific_gravity_at_bottom,
            surface_temp_c: entity.surface_temp_c,
            specific_gravity_at_surface: entity.specific_gravity_at_surface,
            water_temp_c_at_depth_fathoms,
            text: entity.text,
            hathitrust_urls,
        }
    }

    /// GeoJSON position order: longitude first.
    pub fn coordinates(&self) -> Vec<f64> {
        vec![self.longitude, self.latitude]
    }

    pub fn into_summary_dto(self) -> StationSummaryDto {
        StationSummaryDto {
            coordinates: self.coordinates(),
            name: self.name,
            date: self.date,
        }
    }
}

/// Station with the species recorded there.
#[derive(Debug, Clone, PartialEq)]
pub struct StationDetails {
    pub station: Station,
    pub species: Vec<Species>,
}

impl StationDetails {
    /// Drops species that are only resolved to genus level.
    pub fn binomial_only(mut self) -> Self {
        self.species.retain(Species::is_binomial);
        self
    }

    pub fn into_dto(self) -> StationDto {
        let station = self.station;

        StationDto {
            coordinates: station.coordinates(),
            name: station.name,
            order: station.order,
            sediment_sample: station.sediment_sample,
            location: station.location,
            water_body: station.water_body,
            sea_area: station.sea_area,
            place: station.place,
            date: station.date,
            fao_area: station.fao_area,
            gear: station.gear,
            depth_fathoms: station.depth_fathoms,
            bottom_water_temp_c: station.bottom_water_temp_c,
            bottom_water_depth_fathoms: station.bottom_water_depth_fathoms,
            specific_gravity_at_bottom: station.specific_gravity_at_bottom,
            surface_temp_c: station.surface_temp_c,
            specific_gravity_at_surface: station.specific_gravity_at_surface,
            water_temp_c_at_depth_fathoms: station.water_temp_c_at_depth_fathoms,
            text: station.text,
            hathitrust_urls: station.hathitrust_urls,
            species: self
                .species
                .into_iter()
                .map(Species::into_summary_dto)
                .collect(),
        }
    }
}

/// Values written when importing a station.
#[derive(Debug, Clone)]
pub struct UpsertStationParams {
    pub name: String,
    pub order: i32,
    pub sediment_sample: Option<String>,
    pub longitude: f64,
    pub latitude: f64,
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
    pub water_temp_c_at_depth_fathoms: BTreeMap<String, Option<f64>>,
    pub text: String,
    pub hathitrust_urls: Vec<String>,
}
