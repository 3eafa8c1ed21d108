//! Station repository.
//!
//! Besides the detail view and the import upsert, this repository owns the
//! `stations_species` association. The import rebuilds it from scratch on
//! every run.

use migration::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait, ModelTrait, QueryOrder};

use crate::server::model::{
    species::Species,
    station::{Station, StationDetails, UpsertStationParams},
};

pub struct StationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a station with the species recorded there, ordered by species id.
    ///
    /// # Arguments
    /// - `name` - Station name
    ///
    /// # Returns
    /// - `Ok(Some(StationDetails))` - Station with its species
    /// - `Ok(None)` - No station with this name
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_details(&self, name: &str) -> Result<Option<StationDetails>, DbErr> {
        let Some(station) = entity::prelude::Station::find_by_id(name.to_string())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let species = station
            .find_related(entity::prelude::Species)
            .order_by_asc(entity::species::Column::Id)
            .all(self.db)
            .await?;

        Ok(Some(StationDetails {
            station: Station::from_entity(station),
            species: species.into_iter().map(Species::from_entity).collect(),
        }))
    }

    /// Inserts a station or overwrites every column of the existing row with
    /// the same name.
    pub async fn upsert(&self, params: UpsertStationParams) -> Result<Station, DbErr> {
        use entity::station::Column;

        let water_temp_c_at_depth_fathoms =
            serde_json::to_value(&params.water_temp_c_at_depth_fathoms).map_err(|e| {
                DbErr::Custom(format!("Failed to encode water temperatures: {}", e))
            })?;

        let entity = entity::prelude::Station::insert(entity::station::ActiveModel {
            name: ActiveValue::Set(params.name),
            station_order: ActiveValue::Set(params.order),
            sediment_sample: ActiveValue::Set(params.sediment_sample),
            longitude: ActiveValue::Set(params.longitude),
            latitude: ActiveValue::Set(params.latitude),
            location: ActiveValue::Set(params.location),
            water_body: ActiveValue::Set(params.water_body),
            sea_area: ActiveValue::Set(params.sea_area),
            place: ActiveValue::Set(params.place),
            date: ActiveValue::Set(params.date),
            fao_area: ActiveValue::Set(params.fao_area),
            gear: ActiveValue::Set(params.gear),
            depth_fathoms: ActiveValue::Set(params.depth_fathoms),
            bottom_water_temp_c: ActiveValue::Set(params.bottom_water_temp_c),
            bottom_water_depth_fathoms: ActiveValue::Set(params.bottom_water_depth_fathoms),
            specific_gravity_at_bottom: ActiveValue::Set(params.specific_gravity_at_bottom),
            surface_temp_c: ActiveValue::Set(params.surface_temp_c),
            specific_gravity_at_surface: ActiveValue::Set(params.specific_gravity_at_surface),
            water_temp_c_at_depth_fathoms: ActiveValue::Set(water_temp_c_at_depth_fathoms),
            text: ActiveValue::Set(params.text),
            hathitrust_urls: ActiveValue::Set(serde_json::Value::from(params.hathitrust_urls)),
        })
        .on_conflict(
            OnConflict::column(Column::Name)
                .update_columns([
                    Column::StationOrder,
                    Column::SedimentSample,
                    Column::Longitude,
                    Column::Latitude,
                    Column::Location,
                    Column::WaterBody,
                    Column::SeaArea,
                    Column::Place,
                    Column::Date,
                    Column::FaoArea,
                    Column::Gear,
                    Column::DepthFathoms,
                    Column::BottomWaterTempC,
                    Column::BottomWaterDepthFathoms,
                    Column::SpecificGravityAtBottom,
                    Column::SurfaceTempC,
                    Column::SpecificGravityAtSurface,
                    Column::WaterTempCAtDepthFathoms,
                    Column::Text,
                    Column::HathitrustUrls,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(Station::from_entity(entity))
    }

    /// Deletes every station-species link.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of links removed
    /// - `Err(DbErr)` - Database error during delete
    pub async fn clear_species_links(&self) -> Result<u64, DbErr> {
        let result = entity::prelude::StationSpecies::delete_many()
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Links species to a station. Links that already exist are left alone.
    ///
    /// # Arguments
    /// - `station_name` - Station to link from
    /// - `species_ids` - Ids of existing species
    pub async fn link_species(
        &self,
        station_name: &str,
        species_ids: &[String],
    ) -> Result<(), DbErr> {
        if species_ids.is_empty() {
            return Ok(());
        }

        let links = species_ids
            .iter()
            .map(|species_id| entity::station_species::ActiveModel {
                station_id: ActiveValue::Set(station_name.to_string()),
                species_id: ActiveValue::Set(species_id.clone()),
            });

        entity::prelude::StationSpecies::insert_many(links)
            .on_conflict(
                OnConflict::columns([
                    entity::station_species::Column::StationId,
                    entity::station_species::Column::SpeciesId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .do_nothing()
            .exec(self.db)
            .await?;

        Ok(())
    }
}
