//! Station factory for creating test sampling stations.

use crate::factory::helpers::next_id;
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test stations with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let station = StationFactory::new(&db)
///     .name("1")
///     .coordinates(-9.4, 38.5)
///     .build()
///     .await?;
/// ```
pub struct StationFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    order: i32,
    longitude: f64,
    latitude: f64,
    water_body: String,
    date: NaiveDate,
    fao_area: i32,
    depth_fathoms: Option<i32>,
}

impl<'a> StationFactory<'a> {
    /// Creates a new StationFactory with default values.
    ///
    /// Defaults:
    /// - name: `"S{id}"`, order: `{id}`
    /// - coordinates: `(0.0, 0.0)`
    /// - water_body: `"Atlantic Ocean"`
    /// - date: 1873-02-15
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("S{}", id),
            order: id as i32,
            longitude: 0.0,
            latitude: 0.0,
            water_body: "Atlantic Ocean".to_string(),
            date: NaiveDate::from_ymd_opt(1873, 2, 15).unwrap_or_default(),
            fao_area: 34,
            depth_fathoms: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }

    pub fn coordinates(mut self, longitude: f64, latitude: f64) -> Self {
        self.longitude = longitude;
        self.latitude = latitude;
        self
    }

    pub fn water_body(mut self, water_body: impl Into<String>) -> Self {
        self.water_body = water_body.into();
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    pub fn fao_area(mut self, fao_area: i32) -> Self {
        self.fao_area = fao_area;
        self
    }

    pub fn depth_fathoms(mut self, depth: i32) -> Self {
        self.depth_fathoms = Some(depth);
        self
    }

    /// Builds and inserts the station entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::station::Model)` - Created station entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::station::Model, DbErr> {
        entity::station::ActiveModel {
            name: ActiveValue::Set(self.name),
            station_order: ActiveValue::Set(self.order),
            sediment_sample: ActiveValue::Set(None),
            longitude: ActiveValue::Set(self.longitude),
            latitude: ActiveValue::Set(self.latitude),
            location: ActiveValue::Set("Off the coast".to_string()),
            water_body: ActiveValue::Set(self.water_body),
            sea_area: ActiveValue::Set(None),
            place: ActiveValue::Set(None),
            date: ActiveValue::Set(self.date),
            fao_area: ActiveValue::Set(self.fao_area),
            gear: ActiveValue::Set(None),
            depth_fathoms: ActiveValue::Set(self.depth_fathoms),
            bottom_water_temp_c: ActiveValue::Set(None),
            bottom_water_depth_fathoms: ActiveValue::Set(None),
            specific_gravity_at_bottom: ActiveValue::Set(None),
            surface_temp_c: ActiveValue::Set(None),
            specific_gravity_at_surface: ActiveValue::Set(None),
            water_temp_c_at_depth_fathoms: ActiveValue::Set(serde_json::json!({})),
            text: ActiveValue::Set(String::new()),
            hathitrust_urls: ActiveValue::Set(serde_json::json!([])),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a station with default values.
///
/// Shorthand for `StationFactory::new(db).build().await`.
pub async fn create_station(db: &DatabaseConnection) -> Result<entity::station::Model, DbErr> {
    StationFactory::new(db).build().await
}

/// Links a species to a station.
///
/// # Arguments
/// - `db` - Database connection
/// - `station_id` - Name of an existing station
/// - `species_id` - ID of an existing species
pub async fn link_station_species(
    db: &DatabaseConnection,
    station_id: &str,
    species_id: &str,
) -> Result<entity::station_species::Model, DbErr> {
    entity::station_species::ActiveModel {
        station_id: ActiveValue::Set(station_id.to_string()),
        species_id: ActiveValue::Set(species_id.to_string()),
    }
    .insert(db)
    .await
}
