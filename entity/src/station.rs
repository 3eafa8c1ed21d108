use sea_orm::entity::prelude::*;

/// Sampling station of the expedition.
///
/// `longitude`/`latitude` hold the WGS 84 position. On PostgreSQL the
/// migrations mirror them into a generated `coordinates` PostGIS point column.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "stations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub name: String,
    #[sea_orm(column_name = "order")]
    pub station_order: i32,
    pub sediment_sample: Option<String>,
    pub longitude: f64,
    pub latitude: f64,
    pub location: String,
    pub water_body: String,
    pub sea_area: Option<String>,
    pub place: Option<String>,
    pub date: Date,
    pub fao_area: i32,
    pub gear: Option<String>,
    pub depth_fathoms: Option<i32>,
    pub bottom_water_temp_c: Option<f64>,
    pub bottom_water_depth_fathoms: Option<i32>,
    pub specific_gravity_at_bottom: Option<f64>,
    pub surface_temp_c: Option<f64>,
    pub specific_gravity_at_surface: Option<f64>,
    pub water_temp_c_at_depth_fathoms: Json,
    #[sea_orm(column_type = "Text")]
    pub text: String,
    pub hathitrust_urls: Json,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::station_species::Entity")]
    StationSpecies,
}

impl Related<super::station_species::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StationSpecies.def()
    }
}

impl Related<super::species::Entity> for Entity {
    fn to() -> RelationDef {
        super::station_species::Relation::Species.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::station_species::Relation::Station.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
