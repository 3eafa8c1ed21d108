use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "species")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(unique)]
    pub record_id: String,
    pub current_record_id: Option<String>,
    pub matched_name: String,
    pub matched_canonical_simple_name: Option<String>,
    pub matched_canonical_full_name: Option<String>,
    pub current_name: Option<String>,
    pub current_canonical_simple_name: Option<String>,
    pub current_canonical_full_name: Option<String>,
    pub common_name: Option<String>,
    pub classification_path: Option<String>,
    pub classification_ranks: Option<String>,
    pub classification_ids: Option<String>,
    pub outlink: Option<String>,
    pub data_source_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::data_source::Entity",
        from = "Column::DataSourceId",
        to = "super::data_source::Column::Id",
        on_delete = "Cascade"
    )]
    DataSource,
    #[sea_orm(has_many = "super::species_extra::Entity")]
    SpeciesExtra,
    #[sea_orm(has_many = "super::species_synonym::Entity")]
    SpeciesSynonym,
    #[sea_orm(has_many = "super::species_common_name::Entity")]
    SpeciesCommonName,
    #[sea_orm(has_many = "super::station_species::Entity")]
    StationSpecies,
}

impl Related<super::data_source::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DataSource.def()
    }
}

impl Related<super::species_extra::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SpeciesExtra.def()
    }
}

impl Related<super::species_synonym::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SpeciesSynonym.def()
    }
}

impl Related<super::species_common_name::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SpeciesCommonName.def()
    }
}

impl Related<super::station_species::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StationSpecies.def()
    }
}

impl Related<super::station::Entity> for Entity {
    fn to() -> RelationDef {
        super::station_species::Relation::Station.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::station_species::Relation::Species.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
