use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "species_extra")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub scientific_name: Option<String>,
    pub status: bool,
    #[sea_orm(column_type = "Text", nullable)]
    pub unaccepted_reason: Option<String>,
    pub valid_name: String,
    pub lsid: Option<String>,
    #[sea_orm(column_name = "isBrackish")]
    pub is_brackish: bool,
    #[sea_orm(column_name = "isExtinct")]
    pub is_extinct: bool,
    #[sea_orm(column_name = "isFreshwater")]
    pub is_freshwater: bool,
    #[sea_orm(column_name = "isMarine")]
    pub is_marine: bool,
    #[sea_orm(column_name = "isTerrestrial")]
    pub is_terrestrial: bool,
    pub species_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::species::Entity",
        from = "Column::SpeciesId",
        to = "super::species::Column::Id",
        on_delete = "Cascade"
    )]
    Species,
}

impl Related<super::species::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Species.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
