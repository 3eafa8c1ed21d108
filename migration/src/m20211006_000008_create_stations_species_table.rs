use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20211006_000003_create_species_table::Species,
    m20211006_000007_create_station_table::Station,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StationsSpecies::Table)
                    .if_not_exists()
                    .col(string_len(StationsSpecies::StationId, 20))
                    .col(string(StationsSpecies::SpeciesId))
                    .primary_key(
                        Index::create()
                            .col(StationsSpecies::StationId)
                            .col(StationsSpecies::SpeciesId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_stations_species_station_id")
                            .from(StationsSpecies::Table, StationsSpecies::StationId)
                            .to(Station::Table, Station::Name)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_stations_species_species_id")
                            .from(StationsSpecies::Table, StationsSpecies::SpeciesId)
                            .to(Species::Table, Species::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StationsSpecies::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum StationsSpecies {
    Table,
    StationId,
    SpeciesId,
}
