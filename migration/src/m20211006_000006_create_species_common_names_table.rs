use sea_orm_migration::{prelude::*, schema::*};

use super::m20211006_000003_create_species_table::Species;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SpeciesCommonNames::Table)
                    .if_not_exists()
                    .col(string(SpeciesCommonNames::Id).primary_key())
                    .col(string(SpeciesCommonNames::Language))
                    .col(string(SpeciesCommonNames::Name))
                    .col(string(SpeciesCommonNames::SpeciesId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_species_common_names_species_id")
                            .from(SpeciesCommonNames::Table, SpeciesCommonNames::SpeciesId)
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
            .drop_table(Table::drop().table(SpeciesCommonNames::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SpeciesCommonNames {
    Table,
    Id,
    Language,
    Name,
    SpeciesId,
}
