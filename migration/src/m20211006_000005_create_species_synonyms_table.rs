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
                    .table(SpeciesSynonyms::Table)
                    .if_not_exists()
                    .col(string(SpeciesSynonyms::Id).primary_key())
                    .col(string_null(SpeciesSynonyms::ScientificName))
                    .col(string_null(SpeciesSynonyms::Outlink))
                    .col(string(SpeciesSynonyms::SpeciesId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_species_synonyms_species_id")
                            .from(SpeciesSynonyms::Table, SpeciesSynonyms::SpeciesId)
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
            .drop_table(Table::drop().table(SpeciesSynonyms::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SpeciesSynonyms {
    Table,
    Id,
    ScientificName,
    Outlink,
    SpeciesId,
}
