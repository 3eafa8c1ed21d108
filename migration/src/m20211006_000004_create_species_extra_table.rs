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
                    .table(SpeciesExtra::Table)
                    .if_not_exists()
                    .col(string(SpeciesExtra::Id).primary_key())
                    .col(string_null(SpeciesExtra::ScientificName))
                    .col(boolean(SpeciesExtra::Status))
                    .col(text_null(SpeciesExtra::UnacceptedReason))
                    .col(string(SpeciesExtra::ValidName))
                    .col(string_null(SpeciesExtra::Lsid))
                    .col(boolean(SpeciesExtra::IsBrackish))
                    .col(boolean(SpeciesExtra::IsExtinct))
                    .col(boolean(SpeciesExtra::IsFreshwater))
                    .col(boolean(SpeciesExtra::IsMarine))
                    .col(boolean(SpeciesExtra::IsTerrestrial))
                    .col(string(SpeciesExtra::SpeciesId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_species_extra_species_id")
                            .from(SpeciesExtra::Table, SpeciesExtra::SpeciesId)
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
            .drop_table(Table::drop().table(SpeciesExtra::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SpeciesExtra {
    Table,
    Id,
    ScientificName,
    Status,
    UnacceptedReason,
    ValidName,
    Lsid,
    #[sea_orm(iden = "isBrackish")]
    IsBrackish,
    #[sea_orm(iden = "isExtinct")]
    IsExtinct,
    #[sea_orm(iden = "isFreshwater")]
    IsFreshwater,
    #[sea_orm(iden = "isMarine")]
    IsMarine,
    #[sea_orm(iden = "isTerrestrial")]
    IsTerrestrial,
    SpeciesId,
}
