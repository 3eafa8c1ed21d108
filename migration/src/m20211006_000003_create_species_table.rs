use sea_orm_migration::{
    prelude::*,
    schema::*,
    sea_orm::{ConnectionTrait, DbBackend},
};

use super::m20211006_000002_create_data_source_table::DataSource;

/// Name columns searched by trigram similarity from the fuzzy match endpoint.
const TRIGRAM_COLUMNS: [&str; 2] = ["matched_canonical_full_name", "current_name"];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Species::Table)
                    .if_not_exists()
                    .col(string(Species::Id).primary_key())
                    .col(string_uniq(Species::RecordId))
                    .col(string_null(Species::CurrentRecordId))
                    .col(string(Species::MatchedName))
                    .col(string_null(Species::MatchedCanonicalSimpleName))
                    .col(string_null(Species::MatchedCanonicalFullName))
                    .col(string_null(Species::CurrentName))
                    .col(string_null(Species::CurrentCanonicalSimpleName))
                    .col(string_null(Species::CurrentCanonicalFullName))
                    .col(string_null(Species::CommonName))
                    .col(string_null(Species::ClassificationPath))
                    .col(string_null(Species::ClassificationRanks))
                    .col(string_null(Species::ClassificationIds))
                    .col(string_null(Species::Outlink))
                    .col(integer(Species::DataSourceId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_species_data_source_id")
                            .from(Species::Table, Species::DataSourceId)
                            .to(DataSource::Table, DataSource::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        if manager.get_database_backend() == DbBackend::Postgres {
            let db = manager.get_connection();
            for column in TRIGRAM_COLUMNS {
                db.execute_unprepared(&format!(
                    "CREATE INDEX IF NOT EXISTS ix_species_{column}_trgm \
                     ON species USING gin ({column} gin_trgm_ops)"
                ))
                .await?;
            }
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Species::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Species {
    Table,
    Id,
    RecordId,
    CurrentRecordId,
    MatchedName,
    MatchedCanonicalSimpleName,
    MatchedCanonicalFullName,
    CurrentName,
    CurrentCanonicalSimpleName,
    CurrentCanonicalFullName,
    CommonName,
    ClassificationPath,
    ClassificationRanks,
    ClassificationIds,
    Outlink,
    DataSourceId,
}
