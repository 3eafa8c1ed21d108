use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DataSource::Table)
                    .if_not_exists()
                    .col(integer(DataSource::Id).primary_key())
                    .col(string_len(DataSource::Title, 150))
                    .col(string_len(DataSource::TitleShort, 150))
                    .col(string_len_null(DataSource::Description, 3000))
                    .col(string_len(DataSource::Curation, 90))
                    .col(integer_null(DataSource::RecordCount))
                    .col(date(DataSource::UpdatedAt).default("1876-08-01"))
                    .col(boolean(DataSource::IsOutLinkReady))
                    .col(string_len_null(DataSource::HomeUrl, 200))
                    .col(string_len_null(DataSource::UrlTemplate, 200))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_data_sources_title")
                    .table(DataSource::Table)
                    .col(DataSource::Title)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DataSource::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DataSource {
    #[sea_orm(iden = "data_sources")]
    Table,
    Id,
    Title,
    TitleShort,
    Description,
    Curation,
    RecordCount,
    UpdatedAt,
    IsOutLinkReady,
    HomeUrl,
    UrlTemplate,
}
