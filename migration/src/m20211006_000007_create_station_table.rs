use sea_orm_migration::{
    prelude::*,
    schema::*,
    sea_orm::{ConnectionTrait, DbBackend},
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Station::Table)
                    .if_not_exists()
                    .col(string_len(Station::Name, 20).primary_key())
                    .col(integer(Station::Order))
                    .col(string_null(Station::SedimentSample))
                    .col(double(Station::Longitude))
                    .col(double(Station::Latitude))
                    .col(string(Station::Location))
                    .col(string(Station::WaterBody))
                    .col(string_null(Station::SeaArea))
                    .col(string_null(Station::Place))
                    .col(date(Station::Date))
                    .col(integer(Station::FaoArea))
                    .col(string_null(Station::Gear))
                    .col(integer_null(Station::DepthFathoms))
                    .col(double_null(Station::BottomWaterTempC))
                    .col(integer_null(Station::BottomWaterDepthFathoms))
                    .col(double_null(Station::SpecificGravityAtBottom))
                    .col(double_null(Station::SurfaceTempC))
                    .col(double_null(Station::SpecificGravityAtSurface))
                    .col(json(Station::WaterTempCAtDepthFathoms))
                    .col(text(Station::Text))
                    .col(json(Station::HathitrustUrls))
                    .to_owned(),
            )
            .await?;

        // The PostGIS point is derived from longitude/latitude so writes only
        // ever touch the plain columns.
        if manager.get_database_backend() == DbBackend::Postgres {
            let db = manager.get_connection();
            db.execute_unprepared(
                "ALTER TABLE stations ADD COLUMN IF NOT EXISTS coordinates \
                 geometry(Point, 4326) GENERATED ALWAYS AS \
                 (ST_SetSRID(ST_MakePoint(longitude, latitude), 4326)) STORED",
            )
            .await?;
            db.execute_unprepared(
                "CREATE INDEX IF NOT EXISTS idx_stations_coordinates \
                 ON stations USING gist (coordinates)",
            )
            .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Station::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Station {
    #[sea_orm(iden = "stations")]
    Table,
    Name,
    Order,
    SedimentSample,
    Longitude,
    Latitude,
    Location,
    WaterBody,
    SeaArea,
    Place,
    Date,
    FaoArea,
    Gear,
    DepthFathoms,
    BottomWaterTempC,
    BottomWaterDepthFathoms,
    SpecificGravityAtBottom,
    SurfaceTempC,
    SpecificGravityAtSurface,
    WaterTempCAtDepthFathoms,
    Text,
    HathitrustUrls,
}
