pub use sea_orm_migration::prelude::*;

mod m20211006_000001_enable_postgres_extensions;
mod m20211006_000002_create_data_source_table;
mod m20211006_000003_create_species_table;
mod m20211006_000004_create_species_extra_table;
mod m20211006_000005_create_species_synonyms_table;
mod m20211006_000006_create_species_common_names_table;
mod m20211006_000007_create_station_table;
mod m20211006_000008_create_stations_species_table;
mod m20211006_000009_create_user_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20211006_000001_enable_postgres_extensions::Migration),
            Box::new(m20211006_000002_create_data_source_table::Migration),
            Box::new(m20211006_000003_create_species_table::Migration),
            Box::new(m20211006_000004_create_species_extra_table::Migration),
            Box::new(m20211006_000005_create_species_synonyms_table::Migration),
            Box::new(m20211006_000006_create_species_common_names_table::Migration),
            Box::new(m20211006_000007_create_station_table::Migration),
            Box::new(m20211006_000008_create_stations_species_table::Migration),
            Box::new(m20211006_000009_create_user_table::Migration),
        ]
    }
}
